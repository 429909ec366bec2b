use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "analyze-agency")]
#[command(about = "Extract score and capacity from an agency report file", long_about = None)]
#[command(args_override_self = true, infer_long_args = true)]
pub struct Cli {
    /// 解析対象のファイル
    #[arg(long, required = true)]
    pub file: PathBuf,

    /// 呼び出し側との互換のため受け付けるのみ（解析には使わない）
    #[arg(long = "agency_id")]
    pub agency_id: Option<String>,

    /// 詳細ログを出力（stderr）
    #[arg(short, long)]
    pub verbose: bool,

    /// ログ設定JSONファイル
    #[arg(long)]
    pub config: Option<PathBuf>,
}
