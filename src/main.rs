use agency_analyzer::{cli, config, extractor, output};
use clap::Parser;
use cli::Cli;
use config::Config;
use std::io;
use std::process::ExitCode;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return fail(&e.to_string()),
    };

    // stdout はJSON専用なのでログは stderr へ
    if let Err(e) = init_logging(&config, cli.verbose) {
        eprintln!("logging disabled: {:#}", e);
    }

    if let Some(agency_id) = &cli.agency_id {
        debug!(agency_id = %agency_id, "agency_id is ignored");
    }

    match extractor::analyze(&cli.file) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            match output::emit_result(&mut stdout, &result) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    debug!("failed to write result: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            debug!(path = %cli.file.display(), error = ?e, "analysis failed");
            fail(&e.to_string())
        }
    }
}

fn init_logging(config: &Config, verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { config.level()? };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(config.ansi)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn fail(message: &str) -> ExitCode {
    let mut stdout = io::stdout().lock();
    if let Err(e) = output::emit_error(&mut stdout, message) {
        debug!("failed to write error record: {}", e);
    }
    ExitCode::FAILURE
}
