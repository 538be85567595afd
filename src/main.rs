use clap::Parser;
use peak_visitors::utils::{logger, validation::Validate};
use peak_visitors::{AppSettings, CliConfig, FileSource, PeakEngine, Reporter, Result};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            // usage errors go to stderr; --help and --version go to stdout
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logger::init_cli_logger(config.verbose, config.log_format);
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("Run failed: {} (Category: {:?})", e, e.category());
            tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig) -> Result<String> {
    let settings = AppSettings::resolve(config)?;
    settings.validate()?;

    let source = FileSource::new(&settings.input_path, settings.mode);
    let result = PeakEngine::new(source).run()?;

    Reporter::new(settings.format, settings.time_style).render(&result)
}
