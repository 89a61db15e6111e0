mod cli;
mod config;
mod display;
mod error;
mod format;
mod highlight;
mod info;
mod input;

use clap::Parser;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::process::ExitCode;

use syntect::highlighting::ThemeSet;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Args;
use config::EffectiveConfig;
use error::{HypeError, EXIT_SUCCESS};
use format::FormatSelection;
use highlight::{process_document, SyntectCatalog};
use info::InfoAction;
use input::{load_content, InputSource};

/// Environment variable holding the log filter
const LOG_ENV: &str = "HYPE_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), HypeError> {
    let catalog = SyntectCatalog::bundled();
    let themes = ThemeSet::load_defaults();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Some(action) = InfoAction::from_args(&args) {
        action.run(&catalog, &themes, &mut out)?;
        out.flush()?;
        return Ok(());
    }

    let config = EffectiveConfig::resolve(&args);
    debug!("Effective config: {:?}", config);
    let format = FormatSelection::resolve(&config, &themes);

    for path in args.inputs() {
        let source = InputSource::from_arg(&path);
        debug!("Processing {}", source.name());

        let document = load_content(source)?;
        debug!("Read {} bytes ({})", document.bytes.len(), document.encoding);

        // Whatever was rendered before a failure still reaches stdout
        let result = process_document(&document, &config, &catalog, &format, &mut out);
        out.flush()?;
        result?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    match run(args) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS as u8),
        Err(e) => {
            eprintln!("hype: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
