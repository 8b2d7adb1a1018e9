use anyhow::{Result, bail};
use clap::{CommandFactory, Parser};
use photodate::photodate_core::{
    Cli, ExifToolReader, Layout, Organizer, Outcome, exiftool_available,
};
use simplelog::{CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, WriteLogger};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

const LOG_FILE_NAME: &str = "photodate.log";

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let Some(root) = cli.root.clone() else {
        eprintln!("{}", Cli::command().render_long_help());
        return Ok(ExitCode::FAILURE);
    };

    // Initialize loggers
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Warn,
        Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];

    if cli.log {
        loggers.push(WriteLogger::new(
            cli.log_level,
            Config::default(),
            File::create(LOG_FILE_NAME)?,
        ));
    }

    CombinedLogger::init(loggers)?;

    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }
    if !exiftool_available() {
        bail!("exiftool is not installed or not in PATH; it is needed to read photo dates");
    }

    let layout = Layout::new(root, cli.bucket.as_str());
    let mut organizer =
        Organizer::new(layout, ExifToolReader::new()?).with_progress(io::stderr().is_terminal());
    if cli.log {
        // The log may live inside the tree being organized
        organizer = organizer.excluding(Path::new(LOG_FILE_NAME));
    }

    let outcome = organizer.run(
        cli.execution_mode(),
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;

    if let Outcome::Executed(summary) = &outcome {
        log::info!("{}", summary);
    }

    Ok(ExitCode::SUCCESS)
}
