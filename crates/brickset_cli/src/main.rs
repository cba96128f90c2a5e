//! Catalogue query driver.
//!
//! # Responsibility
//! - Load the LEGO set catalogue once and print the example query results.
//! - Keep all output on stdout and all failures on stderr.
//!
//! # Invariants
//! - Buffered log lines are flushed before every exit path.

mod cli;

use brickset_core::{
    default_log_level, flush_logging, init_logging, LegoSetRepository, LegoSetService, StoreError,
};
use clap::Parser;
use cli::CommandLine;
use log::{error, info};
use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CommandLine::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("brickset: {err}");
            return ExitCode::FAILURE;
        }
    }

    let stdout = io::stdout();
    let result = run(&args, &mut stdout.lock());
    let code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("brickset: {err}");
            ExitCode::FAILURE
        }
    };
    flush_logging();
    code
}

fn run(args: &CommandLine, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let repo = open_repository(args)?;
    let service = LegoSetService::new(repo);
    info!(
        "event=cli_run module=cli status=start records={}",
        service.total_count()
    );

    writeln!(out, "{}", service.count_with_theme(&args.theme))?;
    writeln!(out, "{}", service.count_name_contains(&args.name_contains))?;
    service.print_names_longer_than(args.name_longer_than, out)?;
    writeln!(out, "{}", service.count_with_dimensions())?;
    service.print_first_n_names(args.first, out)?;
    out.flush()?;

    info!("event=cli_run module=cli status=ok");
    Ok(())
}

fn open_repository(args: &CommandLine) -> Result<LegoSetRepository, StoreError> {
    match args.data.as_deref() {
        Some(path) => LegoSetRepository::open_path(path),
        None => LegoSetRepository::open_bundled(),
    }
}
