// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Envsift CLI entry point.

use std::io::Write;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use envsift::cli::Cli;
use envsift::error::{Error, ExitCode};
use envsift::options::Options;
use envsift::{completions, emit, env};

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(env::names::ENVSIFT_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("envsift: {}", e);
            match e.downcast_ref::<Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::Failure,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        completions::write_script(shell, &mut std::io::stdout());
        return Ok(ExitCode::Success);
    }

    let opts = Options::from_cli(&cli);
    let mut entries = env::snapshot();
    tracing::debug!("{} entries in environment snapshot", entries.len());

    if opts.sort {
        entries.sort_unstable();
    }

    let stdout = std::io::stdout().lock();
    let mut out = std::io::BufWriter::new(stdout);
    let emitted = emit::emit(&entries, &opts, &mut out)?;
    out.flush().map_err(|source| Error::Io {
        context: "output",
        source,
    })?;

    tracing::debug!("emitted {emitted} of {} entries", entries.len());

    Ok(ExitCode::Success)
}
