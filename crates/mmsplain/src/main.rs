//! `mmsplain` - convert binary MMS messages to plain text.
//!
//! Reads one WAP-WSP encoded MMS PDU and prints its headers and parts as
//! MIME-like text, or writes them to a file or directory.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use mmsplain_core::{Engine, EngineConfig};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Command, Options, USAGE};

fn main() -> ExitCode {
    // Initialize logging; stdout is reserved for the plain text
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mmsplain=info,mmsplain_core=info,mmsplain_wsp=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match cli::parse(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("mmsplain {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Ok(Command::Encode) => {
            error!("plain text to MMS encoding is not supported");
            ExitCode::FAILURE
        }
        Ok(Command::Convert(options)) => match run(&options) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{e:#}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("mmsplain: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(options: &Options) -> Result<()> {
    let mut config = EngineConfig::builder().include_body(options.include_body);
    if let Some(dir) = &options.metadata {
        config = config.metadata_dir(dir);
    }
    let engine = Engine::new(&config.build()).context("failed to set up the engine")?;

    let input = options.input.display();
    match (&options.output, options.with_dir) {
        (Some(dir), true) => {
            let written = engine
                .convert_to_plain_directory(&options.input, dir)
                .with_context(|| format!("failed to convert {input} into {}", dir.display()))?;
            info!(files = written.len(), dir = %dir.display(), "Success");
        }
        (Some(path), false) => {
            engine
                .convert_to_plain_file(&options.input, path)
                .with_context(|| format!("failed to convert {input} into {}", path.display()))?;
        }
        (None, _) => {
            let plain = engine
                .convert_to_plain(&options.input)
                .with_context(|| format!("failed to convert {input}"))?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(&plain)?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
