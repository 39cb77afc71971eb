use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::debug;

use seedtool::RawParameters;
use seedtool::cli::{Cli, PromptOnRead};
use seedtool::params::resolve;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let raw = RawParameters::from(Cli::parse());

    let prompt = (raw.expects_stdin() && atty::is(atty::Stream::Stdin))
        .then_some("Enter input (one record per line, Ctrl-D to finish):");
    let stdin = PromptOnRead::new(io::stdin().lock(), io::stderr(), prompt);

    let config = match resolve(&raw, stdin) {
        Ok(config) => config,
        Err(err) => {
            debug!("Validation failed ({:?}): {err}", err.kind());
            Cli::command().error(ErrorKind::ValueValidation, err).exit()
        }
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{config}").context("Failed to write configuration")?;

    Ok(())
}
