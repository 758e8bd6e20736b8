mod cli;
mod logger;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use doorcard_registry::RegistryError;
use doorcard_terminal::{Delay, NoDelay, Terminal, ThreadDelay};
use tracing::{debug, error, info};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    debug!("CLI arguments: {:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli
        .terminal_config()
        .context("Invalid terminal configuration")?;

    let registry = config.registry_builder().build().map_err(|e| match e {
        RegistryError::AllocationFailed { .. } => {
            anyhow::Error::new(e).context("Failed to allocate memory for card system")
        }
        other => anyhow::Error::new(other).context("Failed to set up card registry"),
    })?;
    info!(
        "Card registry ready (capacity {}, limit {:?})",
        registry.capacity(),
        registry.max_records()
    );

    let delay: Box<dyn Delay> = if cli.no_delay {
        info!("Simulated delays disabled");
        Box::new(NoDelay)
    } else {
        Box::new(ThreadDelay)
    };

    let mut terminal = Terminal::new(
        io::stdin().lock(),
        io::stdout().lock(),
        delay,
        registry,
        config,
    );
    terminal.run().context("Terminal session failed")?;

    Ok(())
}
