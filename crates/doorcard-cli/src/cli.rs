//! Command-line arguments for the `doorcard` binary.

use std::time::Duration;

use clap::Parser;
use doorcard_core::constants::{
    DEFAULT_GREEN_LAMP_MS, DEFAULT_INITIAL_CAPACITY, DEFAULT_MESSAGE_PAUSE_MS, DEFAULT_RED_LAMP_MS,
};
use doorcard_terminal::TerminalConfig;

/// Door access card terminal - manage and test access cards from a text menu
#[derive(Parser, Debug, Clone)]
#[command(name = "doorcard")]
#[command(version, about, long_about = None)]
#[command(after_help = "Logs go to stderr. RUST_LOG overrides the --verbose filter.")]
pub struct Cli {
    /// Enable debug logging for the doorcard crates
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Skip simulated lamp and message delays
    #[arg(long, default_value_t = false)]
    pub no_delay: bool,

    /// How long the lamp stays GREEN after a grant or remote open
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_GREEN_LAMP_MS)]
    pub green_ms: u64,

    /// How long the lamp stays RED after a denial
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_RED_LAMP_MS)]
    pub red_ms: u64,

    /// Pause after operator messages before the menu returns
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_MESSAGE_PAUSE_MS)]
    pub pause_ms: u64,

    /// Cards reserved in memory at startup
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_INITIAL_CAPACITY, value_parser = parse_count)]
    pub initial_capacity: usize,

    /// Maximum number of cards on file (unlimited if not set)
    #[arg(long, value_name = "COUNT", value_parser = parse_count)]
    pub max_cards: Option<usize>,
}

impl Cli {
    /// Terminal settings described by these arguments.
    ///
    /// # Errors
    ///
    /// Returns `doorcard_core::Error::Config` if the combination is rejected
    /// by [`TerminalConfig::validate`].
    pub fn terminal_config(&self) -> doorcard_core::Result<TerminalConfig> {
        TerminalConfig::builder()
            .with_green_lamp(Duration::from_millis(self.green_ms))
            .with_red_lamp(Duration::from_millis(self.red_ms))
            .with_message_pause(Duration::from_millis(self.pause_ms))
            .with_initial_capacity(self.initial_capacity)
            .with_max_cards(self.max_cards)
            .build()
    }
}

/// Parse a card count of at least 1.
fn parse_count(value: &str) -> Result<usize, String> {
    let count: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a whole number"))?;
    if count == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(count)
}
