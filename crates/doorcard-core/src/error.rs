use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid timestamp '{input}': {reason}")]
    InvalidTimestamp { input: String, reason: String },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
