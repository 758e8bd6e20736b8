//! Operator terminal for the door access card system.
//!
//! This crate contains the interactive shell that sits between the operator
//! and the card registry: bounded line input, numbered menus, the card
//! table and the simulated door lamp.

pub mod config;
pub mod delay;
pub mod error;
pub mod input;
pub mod lamp;
pub mod menu;
pub mod screen;
pub mod shell;

pub use config::{TerminalConfig, TerminalConfigBuilder};
pub use delay::{Delay, NoDelay, RecordingDelay, ThreadDelay};
pub use error::{TerminalError, TerminalResult};
pub use input::LineReader;
pub use lamp::{Lamp, LampColor};
pub use menu::{AccessChoice, MenuChoice};
pub use shell::Terminal;
