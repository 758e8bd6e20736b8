//! Interactive operator session.
//!
//! [`Terminal`] owns the card registry and drives the read-eval loop: show
//! the main menu, read a number, run the chosen screen, repeat until the
//! operator exits or input runs out.
//!
//! The terminal is generic over its input, output, delay and clock so that
//! a whole session can be scripted in tests:
//!
//! ```
//! use std::io::Cursor;
//! use doorcard_registry::CardRegistry;
//! use doorcard_terminal::{NoDelay, Terminal, TerminalConfig};
//!
//! let input = Cursor::new("3\n1212\n1\n4\n1212\n\n5\n");
//! let mut output = Vec::new();
//!
//! let mut terminal = Terminal::new(
//!     input,
//!     &mut output,
//!     NoDelay,
//!     CardRegistry::new().unwrap(),
//!     TerminalConfig::default(),
//! );
//! terminal.run().unwrap();
//! assert_eq!(terminal.registry().len(), 1);
//! drop(terminal);
//!
//! let transcript = String::from_utf8(output).unwrap();
//! assert!(transcript.contains("Card '1212' created with access GRANTED"));
//! assert!(transcript.contains("Access granted!"));
//! ```

use std::io::{BufRead, Write};
use std::time::Duration;

use doorcard_registry::{CardRegistry, Clock, DisplayMessages, SystemClock};
use tracing::{debug, info, warn};

use crate::config::TerminalConfig;
use crate::delay::Delay;
use crate::error::{TerminalError, TerminalResult};
use crate::input::LineReader;
use crate::lamp::{Lamp, LampColor};
use crate::menu::{AccessChoice, MenuChoice};
use crate::screen::{self, CHOICE_PROMPT, PRESS_ENTER};

/// What the main loop does after a screen returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Door access terminal session.
#[derive(Debug)]
pub struct Terminal<R, W, D, C: Clock = SystemClock> {
    input: LineReader<R>,
    out: W,
    delay: D,
    lamp: Lamp,
    message_pause: Duration,
    registry: CardRegistry<C>,
}

impl<R, W, D, C> Terminal<R, W, D, C>
where
    R: BufRead,
    W: Write,
    D: Delay,
    C: Clock,
{
    /// Create a session over `registry`.
    ///
    /// `config` supplies the lamp timings, the message pause and the line
    /// buffer size. Its registry sizing is not used here; size the registry
    /// with [`TerminalConfig::registry_builder`] before passing it in.
    pub fn new(
        input: R,
        out: W,
        delay: D,
        registry: CardRegistry<C>,
        config: TerminalConfig,
    ) -> Self {
        Self {
            input: LineReader::new(input, config.input_buffer_size),
            out,
            delay,
            lamp: Lamp::from_config(&config),
            message_pause: config.message_pause,
            registry,
        }
    }

    /// Registry as it stands now.
    pub fn registry(&self) -> &CardRegistry<C> {
        &self.registry
    }

    /// End the session and hand back the registry.
    pub fn into_registry(self) -> CardRegistry<C> {
        self.registry
    }

    /// Run the session until the operator exits or input ends.
    ///
    /// Both ways out print `Exiting system...` and return `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns `TerminalError::Io` if reading input or writing output fails.
    pub fn run(&mut self) -> TerminalResult<()> {
        screen::write_banner(&mut self.out)?;
        info!("Terminal session started");

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    info!("Operator exited the session");
                    break;
                }
                Err(TerminalError::InputClosed) => {
                    info!("Operator input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        writeln!(self.out, "\nExiting system...")?;
        self.out.flush()?;
        info!("Session ended with {} cards on file", self.registry.len());
        Ok(())
    }

    /// Show the main menu and run one screen.
    fn step(&mut self) -> TerminalResult<Flow> {
        screen::write_main_menu(&mut self.out)?;
        let number = self.input.read_int(&mut self.out, CHOICE_PROMPT)?;

        let Some(choice) = MenuChoice::from_number(number) else {
            debug!("Menu choice {} out of range", number);
            writeln!(self.out, "\nInvalid choice. Please try again.")?;
            self.pause_after_message()?;
            return Ok(Flow::Continue);
        };

        debug!("Menu choice: {:?}", choice);
        match choice {
            MenuChoice::RemoteOpen => self.remote_open()?,
            MenuChoice::ListCards => self.list_cards()?,
            MenuChoice::ChangeAccess => self.change_access()?,
            MenuChoice::ScanCard => self.scan_card()?,
            MenuChoice::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn remote_open(&mut self) -> TerminalResult<()> {
        screen::write_header(&mut self.out, "Opening door remotely...")?;
        info!("Door opened remotely");
        self.show_lamp(LampColor::Green)?;
        writeln!(self.out, "Door closed.")?;
        self.wait_for_enter()
    }

    fn list_cards(&mut self) -> TerminalResult<()> {
        screen::write_header(&mut self.out, "ALL CARDS IN SYSTEM")?;
        let table = screen::render_card_table(self.registry.enumerate());
        self.out.write_all(table.as_bytes())?;
        self.wait_for_enter()
    }

    fn change_access(&mut self) -> TerminalResult<()> {
        screen::write_header(&mut self.out, "ADD/REMOVE ACCESS")?;
        let shortcode = self.prompt_shortcode("Enter card shortcode: ")?;

        if shortcode.is_empty() {
            writeln!(self.out, "{}", DisplayMessages::EMPTY_SHORTCODE)?;
            return self.pause_after_message();
        }

        let current = self.registry.find(&shortcode).map(|card| card.access_status());
        match current {
            Some(status) => {
                writeln!(self.out, "\nCard '{shortcode}' found.")?;
                writeln!(self.out, "Current access: {status}")?;
                writeln!(self.out, "\n1. Grant access\n2. Deny access\n3. Cancel")?;

                let choice = self.read_access_choice()?;
                if let Some(has_access) = choice.access_flag()
                    && self.apply_access(&shortcode, has_access)?
                {
                    let verb = if has_access { "GRANTED" } else { "DENIED" };
                    writeln!(self.out, "\nAccess {verb} for card '{shortcode}'")?;
                }
            }
            None => {
                writeln!(self.out, "\nCard '{shortcode}' not found in system.")?;
                writeln!(self.out, "Do you want to create this card?")?;
                writeln!(
                    self.out,
                    "1. Yes, grant access\n2. Yes, but deny access\n3. No, cancel"
                )?;

                let choice = self.read_access_choice()?;
                if let Some(has_access) = choice.access_flag()
                    && self.apply_access(&shortcode, has_access)?
                {
                    let verb = if has_access { "GRANTED" } else { "DENIED" };
                    writeln!(
                        self.out,
                        "\nCard '{shortcode}' created with access {verb}"
                    )?;
                }
            }
        }

        self.pause_after_message()
    }

    fn scan_card(&mut self) -> TerminalResult<()> {
        screen::write_header(&mut self.out, "CARD SCANNING SIMULATION")?;
        let shortcode = self.prompt_shortcode("Enter card shortcode to scan: ")?;
        let outcome = self.registry.scan(&shortcode);

        if shortcode.is_empty() {
            writeln!(self.out, "{}", outcome.display_message())?;
        } else {
            writeln!(self.out, "\nCard '{shortcode}' scanned.")?;
            writeln!(self.out, "{}", outcome.display_message())?;
        }

        match outcome.deny_reason() {
            None => info!("Card '{}' granted", shortcode),
            Some(reason) => info!("Card '{}' denied: {:?}", shortcode, reason),
        }

        let color = if outcome.is_grant() {
            LampColor::Green
        } else {
            LampColor::Red
        };
        self.show_lamp(color)?;
        self.wait_for_enter()
    }

    /// Read a shortcode, trimmed. End of input ends the session.
    fn prompt_shortcode(&mut self, prompt: &str) -> TerminalResult<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let line = self.input.read_line()?.ok_or(TerminalError::InputClosed)?;
        Ok(line.trim().to_string())
    }

    fn read_access_choice(&mut self) -> TerminalResult<AccessChoice> {
        let number = self.input.read_int(&mut self.out, CHOICE_PROMPT)?;
        let choice = AccessChoice::from_number(number);
        if choice == AccessChoice::Cancel {
            writeln!(self.out, "\n{}", DisplayMessages::OPERATION_CANCELLED)?;
        }
        Ok(choice)
    }

    /// Store the access change. Returns `false` if the registry refused it.
    fn apply_access(&mut self, shortcode: &str, has_access: bool) -> TerminalResult<bool> {
        match self.registry.upsert(shortcode, has_access) {
            Ok(card) => {
                info!(
                    "Card '{}' access set to {}",
                    card.shortcode,
                    card.access_status()
                );
                Ok(true)
            }
            Err(e) if e.is_recoverable() => {
                warn!("Could not apply change for card '{}': {}", shortcode, e);
                writeln!(
                    self.out,
                    "ERROR: Could not apply change for card '{shortcode}': {e}"
                )?;
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn show_lamp(&mut self, color: LampColor) -> TerminalResult<()> {
        self.lamp.show(&mut self.out, &mut self.delay, color)?;
        Ok(())
    }

    fn wait_for_enter(&mut self) -> TerminalResult<()> {
        write!(self.out, "{PRESS_ENTER}")?;
        self.out.flush()?;
        self.input.wait_for_enter()
    }

    fn pause_after_message(&mut self) -> TerminalResult<()> {
        self.out.flush()?;
        self.delay.pause(self.message_pause);
        Ok(())
    }
}
