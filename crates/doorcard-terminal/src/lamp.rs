//! Simulated door lamp.
//!
//! The lamp stands in for a real door controller signal: GREEN while the
//! door is open, RED after a refused card. Showing it prints a framed panel
//! and then blocks for the color's duration.
//!
//! ```text
//!
//! *******************************************
//! *   CURRENTLY LAMP IS: GREEN               *
//! *******************************************
//! ```

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use doorcard_core::constants::{LAMP_COLOR_COLUMN_WIDTH, LAMP_PANEL_WIDTH};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TerminalConfig;
use crate::delay::Delay;

/// Lamp color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LampColor {
    /// Lamp off.
    #[default]
    Off,

    /// Door open.
    Green,

    /// Access refused.
    Red,
}

impl LampColor {
    /// Panel text for this color.
    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Green => "GREEN",
            Self::Red => "RED",
        }
    }
}

impl fmt::Display for LampColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Render the lamp panel for `color`, leading blank line included.
///
/// # Examples
///
/// ```
/// use doorcard_terminal::lamp::{LampColor, render_panel};
///
/// let panel = render_panel(LampColor::Red);
/// assert!(panel.contains("*   CURRENTLY LAMP IS: RED                 *"));
/// ```
pub fn render_panel(color: LampColor) -> String {
    let border = "*".repeat(LAMP_PANEL_WIDTH);
    format!(
        "\n{border}\n*   CURRENTLY LAMP IS: {:<width$}*\n{border}\n",
        color,
        width = LAMP_COLOR_COLUMN_WIDTH
    )
}

/// Lamp with per-color durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lamp {
    green: Duration,
    red: Duration,
}

impl Lamp {
    pub fn new(green: Duration, red: Duration) -> Self {
        Self { green, red }
    }

    /// Lamp using the durations of `config`.
    pub fn from_config(config: &TerminalConfig) -> Self {
        Self::new(config.green_lamp, config.red_lamp)
    }

    /// How long `color` stays lit.
    pub fn duration(&self, color: LampColor) -> Duration {
        match color {
            LampColor::Green => self.green,
            LampColor::Red => self.red,
            LampColor::Off => Duration::ZERO,
        }
    }

    /// Print the panel for `color` and block for its duration.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the panel fails.
    pub fn show<W: Write, D: Delay>(
        &self,
        out: &mut W,
        delay: &mut D,
        color: LampColor,
    ) -> io::Result<()> {
        out.write_all(render_panel(color).as_bytes())?;
        out.flush()?;

        let duration = self.duration(color);
        debug!("Lamp {} for {}ms", color, duration.as_millis());
        delay.pause(duration);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::RecordingDelay;
    use rstest::rstest;

    #[test]
    fn test_green_panel_layout() {
        let panel = render_panel(LampColor::Green);
        let lines: Vec<&str> = panel.split('\n').collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "*".repeat(43));
        assert_eq!(lines[2], "*   CURRENTLY LAMP IS: GREEN               *");
        assert_eq!(lines[3], "*".repeat(43));
        assert_eq!(lines[4], "");
    }

    #[rstest]
    #[case(LampColor::Green, "GREEN")]
    #[case(LampColor::Red, "RED")]
    #[case(LampColor::Off, "OFF")]
    fn test_color_column_is_twenty_wide(#[case] color: LampColor, #[case] label: &str) {
        let panel = render_panel(color);
        let expected = format!("*   CURRENTLY LAMP IS: {:<20}*", label);
        assert!(panel.contains(&expected));
        assert_eq!(expected.len(), 44);
    }

    #[test]
    fn test_show_pauses_for_color_duration() {
        let lamp = Lamp::new(Duration::from_millis(3000), Duration::from_millis(2000));
        let mut out = Vec::new();
        let mut delay = RecordingDelay::default();

        lamp.show(&mut out, &mut delay, LampColor::Green).unwrap();
        lamp.show(&mut out, &mut delay, LampColor::Red).unwrap();

        assert_eq!(
            delay.pauses(),
            &[Duration::from_millis(3000), Duration::from_millis(2000)]
        );
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("GREEN"));
        assert!(transcript.contains("RED"));
    }

    #[test]
    fn test_from_default_config() {
        let lamp = Lamp::from_config(&TerminalConfig::default());
        assert_eq!(lamp.duration(LampColor::Green), Duration::from_secs(3));
        assert_eq!(lamp.duration(LampColor::Red), Duration::from_secs(2));
        assert_eq!(lamp.duration(LampColor::Off), Duration::ZERO);
    }

    #[test]
    fn test_color_serialization() {
        assert_eq!(serde_json::to_string(&LampColor::Green).unwrap(), "\"green\"");
        assert_eq!(LampColor::default(), LampColor::Off);
    }
}
