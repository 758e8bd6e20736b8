//! Fixed-layout screen rendering.
//!
//! Screens are plain text written to the operator's terminal: a framed
//! title, then the screen body. Column widths come from
//! `doorcard_core::constants` so the card table lines up with the
//! timestamps the registry produces.

use std::fmt::Display;
use std::io::{self, Write};

use doorcard_core::constants::{CARD_TABLE_COLUMNS, SCREEN_RULE_WIDTH};
use doorcard_registry::CardRecord;

use crate::menu::MenuChoice;

/// Shown when the card table would be empty.
pub const NO_CARDS: &str = "No cards in system.";

/// Shown after a screen that waits for the operator.
pub const PRESS_ENTER: &str = "\nPress Enter to continue...";

/// Prompt for a main menu or sub-menu number.
pub const CHOICE_PROMPT: &str = "Enter your choice: ";

fn rule(fill: char) -> String {
    std::iter::repeat_n(fill, SCREEN_RULE_WIDTH).collect()
}

/// Startup banner, written once per session.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = rule('=');
    writeln!(out, "{rule}\n    DOOR ACCESS CARD SYSTEM\n{rule}\n")
}

/// Blank line, rule, `title`, rule.
pub fn write_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = rule('=');
    writeln!(out, "\n{rule}\n{title}\n{rule}")
}

/// Main menu with its numbered entries, closed by a rule.
pub fn write_main_menu<W: Write>(out: &mut W) -> io::Result<()> {
    write_header(out, "MAIN MENU")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    writeln!(out, "{}", rule('='))
}

fn table_row(shortcode: &dyn Display, access: &dyn Display, date: &dyn Display) -> String {
    let [code_width, access_width, date_width] = CARD_TABLE_COLUMNS;
    format!("{shortcode:<code_width$} {access:<access_width$} {date:<date_width$}")
}

/// Card table in insertion order, or [`NO_CARDS`] when there are none.
///
/// # Examples
///
/// ```
/// use doorcard_core::{Shortcode, Timestamp};
/// use doorcard_registry::CardRecord;
/// use doorcard_terminal::screen::render_card_table;
///
/// let added = Timestamp::parse("2025-10-27 14:30:00").unwrap();
/// let cards = [CardRecord::new(Shortcode::new("1212"), true, added)];
///
/// let table = render_card_table(&cards);
/// assert!(table.contains("1212       HAS ACCESS      2025-10-27 14:30:00"));
/// ```
pub fn render_card_table(cards: &[CardRecord]) -> String {
    if cards.is_empty() {
        return format!("{NO_CARDS}\n");
    }

    let mut table = String::new();
    table.push_str(&table_row(&"Shortcode", &"Access", &"Date Added"));
    table.push('\n');
    table.push_str(&rule('-'));
    table.push('\n');

    for card in cards {
        table.push_str(&table_row(
            &card.shortcode,
            &card.access_status(),
            &card.last_modified,
        ));
        table.push('\n');
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use doorcard_core::{Shortcode, Timestamp};

    fn card(code: &str, access: bool, at: &str) -> CardRecord {
        CardRecord::new(Shortcode::new(code), access, Timestamp::parse(at).unwrap())
    }

    #[test]
    fn test_banner() {
        let mut out = Vec::new();
        write_banner(&mut out).unwrap();
        let rule = "=".repeat(46);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{rule}\n    DOOR ACCESS CARD SYSTEM\n{rule}\n\n")
        );
    }

    #[test]
    fn test_header() {
        let mut out = Vec::new();
        write_header(&mut out, "ALL CARDS IN SYSTEM").unwrap();
        let rule = "=".repeat(46);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("\n{rule}\nALL CARDS IN SYSTEM\n{rule}\n")
        );
    }

    #[test]
    fn test_main_menu_lists_all_entries() {
        let mut out = Vec::new();
        write_main_menu(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "MAIN MENU");
        assert_eq!(lines[4], "1. Remote open door");
        assert_eq!(lines[5], "2. List all cards in system");
        assert_eq!(lines[6], "3. Add/remove access");
        assert_eq!(lines[7], "4. Fake card test scanning");
        assert_eq!(lines[8], "5. Exit");
        assert_eq!(lines[9], "=".repeat(46));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(render_card_table(&[]), "No cards in system.\n");
    }

    #[test]
    fn test_table_layout() {
        let cards = [
            card("1212", true, "2025-10-27 14:30:00"),
            card("ABCDEFGHI", false, "2025-10-27 15:00:05"),
        ];
        let table = render_card_table(&cards);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(
            lines[0],
            "Shortcode  Access          Date Added          "
        );
        assert_eq!(lines[1], "-".repeat(46));
        assert_eq!(
            lines[2],
            "1212       HAS ACCESS      2025-10-27 14:30:00 "
        );
        assert_eq!(
            lines[3],
            "ABCDEFGHI  DENIED          2025-10-27 15:00:05 "
        );
        assert_eq!(lines.len(), 4);
    }
}
