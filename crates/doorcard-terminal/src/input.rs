//! Bounded operator input.
//!
//! Every prompt in the terminal reads through [`LineReader`], which keeps at
//! most `buffer_size - 1` bytes of a line and throws the rest of that line
//! away. An operator holding a key down can never grow the buffer or leak
//! the tail of one answer into the next prompt.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use doorcard_terminal::input::LineReader;
//!
//! let mut reader = LineReader::new(Cursor::new("1212\nABCDEFGHIJKLMNOPQRSTUVWXYZ\n3\n"), 20);
//!
//! assert_eq!(reader.read_line().unwrap().as_deref(), Some("1212"));
//! assert_eq!(reader.read_line().unwrap().as_deref(), Some("ABCDEFGHIJKLMNOPQRS"));
//! assert_eq!(reader.read_line().unwrap().as_deref(), Some("3"));
//! assert_eq!(reader.read_line().unwrap(), None);
//! ```

use std::io::{BufRead, ErrorKind, Write};

use tracing::debug;

use crate::error::{TerminalError, TerminalResult};

/// Shown when an integer prompt receives something that is not a number.
pub const INVALID_NUMBER: &str = "Invalid input. Please enter a number.";

/// Line reader that bounds how much of each line is kept.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    max_content: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap `reader`, keeping at most `buffer_size - 1` bytes per line.
    ///
    /// A `buffer_size` below 2 is treated as 2 so that every line can keep
    /// at least one byte.
    pub fn new(reader: R, buffer_size: usize) -> Self {
        Self {
            reader,
            max_content: buffer_size.max(2) - 1,
        }
    }

    /// Maximum number of bytes kept from one line.
    pub fn max_content(&self) -> usize {
        self.max_content
    }

    /// Read one line of operator input.
    ///
    /// The line terminator (`\n` or `\r\n`) is stripped. Bytes beyond the
    /// content limit are consumed up to and including the next newline and
    /// discarded. Invalid UTF-8 is replaced with U+FFFD.
    ///
    /// Returns `Ok(None)` at end of input when no byte was read.
    ///
    /// # Errors
    ///
    /// Returns `TerminalError::Io` if the underlying reader fails.
    pub fn read_line(&mut self) -> TerminalResult<Option<String>> {
        let mut line = Vec::with_capacity(self.max_content);
        let mut read_any = false;
        let mut discarded = 0usize;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if available.is_empty() {
                break;
            }
            read_any = true;

            let newline = available.iter().position(|&b| b == b'\n');
            let content_len = newline.unwrap_or(available.len());
            let room = self.max_content - line.len();
            let keep = content_len.min(room);

            line.extend_from_slice(&available[..keep]);
            discarded += content_len - keep;

            match newline {
                Some(index) => {
                    self.reader.consume(index + 1);
                    break;
                }
                None => {
                    let consumed = available.len();
                    self.reader.consume(consumed);
                }
            }
        }

        if !read_any {
            return Ok(None);
        }

        if line.last() == Some(&b'\r') {
            line.pop();
        }

        if discarded > 0 {
            debug!(
                "Input line exceeded {} bytes, discarded {} bytes",
                self.max_content, discarded
            );
        }

        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }

    /// Prompt until the operator enters something that starts with an integer.
    ///
    /// Leading whitespace and an optional sign are accepted; anything after
    /// the digits is ignored, so `"3abc"` reads as 3. Values that do not fit
    /// in an `i64` count as non-numeric.
    ///
    /// # Errors
    ///
    /// - `TerminalError::InputClosed` if input ends before a number is read
    /// - `TerminalError::Io` if reading or writing fails
    pub fn read_int<W: Write>(&mut self, out: &mut W, prompt: &str) -> TerminalResult<i64> {
        loop {
            write!(out, "{prompt}")?;
            out.flush()?;

            let line = self.read_line()?.ok_or(TerminalError::InputClosed)?;
            if let Some(value) = parse_leading_int(&line) {
                return Ok(value);
            }

            debug!("Rejected non-numeric input {:?}", line);
            writeln!(out, "{INVALID_NUMBER}")?;
        }
    }

    /// Consume one line, whatever it holds. End of input is not an error.
    ///
    /// # Errors
    ///
    /// Returns `TerminalError::Io` if the underlying reader fails.
    pub fn wait_for_enter(&mut self) -> TerminalResult<()> {
        self.read_line()?;
        Ok(())
    }

    /// Unwrap the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Parse the integer at the start of `text`.
///
/// Accepts optional leading whitespace, an optional `+` or `-`, then at
/// least one ASCII digit. Returns `None` when there is no such prefix or it
/// overflows `i64`.
///
/// # Examples
///
/// ```
/// use doorcard_terminal::input::parse_leading_int;
///
/// assert_eq!(parse_leading_int("  42"), Some(42));
/// assert_eq!(parse_leading_int("3abc"), Some(3));
/// assert_eq!(parse_leading_int("-7"), Some(-7));
/// assert_eq!(parse_leading_int("abc"), None);
/// ```
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let digits_start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits_len = bytes[digits_start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits_len == 0 {
        return None;
    }

    trimmed[..digits_start + digits_len].parse().ok()
}
