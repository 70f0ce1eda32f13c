//! Pluggable reporters for benchmark console output.

use colored::Colorize;
use std::io::{self, Write};

/// Trait for rendering semantic message categories to an output sink.
///
/// Every operation is synchronous and emits exactly one newline-terminated
/// line (or, for [`newline`](Reporter::newline), a batch of blank lines). A
/// failed write to the sink is the only error case and it propagates to the
/// caller rather than being swallowed.
///
/// Visual treatment is purely cosmetic and never alters the textual content:
/// a consumer parsing the output sees the same message with or without color.
///
/// All category methods default to delegating to [`line`](Reporter::line),
/// so a test double that captures output only needs to implement `line`.
pub trait Reporter {
    /// Emit the literal message followed by a line terminator.
    ///
    /// The baseline primitive all other categories build on.
    fn line(&mut self, message: &str) -> io::Result<()>;

    /// Emit with an affirmative treatment (green).
    fn info(&mut self, message: &str) -> io::Result<()> {
        self.line(message)
    }

    /// Emit with an affirmative treatment (bold green).
    fn success(&mut self, message: &str) -> io::Result<()> {
        self.line(message)
    }

    /// Emit with a caution treatment (yellow).
    fn warn(&mut self, message: &str) -> io::Result<()> {
        self.line(message)
    }

    /// Emit with a failure treatment (red).
    fn error(&mut self, message: &str) -> io::Result<()> {
        self.line(message)
    }

    /// Emit with a muted treatment (dim), used for decorative separators.
    fn comment(&mut self, message: &str) -> io::Result<()> {
        self.line(message)
    }

    /// Emit with a diagnostic treatment (cyan).
    fn debug(&mut self, message: &str) -> io::Result<()> {
        self.line(message)
    }

    /// Emit `count` blank lines as a single flush.
    fn newline(&mut self, count: usize) -> io::Result<()> {
        for _ in 0..count {
            self.line("")?;
        }
        Ok(())
    }
}

/// Console reporter that writes ANSI-styled lines to an injected sink.
///
/// Defaults to standard output with color enabled. With color disabled (or
/// when the environment suppresses it via `NO_COLOR`), treatments degrade to
/// plain text without changing message content.
pub struct ConsoleReporter<W: Write> {
    sink: W,
    color: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Create a reporter writing to standard output with color enabled.
    pub fn new() -> Self {
        Self {
            sink: io::stdout(),
            color: true,
        }
    }
}

impl Default for ConsoleReporter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Create a reporter writing to an arbitrary sink.
    ///
    /// Useful for capturing output in tests or redirecting it to a buffer.
    pub fn with_sink(sink: W) -> Self {
        Self { sink, color: true }
    }

    /// Enable or disable ANSI styling.
    pub fn color(mut self, on: bool) -> Self {
        self.color = on;
        self
    }

    /// Consume the reporter and return the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.sink, "{}", message)
    }

    fn info(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.sink, "{}", message.green())
        } else {
            self.line(message)
        }
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.sink, "{}", message.green().bold())
        } else {
            self.line(message)
        }
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.sink, "{}", message.yellow())
        } else {
            self.line(message)
        }
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.sink, "{}", message.red())
        } else {
            self.line(message)
        }
    }

    fn comment(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.sink, "{}", message.dimmed())
        } else {
            self.line(message)
        }
    }

    fn debug(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.sink, "{}", message.cyan())
        } else {
            self.line(message)
        }
    }

    fn newline(&mut self, count: usize) -> io::Result<()> {
        for _ in 0..count {
            self.sink.write_all(b"\n")?;
        }
        self.sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> ConsoleReporter<Vec<u8>> {
        ConsoleReporter::with_sink(Vec::new()).color(false)
    }

    #[test]
    fn should_emit_plain_text_when_color_disabled() {
        let mut r = plain();
        r.warn("x").unwrap();
        assert_eq!(r.into_sink(), b"x\n");
    }

    #[test]
    fn should_preserve_message_content_when_styled() {
        let mut r = ConsoleReporter::with_sink(Vec::new());
        r.warn("x").unwrap();
        let out = String::from_utf8(r.into_sink()).unwrap();
        assert!(out.contains('x'));
    }

    #[test]
    fn should_emit_blank_lines_when_newline_called() {
        let mut r = plain();
        r.newline(3).unwrap();
        assert_eq!(r.into_sink(), b"\n\n\n");
    }

    #[test]
    fn should_delegate_categories_to_line_by_default() {
        struct Capture(Vec<String>);
        impl Reporter for Capture {
            fn line(&mut self, message: &str) -> io::Result<()> {
                self.0.push(message.to_string());
                Ok(())
            }
        }

        let mut r = Capture(Vec::new());
        r.info("a").unwrap();
        r.error("b").unwrap();
        r.newline(2).unwrap();
        assert_eq!(r.0, vec!["a", "b", "", ""]);
    }
}
