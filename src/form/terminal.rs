use super::{ResultView, IMAGE_ELEMENT};
use colored::*;
use std::io::Write;

/// Prints the generated image URL to stdout and alerts to stderr.
pub struct TerminalView<O, E> {
    out: O,
    err: E,
    show_colors: bool,
    alerted: bool,
}

impl TerminalView<std::io::Stdout, std::io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            show_colors: true,
            alerted: false,
        }
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.show_colors = enabled;
        self
    }

    pub fn alerted(&self) -> bool {
        self.alerted
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> ResultView for TerminalView<O, E> {
    fn set_image_source(&mut self, id: &str, src: &str) {
        if id == IMAGE_ELEMENT {
            let _ = writeln!(self.out, "{}", src);
        }
    }

    // Nothing to reveal in a terminal.
    fn set_display(&mut self, _id: &str, _display: &str) {}

    fn alert(&mut self, message: &str) {
        self.alerted = true;
        let line = if self.show_colors {
            message.red().bold().to_string()
        } else {
            message.to_string()
        };
        let _ = writeln!(self.err, "{}", line);
        let _ = self.err.flush();
    }
}
