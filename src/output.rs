//! Terminal output formatting for the symbols CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs, written to
//! stderr. Stdout is reserved for machine-readable output (`--json`).

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Status printer; colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// e.g. "     Drawing 30 shapes on a 900x600 canvas"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let line = self.format_line(color, verb, message);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }

    fn format_line(&self, color: &str, verb: &str, message: &str) -> String {
        if self.color {
            format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluralize a count: `plural(1, "shape", "shapes")` → "1 shape".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "shape", "shapes"), "0 shapes");
        assert_eq!(plural(1, "shape", "shapes"), "1 shape");
        assert_eq!(plural(30, "shape", "shapes"), "30 shapes");
    }

    #[test]
    fn test_plain_line_is_right_aligned() {
        let line = Printer::plain().format_line(GREEN, "Drawing", "30 shapes");
        assert_eq!(line, "     Drawing 30 shapes");
    }

    #[test]
    fn test_relative_path_passes_through() {
        assert_eq!(display_path(Path::new("random.png")), "random.png");
    }

    #[test]
    fn test_display_path_absolute() {
        let p = Path::new("/nonexistent/path/to/random.png");
        assert_eq!(display_path(p), "/nonexistent/path/to/random.png");
    }
}
