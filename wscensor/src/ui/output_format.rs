// wscensor/src/ui/output_format.rs
//! Colored status lines for stderr.

use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "info:".green().bold(), msg)
    } else {
        writeln!(writer, "info: {}", msg)
    }
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "warning:".yellow().bold(), msg)
    } else {
        writeln!(writer, "warning: {}", msg)
    }
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "error:".red().bold(), msg)
    } else {
        writeln!(writer, "error: {}", msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_messages_have_no_escape_codes() {
        let mut out = Vec::new();
        print_warn_message(&mut out, "nothing configured", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "warning: nothing configured\n");
    }

    #[test]
    fn test_colored_messages_keep_text() {
        let mut out = Vec::new();
        print_info_message(&mut out, "done", true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.ends_with("done\n"));
    }
}
