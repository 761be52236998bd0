// wscensor/src/ui/diff_viewer.rs
//! Unified diff of a workspace before and after censoring.
//!
//! Removed lines are red, added lines green, when the writer is a color terminal.

use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes the changes between `original` and `censored` as diff hunks.
pub fn print_diff<W: Write>(
    original: &str,
    censored: &str,
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    let patch = create_patch(original, censored);

    if patch.hunks().is_empty() {
        return writeln!(writer, "No changes.");
    }

    writeln!(writer, "--- original")?;
    writeln!(writer, "+++ censored")?;

    for hunk in patch.hunks() {
        let header = format!(
            "@@ -{},{} +{},{} @@",
            hunk.old_range().start(),
            hunk.old_range().len(),
            hunk.new_range().start(),
            hunk.new_range().len()
        );
        if supports_color {
            writeln!(writer, "{}", header.cyan())?;
        } else {
            writeln!(writer, "{}", header)?;
        }

        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    let line = format!("-{}", s.trim_end_matches('\n'));
                    if supports_color {
                        writeln!(writer, "{}", line.red())?;
                    } else {
                        writeln!(writer, "{}", line)?;
                    }
                }
                DiffLine::Insert(s) => {
                    let line = format!("+{}", s.trim_end_matches('\n'));
                    if supports_color {
                        writeln!(writer, "{}", line.green())?;
                    } else {
                        writeln!(writer, "{}", line)?;
                    }
                }
                DiffLine::Context(s) => {
                    writeln!(writer, " {}", s.trim_end_matches('\n'))?;
                }
            }
        }
    }

    Ok(())
}
