// wscensor/src/ui/summary.rs
//! Table summarizing a censoring run.

use comfy_table::{presets, Cell, Table};
use std::io::{self, Write};

use wscensor_core::{CensorReport, PaneName};

pub fn build_summary_table(report: &CensorReport, supports_color: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(if supports_color { presets::UTF8_FULL } else { presets::ASCII_FULL });
    table.set_header(vec!["Pane", "Tabs removed", "Queries redacted", "Splits regenerated"]);

    for name in PaneName::ORDER {
        let pane = report.pane(name);
        table.add_row(vec![
            Cell::new(name),
            Cell::new(pane.tabs_removed),
            Cell::new(pane.queries_redacted),
            Cell::new(pane.splits_regenerated),
        ]);
    }
    table
}

/// Writes the table followed by the recent-files and active-tab lines.
pub fn print_summary<W: Write>(report: &CensorReport, writer: &mut W, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{}", build_summary_table(report, supports_color))?;
    writeln!(writer, "Recently opened entries dropped: {}", report.recent_files_dropped)?;
    if report.active_changed() {
        writeln!(writer, "Active tab moved to '{}'.", report.active_after)?;
    } else {
        writeln!(writer, "Active tab unchanged.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wscensor_core::PaneReport;

    #[test]
    fn test_summary_lists_every_pane() {
        let report = CensorReport {
            right: PaneReport {
                tabs_removed: 3,
                ..PaneReport::default()
            },
            recent_files_dropped: 2,
            active_before: "a".to_string(),
            active_after: "b".to_string(),
            ..CensorReport::default()
        };
        let mut out = Vec::new();
        print_summary(&report, &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        for pane in ["main", "left", "right"] {
            assert!(text.contains(pane));
        }
        assert!(text.contains("Tabs removed"));
        assert!(text.contains("Recently opened entries dropped: 2"));
        assert!(text.contains("Active tab moved to 'b'."));
    }
}
