//! Plain text output formatting.
//!
//! Produces a human-readable table with colors and formatting.

use crate::store::{ColumnWidths, ResultsStore};
use crate::types::COLUMNS;
use console::style;
use std::io::{self, Write};

/// Write the table in human-readable form.
pub fn write_plain<W: Write>(
    out: &mut W,
    store: &ResultsStore,
    max_cell_width: usize,
) -> io::Result<()> {
    let widths = store.get(ColumnWidths {
        max: max_cell_width.max(4),
    });
    let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);

    writeln!(
        out,
        "{} {} rows{}",
        style("Results:").bold(),
        store.len(),
        if store.is_fetching() { " (fetching)" } else { "" }
    )?;

    if store.is_empty() {
        writeln!(out, "  {}", style("No results to display.").dim())?;
        return Ok(());
    }

    let header: Vec<_> = COLUMNS
        .iter()
        .zip(widths)
        .map(|(c, w)| pad(c, w))
        .collect();
    writeln!(out, "  {}", style(header.join("  ")).bold())?;
    writeln!(out, "  {}", style("─".repeat(rule_len)).dim())?;

    for row in store.data() {
        let cells: Vec<_> = row
            .cells()
            .iter()
            .zip(widths)
            .map(|(cell, w)| pad(&truncate_string(cell, w), w))
            .collect();
        writeln!(out, "  {}", cells.join("  ").trim_end())?;
    }

    Ok(())
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Left-align `s` in `width` characters.
fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{}{}", s, " ".repeat(width.saturating_sub(len)))
}

/// Truncate a string to at most `max_len` characters, adding an ellipsis if truncated.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Extend, SetFetching};
    use crate::types::DriverResult;

    fn render(store: &ResultsStore, max: usize) -> String {
        let mut buf = Vec::new();
        write_plain(&mut buf, store, max).unwrap();
        console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned()
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("hello world", 8), "hello...");
        assert_eq!(truncate_string("Räikkönen", 6), "Räi...");
    }

    #[test]
    fn test_empty_table() {
        let text = render(&ResultsStore::new(), 24);
        assert!(text.contains("0 rows"));
        assert!(text.contains("No results to display."));
    }

    #[test]
    fn test_rows_in_insertion_order() {
        let mut store = ResultsStore::new();
        store.dispatch(Extend(vec![
            DriverResult::new("2", "Second"),
            DriverResult::new("1", "First"),
        ]));
        let text = render(&store, 24);

        assert!(text.contains("2 rows"));
        assert!(text.contains("km/h"));
        let second = text.find("Second").unwrap();
        let first = text.find("First").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_long_cells_are_truncated() {
        let mut store = ResultsStore::new();
        store.dispatch(SetFetching(true));
        store.dispatch(Extend(vec![DriverResult::new("1", "Emerson Fittipaldi")]));
        let text = render(&store, 10);

        assert!(text.contains("Emerson..."));
        assert!(!text.contains("Fittipaldi"));
        assert!(text.contains("(fetching)"));
    }

    #[test]
    fn test_headers_stay_aligned_with_narrow_cells() {
        let mut store = ResultsStore::new();
        store.dispatch(Extend(vec![DriverResult::new("1", "Emerson Fittipaldi")
            .with_car("Lotus 72D", "Ford Cosworth DFV")
            .with_timing("70", "1:45:10", "-", "185.2")]));
        let text = render(&store, 4);
        let mut lines = text.lines().skip(1);
        let header = lines.next().unwrap();
        let row = lines.nth(1).unwrap();

        assert!(header.contains("Driver") && header.contains("Interval"));
        assert_eq!(header.find("Laps"), row.find("70"));
        assert_eq!(header.find("Time"), row.find("1..."));
        assert_eq!(header.find("Interval"), row.find('-'));
        assert_eq!(header.find("km/h"), row.rfind("1..."));
    }
}
