//! CSV export of derived views
//!
//! Backs the "Export List" button and the CLI `export` subcommand: the
//! current derived view of a list page, one row per record, columns taken
//! from the page's column configuration.

use crate::view::Column;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write records to CSV using the given column configuration.
///
/// The header row holds the column titles; field values are quoted and
/// embedded quotes doubled per RFC 4180.
///
/// # Errors
/// Returns an error if file creation or a write fails.
pub fn export_records_to_csv<R>(records: &[&R], columns: &[Column<R>], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let header = columns
        .iter()
        .map(|c| quote(c.header))
        .collect::<Vec<_>>()
        .join(",");
    writeln!(writer, "{header}").context("Failed to write CSV header")?;

    for record in records {
        let row = columns
            .iter()
            .map(|c| quote(&(c.value)(record)))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(writer, "{row}").context("Failed to write CSV row")?;
    }

    writer.flush().context("Failed to flush CSV writer")?;
    Ok(())
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    struct Row {
        name: &'static str,
        status: &'static str,
    }

    const COLUMNS: &[Column<Row>] = &[
        Column { header: "Name", value: |r| r.name.to_string() },
        Column { header: "Status", value: |r| r.status.to_string() },
    ];

    #[test]
    fn test_export_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("rows.csv");
        let rows = [
            Row { name: "Sarah Johnson", status: "active" },
            Row { name: "Mike \"Iron\" Chen", status: "active" },
        ];
        let refs: Vec<&Row> = rows.iter().collect();

        export_records_to_csv(&refs, COLUMNS, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("\"Name\",\"Status\""));
        assert_eq!(lines.next(), Some("\"Sarah Johnson\",\"active\""));
        assert_eq!(lines.next(), Some("\"Mike \"\"Iron\"\" Chen\",\"active\""));
    }

    #[test]
    fn test_export_empty_view_writes_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        export_records_to_csv::<Row>(&[], COLUMNS, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}
