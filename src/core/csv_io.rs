//! CSV persistence for tabular results.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::table::{Cell, Table};
use crate::Result;

/// Write `table` to `path` as CSV and return the path written.
///
/// Missing parent directories are created. An existing file is always
/// replaced; there is no append or merge.
pub fn write_table(table: &Table, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    if !table.columns().is_empty() {
        writer.write_record(table.columns())?;
    }
    for row in table.rows() {
        writer.write_record(row.iter().map(Cell::to_field))?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = table.len(), "wrote csv");
    println!("Wrote {} rows to {}", table.len(), path.display());

    Ok(path.to_path_buf())
}

/// Read a CSV file with a header row back into a [`Table`].
///
/// Cell types are inferred from the text (see [`Cell::parse`]).
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let mut table = Table::new(reader.headers()?.iter());
    for record in reader.records() {
        table.push_row(record?.iter().map(Cell::parse).collect());
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> Table {
        let mut t = Table::new(["id", "full_name", "is_active", "FG_PCT", "MIN"]);
        t.push_row(vec![
            Cell::Int(2544),
            "LeBron James".into(),
            Cell::Bool(true),
            Cell::Float(0.505),
            "35:12".into(),
        ]);
        t.push_row(vec![
            Cell::Int(1630559),
            "Austin Reaves, Jr.".into(),
            Cell::Bool(true),
            Cell::Null,
            Cell::Null,
        ]);
        t
    }

    #[test]
    fn test_write_table_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.csv");

        let written = write_table(&sample(), &path).unwrap();

        assert_eq!(written, path);
        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("id,full_name,is_active,FG_PCT,MIN"));
        assert_eq!(lines.next(), Some("2544,LeBron James,true,0.505,35:12"));
        // Embedded comma is quoted, nulls are empty
        assert_eq!(lines.next(), Some("1630559,\"Austin Reaves, Jr.\",true,,"));
    }

    #[test]
    fn test_write_table_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale,content\n1,2\n3,4\n5,6\n").unwrap();

        write_table(&sample().head(1), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_write_header_only_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_table(&Table::new(["GAME_ID", "PTS"]), &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "GAME_ID,PTS\n");
    }

    #[test]
    fn test_round_trip_keeps_rows_and_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("players.csv");
        let original = sample();

        write_table(&original, &path).unwrap();
        let read = read_table(&path).unwrap();

        assert_eq!(read.len(), original.len());
        assert_eq!(read.columns(), original.columns());
        assert_eq!(read.get(0, "id"), Some(&Cell::Int(2544)));
        assert_eq!(read.get(1, "FG_PCT"), Some(&Cell::Null));
        // Booleans come back as text
        assert_eq!(read.get(0, "is_active"), Some(&Cell::Text("true".into())));
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let dir = tempdir().unwrap();
        assert!(read_table(&dir.path().join("nope.csv")).is_err());
    }
}
