//! Display a previously written CSV file

use std::path::Path;

use tracing::debug;

use crate::{
    core::{read_table, Table},
    NbaError, Result,
};

/// Handle the `read-stats` command
///
/// Only `.csv` names are accepted; that is checked before touching the
/// filesystem. A missing file prints a message and yields `Ok(None)`.
pub fn handle_read_stats(filename: &str, data_dir: &Path) -> Result<Option<Table>> {
    if !filename.ends_with(".csv") {
        return Err(NbaError::invalid_input(
            "filename",
            filename,
            "a .csv file name",
        ));
    }

    let path = data_dir.join(filename);
    if !path.is_file() {
        println!(
            "File '{}' not found in '{}' directory.",
            filename,
            data_dir.display()
        );
        return Ok(None);
    }

    debug!(path = %path.display(), "reading csv");
    let table = read_table(&path)?;
    print!("{}", table);
    Ok(Some(table))
}
