//! Wire types for stats API responses.
//!
//! Most endpoints answer with a `resultSets` array of column-oriented
//! tables. A few older ones use a single `resultSet` object instead.

use serde::Deserialize;
use serde_json::Value;

use crate::core::{Cell, Table};

#[cfg(test)]
mod tests;

/// One named table inside a stats response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn into_table(self) -> Table {
        let mut table = Table::new(self.headers);
        for row in &self.row_set {
            table.push_row(row.iter().map(Cell::from).collect());
        }
        table
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<ResultSet>),
    One(ResultSet),
}

/// Top-level envelope shared by the `resultSets` endpoints
#[derive(Debug, Deserialize)]
pub struct StatsEnvelope {
    #[serde(rename = "resultSets", alias = "resultSet")]
    result_sets: OneOrMany,
}

impl StatsEnvelope {
    pub fn into_result_sets(self) -> Vec<ResultSet> {
        match self.result_sets {
            OneOrMany::Many(sets) => sets,
            OneOrMany::One(set) => vec![set],
        }
    }

    /// The result set called `name`, or the first one when no name matches.
    pub fn into_table(self, name: &str) -> Option<Table> {
        let mut sets = self.into_result_sets();
        let idx = sets.iter().position(|s| s.name == name).unwrap_or(0);
        if sets.is_empty() {
            return None;
        }
        Some(sets.swap_remove(idx).into_table())
    }
}
