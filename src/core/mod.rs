//! Core utilities for the NBA data CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `table`: In-memory tabular results
//! - `csv_io`: Reading and writing tables as CSV
//! - `http`: Stats API headers and client configuration

pub mod csv_io;
pub mod http;
pub mod table;

// Re-export commonly used items for convenience
pub use csv_io::{read_table, write_table};
pub use http::{stats_header_map, ClientConfig, DEFAULT_TIMEOUT_SECS, STATS_BASE_URL};
pub use table::{Cell, Table};
