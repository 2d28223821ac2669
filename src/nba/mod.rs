//! NBA stats API access: request builders, the HTTP client, response
//! wire types, reference directories and box-score normalization.

pub mod boxscore;
pub mod endpoints;
pub mod http;
pub mod reference;
pub mod types;

pub use endpoints::StatsRequest;
pub use http::StatsClient;
pub use reference::{PlayerDirectory, PlayerRecord, TeamDirectory, TeamRecord};
