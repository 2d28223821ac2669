//! Seasons, season types, and date handling for the stats API.

use crate::error::{NbaError, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Date format users type on the command line.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
/// Date format the stats API expects in `DateFrom` / `DateTo`.
pub const UPSTREAM_DATE_FORMAT: &str = "%m/%d/%Y";

/// Convert a `YYYY-MM-DD` date to the upstream `MM/DD/YYYY` format.
///
/// Input already in `MM/DD/YYYY` is returned unchanged.
///
/// ```rust
/// use nba_data::cli::types::time::format_date_for_upstream;
///
/// assert_eq!(format_date_for_upstream("2024-01-15").unwrap(), "01/15/2024");
/// assert_eq!(format_date_for_upstream("01/15/2024").unwrap(), "01/15/2024");
/// assert!(format_date_for_upstream("15-01-2024").is_err());
/// ```
pub fn format_date_for_upstream(date: &str) -> Result<String> {
    if has_shape(date, "dddd-dd-dd") {
        return parse_iso_date(date).map(|d| d.format(UPSTREAM_DATE_FORMAT).to_string());
    }
    if has_shape(date, "dd/dd/dddd") && NaiveDate::parse_from_str(date, UPSTREAM_DATE_FORMAT).is_ok()
    {
        return Ok(date.to_string());
    }
    Err(NbaError::InvalidDate {
        input: date.to_string(),
    })
}

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(date: &str) -> Result<NaiveDate> {
    let trimmed = date.trim();
    if !has_shape(trimmed, "dddd-dd-dd") {
        return Err(NbaError::InvalidDate {
            input: date.to_string(),
        });
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).map_err(|_| NbaError::InvalidDate {
        input: date.to_string(),
    })
}

/// `d` matches an ASCII digit, any other char matches itself.
fn has_shape(s: &str, pattern: &str) -> bool {
    s.len() == pattern.len()
        && s.chars().zip(pattern.chars()).all(|(c, p)| match p {
            'd' => c.is_ascii_digit(),
            _ => c == p,
        })
}

/// League season token, `YYYY` or `YYYY-YY`.
///
/// Forwarded to the API verbatim; only the shape is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Season(String);

impl Season {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Season {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if has_shape(trimmed, "dddd") || has_shape(trimmed, "dddd-dd") {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(NbaError::invalid_input(
                "season",
                s,
                "season string in 'YYYY-YY' or 'YYYY' format (e.g. '2022-23', '2022')",
            ))
        }
    }
}

/// Season string the given day falls into.
///
/// The league year turns over in October: `2024-11-02` is in `2024-25`,
/// `2025-03-01` is still in `2024-25`.
pub fn current_season(today: NaiveDate) -> Season {
    let start = if today.month() >= 10 {
        today.year()
    } else {
        today.year() - 1
    };
    Season(format!("{}-{:02}", start, (start + 1).rem_euclid(100)))
}

/// Part of the league year a query covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SeasonType {
    RegularSeason,
    Playoffs,
    PreSeason,
    AllStar,
    PlayIn,
}

impl Default for SeasonType {
    fn default() -> Self {
        SeasonType::RegularSeason
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
            SeasonType::PreSeason => "Pre Season",
            SeasonType::AllStar => "All Star",
            SeasonType::PlayIn => "PlayIn",
        };
        write!(f, "{}", s)
    }
}

/// Inclusive date window; either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Build a range, rejecting `from > to`.
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self> {
        if let (Some(f), Some(t)) = (from, to) {
            if f > t {
                return Err(NbaError::invalid_input(
                    "date range",
                    format!("{} to {}", f, t),
                    "date-from on or before date-to",
                ));
            }
        }
        Ok(Self { from, to })
    }

    /// Both bounds on the same day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            from: Some(date),
            to: Some(date),
        }
    }

    /// Combine `--date`, `--date-from` and `--date-to`.
    ///
    /// Explicit bounds win; `--date` fills whichever bound is missing.
    pub fn from_cli(
        date: Option<&str>,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> Result<Self> {
        let date = date.map(parse_iso_date).transpose()?;
        let from = date_from.map(parse_iso_date).transpose()?.or(date);
        let to = date_to.map(parse_iso_date).transpose()?.or(date);
        Self::new(from, to)
    }

    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn upstream_from(&self) -> Option<String> {
        self.from
            .map(|d| d.format(UPSTREAM_DATE_FORMAT).to_string())
    }

    pub fn upstream_to(&self) -> Option<String> {
        self.to.map(|d| d.format(UPSTREAM_DATE_FORMAT).to_string())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_else(|| "..".into());
        write!(f, "{} to {}", bound(self.from), bound(self.to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_for_upstream() {
        assert_eq!(format_date_for_upstream("2024-01-15").unwrap(), "01/15/2024");
        assert_eq!(format_date_for_upstream("2023-12-25").unwrap(), "12/25/2023");
    }

    #[test]
    fn test_format_date_is_idempotent() {
        let once = format_date_for_upstream("2024-01-15").unwrap();
        assert_eq!(format_date_for_upstream(&once).unwrap(), once);
    }

    #[test]
    fn test_format_date_rejects_other_shapes() {
        for bad in ["15-01-2024", "2024/01/15", "2024-1-15", "", "yesterday"] {
            match format_date_for_upstream(bad) {
                Err(NbaError::InvalidDate { input }) => assert_eq!(input, bad),
                other => panic!("expected InvalidDate for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_format_date_rejects_impossible_dates() {
        assert!(format_date_for_upstream("2024-13-01").is_err());
        assert!(format_date_for_upstream("2023-02-29").is_err());
        assert!(format_date_for_upstream("13/01/2024").is_err());
    }

    #[test]
    fn test_season_shapes() {
        assert_eq!("2022-23".parse::<Season>().unwrap().as_str(), "2022-23");
        assert_eq!("2005".parse::<Season>().unwrap().as_str(), "2005");
        // The second half is not checked against the first
        assert!("2022-25".parse::<Season>().is_ok());

        assert!("".parse::<Season>().is_err());
        assert!("22-23".parse::<Season>().is_err());
        assert!("2022-2023".parse::<Season>().is_err());
    }

    #[test]
    fn test_current_season_turns_over_in_october() {
        assert_eq!(current_season(date(2024, 11, 2)).as_str(), "2024-25");
        assert_eq!(current_season(date(2025, 3, 1)).as_str(), "2024-25");
        assert_eq!(current_season(date(2025, 10, 1)).as_str(), "2025-26");
        assert_eq!(current_season(date(2099, 12, 1)).as_str(), "2099-00");
    }

    #[test]
    fn test_season_type_display() {
        assert_eq!(SeasonType::default().to_string(), "Regular Season");
        assert_eq!(SeasonType::Playoffs.to_string(), "Playoffs");
        assert_eq!(SeasonType::PreSeason.to_string(), "Pre Season");
    }

    #[test]
    fn test_date_range_rejects_inverted_bounds() {
        assert!(DateRange::new(Some(date(2024, 2, 1)), Some(date(2024, 1, 1))).is_err());
        assert!(DateRange::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 1))).is_ok());
        assert!(DateRange::new(None, Some(date(2024, 1, 1))).is_ok());
    }

    #[test]
    fn test_date_range_single_date_sets_both_bounds() {
        let range = DateRange::from_cli(Some("2024-01-15"), None, None).unwrap();
        assert_eq!(range, DateRange::single_day(date(2024, 1, 15)));
        assert_eq!(range.upstream_from().as_deref(), Some("01/15/2024"));
        assert_eq!(range.upstream_to().as_deref(), Some("01/15/2024"));
    }

    #[test]
    fn test_date_range_explicit_bounds_win() {
        let range =
            DateRange::from_cli(Some("2024-01-15"), Some("2024-01-01"), None).unwrap();
        assert_eq!(range.from, Some(date(2024, 1, 1)));
        assert_eq!(range.to, Some(date(2024, 1, 15)));
    }

    #[test]
    fn test_date_range_open() {
        let range = DateRange::from_cli(None, None, None).unwrap();
        assert!(range.is_open());
        assert_eq!(range.upstream_from(), None);
        assert_eq!(range.to_string(), ".. to ..");
    }

    #[test]
    fn test_date_range_bad_date() {
        assert!(DateRange::from_cli(None, Some("01-01-2024"), None).is_err());
    }
}
