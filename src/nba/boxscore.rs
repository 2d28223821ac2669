//! Player box-score extraction and column normalization.
//!
//! `boxscoretraditionalv3` answers with nested JSON keyed in camelCase,
//! while older payloads use the `resultSets` envelope with upper-snake
//! headers. Both are flattened into [`RawRow`]s and then mapped onto
//! [`CANONICAL_COLUMNS`].

use serde_json::{Map, Value};

use crate::{
    cli::types::GameId,
    core::{Cell, Table},
    nba::types::StatsEnvelope,
    Result,
};

/// One player's fields exactly as the API named them.
pub type RawRow = Map<String, Value>;

/// Output columns, in order.
pub const CANONICAL_COLUMNS: [&str; 23] = [
    "GAME_ID",
    "PLAYER_ID",
    "PLAYER_NAME",
    "TEAM_ID",
    "TEAM_ABBREVIATION",
    "MIN",
    "PTS",
    "REB",
    "AST",
    "STL",
    "BLK",
    "TOV",
    "PF",
    "PLUS_MINUS",
    "FGM",
    "FGA",
    "FG_PCT",
    "FG3M",
    "FG3A",
    "FG3_PCT",
    "FTM",
    "FTA",
    "FT_PCT",
];

const GAME_ID_COLUMN: usize = 0;
const PLAYER_NAME_COLUMN: usize = 2;
// MIN; everything from here on is a per-game stat.
const FIRST_STAT_COLUMN: usize = 5;

/// Source name -> canonical name. When several sources feed the same
/// column, the first non-null one in this order wins.
const COLUMN_MAP: &[(&str, &str)] = &[
    ("gameId", "GAME_ID"),
    ("GAME_ID", "GAME_ID"),
    ("personId", "PLAYER_ID"),
    ("playerId", "PLAYER_ID"),
    ("PLAYER_ID", "PLAYER_ID"),
    ("firstName", "FIRST_NAME"),
    ("familyName", "LAST_NAME"),
    ("playerName", "PLAYER_NAME"),
    ("PLAYER_NAME", "PLAYER_NAME"),
    ("name", "PLAYER_NAME"),
    ("teamId", "TEAM_ID"),
    ("TEAM_ID", "TEAM_ID"),
    ("teamTricode", "TEAM_ABBREVIATION"),
    ("teamAbbreviation", "TEAM_ABBREVIATION"),
    ("TEAM_ABBREVIATION", "TEAM_ABBREVIATION"),
    ("minutes", "MIN"),
    ("MIN", "MIN"),
    ("points", "PTS"),
    ("PTS", "PTS"),
    ("reboundsTotal", "REB"),
    ("REB", "REB"),
    ("assists", "AST"),
    ("AST", "AST"),
    ("steals", "STL"),
    ("STL", "STL"),
    ("blocks", "BLK"),
    ("BLK", "BLK"),
    ("turnovers", "TOV"),
    ("TO", "TOV"),
    ("TOV", "TOV"),
    ("foulsPersonal", "PF"),
    ("PF", "PF"),
    ("plusMinusPoints", "PLUS_MINUS"),
    ("PLUS_MINUS", "PLUS_MINUS"),
    ("fieldGoalsMade", "FGM"),
    ("FGM", "FGM"),
    ("fieldGoalsAttempted", "FGA"),
    ("FGA", "FGA"),
    ("fieldGoalsPercentage", "FG_PCT"),
    ("FG_PCT", "FG_PCT"),
    ("threePointersMade", "FG3M"),
    ("FG3M", "FG3M"),
    ("threePointersAttempted", "FG3A"),
    ("FG3A", "FG3A"),
    ("threePointersPercentage", "FG3_PCT"),
    ("FG3_PCT", "FG3_PCT"),
    ("freeThrowsMade", "FTM"),
    ("FTM", "FTM"),
    ("freeThrowsAttempted", "FTA"),
    ("FTA", "FTA"),
    ("freeThrowsPercentage", "FT_PCT"),
    ("FT_PCT", "FT_PCT"),
];

const MINUTES_FIELDS: [&str; 2] = ["minutes", "MIN"];

const TEAM_FIELDS: [&str; 4] = ["teamId", "teamCity", "teamName", "teamTricode"];

/// Pull one flat row per player out of a box-score response body.
///
/// Accepts the nested v3 payload or a `resultSets` envelope, where the
/// `PlayerStats` set is used (or the first set if none has that name).
pub fn player_rows(body: &Value) -> Result<Vec<RawRow>> {
    if let Some(box_score) = body.get("boxScoreTraditional") {
        return Ok(nested_player_rows(box_score));
    }

    let envelope: StatsEnvelope = serde_json::from_value(body.clone())?;
    let mut sets = envelope.into_result_sets();
    let Some(idx) = sets
        .iter()
        .position(|s| s.name == "PlayerStats")
        .or_else(|| (!sets.is_empty()).then_some(0))
    else {
        return Ok(Vec::new());
    };
    let set = sets.swap_remove(idx);

    Ok(set
        .row_set
        .into_iter()
        .map(|values| set.headers.iter().cloned().zip(values).collect())
        .collect())
}

fn nested_player_rows(box_score: &Value) -> Vec<RawRow> {
    let mut rows = Vec::new();

    for side in ["homeTeam", "awayTeam"] {
        let Some(team) = box_score.get(side) else {
            continue;
        };
        let players = team
            .get("players")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for player in players {
            let Some(fields) = player.as_object() else {
                continue;
            };

            let mut row = RawRow::new();
            if let Some(game_id) = box_score.get("gameId") {
                row.insert("gameId".to_string(), game_id.clone());
            }
            for key in TEAM_FIELDS {
                if let Some(v) = team.get(key) {
                    row.insert(key.to_string(), v.clone());
                }
            }
            for (key, v) in fields {
                match v {
                    Value::Object(stats) if key == "statistics" => {
                        row.extend(stats.iter().map(|(k, v)| (k.clone(), v.clone())));
                    }
                    Value::Object(_) | Value::Array(_) => {}
                    _ => {
                        row.insert(key.clone(), v.clone());
                    }
                }
            }
            rows.push(row);
        }
    }

    rows
}

/// Map raw player rows onto [`CANONICAL_COLUMNS`].
///
/// Every canonical column is present in the output; sources the row lacks
/// become null. `PLAYER_NAME` falls back to first + family name and
/// `GAME_ID` to `game_id`. Players with an empty minutes field did not
/// play: they stay in the table with every stat column null.
pub fn normalize_player_rows(rows: &[RawRow], game_id: &GameId) -> Table {
    let mut table = Table::new(CANONICAL_COLUMNS);

    for raw in rows {
        let mut row: Vec<Cell> = CANONICAL_COLUMNS
            .iter()
            .map(|col| canonical_value(raw, col))
            .collect();

        if row[PLAYER_NAME_COLUMN].is_null() {
            row[PLAYER_NAME_COLUMN] = full_name(raw);
        }
        if row[GAME_ID_COLUMN].is_null() {
            row[GAME_ID_COLUMN] = Cell::Text(game_id.to_string());
        }
        if did_not_play(raw) {
            for cell in &mut row[FIRST_STAT_COLUMN..] {
                *cell = Cell::Null;
            }
        }

        table.push_row(row);
    }

    table
}

fn canonical_value(raw: &RawRow, canonical: &str) -> Cell {
    COLUMN_MAP
        .iter()
        .filter(|(_, target)| *target == canonical)
        .filter_map(|(source, _)| raw.get(*source))
        .find(|v| !v.is_null())
        .map(Cell::from)
        .unwrap_or(Cell::Null)
}

fn full_name(raw: &RawRow) -> Cell {
    let part = |canonical| match canonical_value(raw, canonical) {
        Cell::Text(s) => s.trim().to_string(),
        _ => String::new(),
    };
    let name = format!("{} {}", part("FIRST_NAME"), part("LAST_NAME"));

    match name.trim() {
        "" => Cell::Null,
        name => Cell::Text(name.to_string()),
    }
}

fn did_not_play(raw: &RawRow) -> bool {
    let mut minutes = MINUTES_FIELDS.iter().filter_map(|f| raw.get(*f)).peekable();
    if minutes.peek().is_none() {
        return false;
    }
    minutes.all(|v| match v {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    })
}
