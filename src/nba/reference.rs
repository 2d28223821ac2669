//! Team and player reference lists, and team identifier resolution.
//!
//! Both directories are plain values handed to whoever needs them. Nothing
//! here caches across runs: the team list is compiled in and the player
//! list is fetched from `commonallplayers` each time it is needed.

use tracing::info;

use crate::{
    cli::types::{time::current_season, PlayerId, Season, TeamId, TeamRef},
    core::{Cell, Table},
    error::EntityKind,
    nba::{endpoints::CommonAllPlayersRequest, http::StatsClient},
    NbaError, Result,
};

/// One NBA franchise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    pub id: TeamId,
    pub full_name: String,
    pub abbreviation: String,
    pub nickname: String,
    pub city: String,
    pub state: String,
    pub year_founded: u16,
}

// Same order the stats API's own static team list uses; substring matches
// resolve to the first hit in this order.
const NBA_TEAMS: [(u64, &str, &str, &str, &str, &str, u16); 30] = [
    (1610612737, "Atlanta Hawks", "ATL", "Hawks", "Atlanta", "Georgia", 1949),
    (1610612738, "Boston Celtics", "BOS", "Celtics", "Boston", "Massachusetts", 1946),
    (1610612739, "Cleveland Cavaliers", "CLE", "Cavaliers", "Cleveland", "Ohio", 1970),
    (1610612740, "New Orleans Pelicans", "NOP", "Pelicans", "New Orleans", "Louisiana", 2002),
    (1610612741, "Chicago Bulls", "CHI", "Bulls", "Chicago", "Illinois", 1966),
    (1610612742, "Dallas Mavericks", "DAL", "Mavericks", "Dallas", "Texas", 1980),
    (1610612743, "Denver Nuggets", "DEN", "Nuggets", "Denver", "Colorado", 1976),
    (1610612744, "Golden State Warriors", "GSW", "Warriors", "Golden State", "California", 1946),
    (1610612745, "Houston Rockets", "HOU", "Rockets", "Houston", "Texas", 1967),
    (1610612746, "Los Angeles Clippers", "LAC", "Clippers", "Los Angeles", "California", 1970),
    (1610612747, "Los Angeles Lakers", "LAL", "Lakers", "Los Angeles", "California", 1948),
    (1610612748, "Miami Heat", "MIA", "Heat", "Miami", "Florida", 1988),
    (1610612749, "Milwaukee Bucks", "MIL", "Bucks", "Milwaukee", "Wisconsin", 1968),
    (1610612750, "Minnesota Timberwolves", "MIN", "Timberwolves", "Minnesota", "Minnesota", 1989),
    (1610612751, "Brooklyn Nets", "BKN", "Nets", "Brooklyn", "New York", 1976),
    (1610612752, "New York Knicks", "NYK", "Knicks", "New York", "New York", 1946),
    (1610612753, "Orlando Magic", "ORL", "Magic", "Orlando", "Florida", 1989),
    (1610612754, "Indiana Pacers", "IND", "Pacers", "Indiana", "Indiana", 1976),
    (1610612755, "Philadelphia 76ers", "PHI", "76ers", "Philadelphia", "Pennsylvania", 1949),
    (1610612756, "Phoenix Suns", "PHX", "Suns", "Phoenix", "Arizona", 1968),
    (1610612757, "Portland Trail Blazers", "POR", "Trail Blazers", "Portland", "Oregon", 1970),
    (1610612758, "Sacramento Kings", "SAC", "Kings", "Sacramento", "California", 1948),
    (1610612759, "San Antonio Spurs", "SAS", "Spurs", "San Antonio", "Texas", 1976),
    (1610612760, "Oklahoma City Thunder", "OKC", "Thunder", "Oklahoma City", "Oklahoma", 1967),
    (1610612761, "Toronto Raptors", "TOR", "Raptors", "Toronto", "Ontario", 1995),
    (1610612762, "Utah Jazz", "UTA", "Jazz", "Utah", "Utah", 1974),
    (1610612763, "Memphis Grizzlies", "MEM", "Grizzlies", "Memphis", "Tennessee", 1995),
    (1610612764, "Washington Wizards", "WAS", "Wizards", "Washington", "District of Columbia", 1961),
    (1610612765, "Detroit Pistons", "DET", "Pistons", "Detroit", "Michigan", 1948),
    (1610612766, "Charlotte Hornets", "CHA", "Hornets", "Charlotte", "North Carolina", 1988),
];

/// Known teams in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDirectory {
    teams: Vec<TeamRecord>,
}

impl TeamDirectory {
    pub fn new(teams: Vec<TeamRecord>) -> Self {
        Self { teams }
    }

    /// The thirty current NBA franchises.
    pub fn nba() -> Self {
        Self::new(
            NBA_TEAMS
                .iter()
                .map(
                    |&(id, full_name, abbreviation, nickname, city, state, year_founded)| {
                        TeamRecord {
                            id: TeamId::new(id),
                            full_name: full_name.to_string(),
                            abbreviation: abbreviation.to_string(),
                            nickname: nickname.to_string(),
                            city: city.to_string(),
                            state: state.to_string(),
                            year_founded,
                        }
                    },
                )
                .collect(),
        )
    }

    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }

    pub fn find_by_id(&self, id: TeamId) -> Option<&TeamRecord> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn find_by_abbreviation(&self, abbreviation: &str) -> Option<&TeamRecord> {
        self.teams
            .iter()
            .find(|t| t.abbreviation.eq_ignore_ascii_case(abbreviation))
    }

    /// Resolve a team reference to its record.
    ///
    /// Stages, first hit wins:
    /// 1. numeric id present in the directory
    /// 2. abbreviation, case-insensitive
    /// 3. full name or nickname, exact and case-insensitive
    /// 4. full-name substring, case-insensitive, in directory order
    pub fn resolve(&self, team: &TeamRef) -> Result<&TeamRecord> {
        let found = match team {
            TeamRef::Numeric(id) => self.find_by_id(TeamId::new(*id)),
            TeamRef::Abbreviation(abbr) => self
                .find_by_abbreviation(abbr)
                .or_else(|| self.find_by_name(abbr)),
            TeamRef::FullName(name) => self.find_by_name(name),
        };

        found.ok_or_else(|| NbaError::not_found(EntityKind::Team, team.to_string()))
    }

    /// Canonical numeric id for a team reference.
    pub fn normalize_team_id(&self, team: &TeamRef) -> Result<TeamId> {
        let record = self.resolve(team)?;
        info!(input = %team, team_id = %record.id, team = %record.full_name, "resolved team");
        Ok(record.id)
    }

    fn find_by_name(&self, name: &str) -> Option<&TeamRecord> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.teams
            .iter()
            .find(|t| t.full_name.to_lowercase() == needle || t.nickname.to_lowercase() == needle)
            .or_else(|| {
                self.teams
                    .iter()
                    .find(|t| t.full_name.to_lowercase().contains(&needle))
            })
    }

    /// Teams as a table, one row per franchise.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new([
            "id",
            "full_name",
            "abbreviation",
            "nickname",
            "city",
            "state",
            "year_founded",
        ]);
        for t in &self.teams {
            table.push_row(vec![
                t.id.as_u64().into(),
                t.full_name.as_str().into(),
                t.abbreviation.as_str().into(),
                t.nickname.as_str().into(),
                t.city.as_str().into(),
                t.state.as_str().into(),
                Cell::Int(i64::from(t.year_founded)),
            ]);
        }
        table
    }
}

impl Default for TeamDirectory {
    fn default() -> Self {
        Self::nba()
    }
}

/// One player who has appeared in the league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

/// All known players, as returned by `commonallplayers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerDirectory {
    players: Vec<PlayerRecord>,
}

impl PlayerDirectory {
    pub fn new(players: Vec<PlayerRecord>) -> Self {
        Self { players }
    }

    /// Fetch the full historical player list.
    pub async fn fetch(client: &StatsClient) -> Result<Self> {
        let season = current_season(chrono::Local::now().date_naive());
        Self::fetch_for_season(client, season).await
    }

    pub async fn fetch_for_season(client: &StatsClient, season: Season) -> Result<Self> {
        let request = CommonAllPlayersRequest {
            season,
            only_current_season: false,
        };
        let table = client.fetch_table(&request).await?;
        let directory = Self::from_table(&table);
        info!(players = directory.len(), "loaded player directory");
        Ok(directory)
    }

    /// Build from a `CommonAllPlayers` result set; rows without an id are skipped.
    pub fn from_table(table: &Table) -> Self {
        let players = (0..table.len())
            .filter_map(|row| {
                let id = table
                    .get(row, "PERSON_ID")
                    .and_then(Cell::as_i64)
                    .filter(|id| *id > 0)?;
                let text = |col: &str| {
                    table
                        .get(row, col)
                        .and_then(Cell::as_str)
                        .unwrap_or_default()
                        .trim()
                        .to_string()
                };

                let last_comma_first = text("DISPLAY_LAST_COMMA_FIRST");
                let (last_name, first_name) = match last_comma_first.split_once(',') {
                    Some((last, first)) => (last.trim().to_string(), first.trim().to_string()),
                    None => (last_comma_first.clone(), String::new()),
                };
                let full_name = match text("DISPLAY_FIRST_LAST") {
                    name if name.is_empty() => {
                        format!("{} {}", first_name, last_name).trim().to_string()
                    }
                    name => name,
                };
                let is_active = table
                    .get(row, "ROSTERSTATUS")
                    .and_then(Cell::as_i64)
                    .map_or(false, |status| status == 1);

                Some(PlayerRecord {
                    id: PlayerId::new(id as u64),
                    full_name,
                    first_name,
                    last_name,
                    is_active,
                })
            })
            .collect();

        Self { players }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn find_by_id(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Players as a table, one row per player.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(["id", "full_name", "first_name", "last_name", "is_active"]);
        for p in &self.players {
            table.push_row(vec![
                p.id.as_u64().into(),
                p.full_name.as_str().into(),
                p.first_name.as_str().into(),
                p.last_name.as_str().into(),
                p.is_active.into(),
            ]);
        }
        table
    }
}
