//! League snapshot (roster + match log) and StandingsError.

use crate::models::game::{MatchLog, RecordField};
use crate::models::player::{PlayerId, Roster};
use serde::{Deserialize, Serialize};

/// Errors that can occur while computing standings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StandingsError {
    /// A present score or tower tally is not two integers ("a-b").
    MalformedRecord {
        match_id: String,
        field: RecordField,
        value: String,
    },
    /// A ranked player has no roster entry when names are resolved.
    UnknownPlayer(PlayerId),
    /// Division other than 1 or 2.
    InvalidDivision(u8),
    /// No comparator profile by this name.
    UnknownProfile(String),
}

impl std::fmt::Display for StandingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StandingsError::MalformedRecord { match_id, field, value } => {
                write!(f, "Match {} has a malformed {}: {:?}", match_id, field, value)
            }
            StandingsError::UnknownPlayer(id) => write!(f, "Player {} is not in the roster", id),
            StandingsError::InvalidDivision(n) => write!(f, "Division must be 1 or 2 (got {})", n),
            StandingsError::UnknownProfile(name) => write!(f, "Unknown standings profile {:?}", name),
        }
    }
}

impl std::error::Error for StandingsError {}

/// Immutable snapshot of the league: who plays, and every match on record.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub roster: Roster,
    pub games: MatchLog,
    /// Next id the entry form would hand out.
    pub next_game_id: u64,
}

impl League {
    pub fn new(roster: Roster, games: MatchLog) -> Self {
        let next_game_id = next_id_after(&games);
        Self {
            roster,
            games,
            next_game_id,
        }
    }

    /// Parse the roster JSON (`id -> player`) and the games JSON.
    ///
    /// The games document is either the exported `{ "games": {..}, "nextGameId": n }` wrapper
    /// or a bare `id -> match` map. A `games` key holding a match (a bare map whose id happens
    /// to be "games") is read as a bare map.
    pub fn from_json(roster_json: &str, games_json: &str) -> Result<Self, serde_json::Error> {
        let roster: Roster = serde_json::from_str(roster_json)?;
        let mut document: serde_json::Value = serde_json::from_str(games_json)?;

        let wrapped = document
            .get("games")
            .is_some_and(|games| games.get("player1").is_none());
        if !wrapped {
            let games: MatchLog = serde_json::from_value(document)?;
            return Ok(Self::new(roster, games));
        }

        let next_game_id = document.get("nextGameId").and_then(serde_json::Value::as_u64);
        let games: MatchLog = serde_json::from_value(document["games"].take())?;
        let league = match next_game_id {
            Some(next_game_id) => Self {
                roster,
                games,
                next_game_id,
            },
            None => Self::new(roster, games),
        };
        Ok(league)
    }
}

/// One past the largest numeric match id (non-numeric ids are ignored).
fn next_id_after(games: &MatchLog) -> u64 {
    games
        .keys()
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1)
}
