//! Data structures for the league: players, matches, the league snapshot.

mod game;
mod league;
mod player;

pub use game::{GameMatch, MatchId, MatchLog, MatchResult, RecordField, ScorePair};
pub use league::{League, StandingsError};
pub use player::{Division, Player, PlayerId, PlayerStats, Roster};
