//! Player, Division and PlayerStats data structures.

use crate::models::league::StandingsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique identifier for a player (the key of the roster JSON object).
pub type PlayerId = String;

/// Roster: every player by id. Ordered so that every walk over it is reproducible.
pub type Roster = BTreeMap<PlayerId, Player>;

/// Which standings table a player is eligible for.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Division {
    One,
    Two,
}

impl Division {
    pub const ALL: [Division; 2] = [Division::One, Division::Two];

    pub fn number(self) -> u8 {
        match self {
            Division::One => 1,
            Division::Two => 2,
        }
    }
}

impl TryFrom<u8> for Division {
    type Error = StandingsError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Division::One),
            2 => Ok(Division::Two),
            other => Err(StandingsError::InvalidDivision(other)),
        }
    }
}

impl From<Division> for u8 {
    fn from(d: Division) -> u8 {
        d.number()
    }
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Division {}", self.number())
    }
}

/// A player as stored in the roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub username: String,
    /// External profile handle, e.g. `#ABC123`.
    #[serde(default)]
    pub tag: String,
    pub division: Division,
    /// Inactive players are still ranked but flagged for display.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Unused by the standings; the roster editor writes `null` for a blank entry.
    #[serde(default)]
    pub trophies: Option<i64>,
}

fn default_active() -> bool {
    true
}

impl Player {
    /// Create an active player with the given name and division. Other fields start empty.
    pub fn new(username: impl Into<String>, division: Division) -> Self {
        Self {
            username: username.into(),
            tag: String::new(),
            division,
            is_active: true,
            trophies: None,
        }
    }

    /// Same player, marked inactive.
    pub fn inactive(self) -> Self {
        Self {
            is_active: false,
            ..self
        }
    }
}

/// Cumulative statistics for one player over every eligible match.
///
/// Counters are `u64` so that summing any number of `u32` scores cannot overflow.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub games_won: u64,
    pub games_lost: u64,
    pub games_net: i64,
    pub rubbers_won: u64,
    pub rubbers_lost: u64,
    pub rubbers_net: i64,
    pub towers_won: u64,
    pub towers_lost: u64,
    pub towers_net: i64,
    pub games_played: u64,
    /// Both sides' rubbers, summed over every match this player took part in.
    pub rubbers_played: u64,
}

/// `won - lost`; both stay far below `i64::MAX` (each match adds at most `u32::MAX`).
fn net(won: u64, lost: u64) -> i64 {
    won as i64 - lost as i64
}

impl PlayerStats {
    /// Fold one played match into these stats, seen from this player's side.
    ///
    /// `own` / `opponent` are the rubber counts, `own_towers` / `opponent_towers` the tallies.
    pub fn record_match(&mut self, own: u32, opponent: u32, own_towers: u32, opponent_towers: u32) {
        match own.cmp(&opponent) {
            std::cmp::Ordering::Greater => self.games_won += 1,
            std::cmp::Ordering::Less => self.games_lost += 1,
            std::cmp::Ordering::Equal => {}
        }
        self.games_net = net(self.games_won, self.games_lost);

        let (own, opponent) = (u64::from(own), u64::from(opponent));
        self.rubbers_won += own;
        self.rubbers_lost += opponent;
        self.rubbers_net = net(self.rubbers_won, self.rubbers_lost);

        self.towers_won += u64::from(own_towers);
        self.towers_lost += u64::from(opponent_towers);
        self.towers_net = net(self.towers_won, self.towers_lost);

        self.games_played += 1;
        self.rubbers_played += own + opponent;
    }

    /// The six raw fields two rows must share to be displayed with the same rank.
    pub fn tie_break_fields(&self) -> [u64; 6] {
        [
            self.games_won,
            self.games_lost,
            self.rubbers_won,
            self.rubbers_lost,
            self.towers_won,
            self.towers_lost,
        ]
    }
}
