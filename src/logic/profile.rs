//! Comparator profiles: which stats order a standings table, and in what priority.
//!
//! Profiles are plain data. The two division-2 tables disagree on key order; both are
//! kept as named profiles and the caller picks one.

use crate::models::{Division, PlayerStats, StandingsError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A statistic a profile can sort on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatKey {
    GamesWon,
    GamesNet,
    RubbersWon,
    RubbersNet,
    TowersWon,
    TowersNet,
}

impl StatKey {
    pub fn value(self, s: &PlayerStats) -> i64 {
        match self {
            StatKey::GamesWon => s.games_won as i64,
            StatKey::GamesNet => s.games_net,
            StatKey::RubbersWon => s.rubbers_won as i64,
            StatKey::RubbersNet => s.rubbers_net,
            StatKey::TowersWon => s.towers_won as i64,
            StatKey::TowersNet => s.towers_net,
        }
    }
}

/// Sort direction for one key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    /// Higher value ranks better.
    Descending,
    /// Lower value ranks better. None of the league tables sort this way today.
    Ascending,
}

/// How tied rows are numbered in a table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RankStyle {
    /// Plain position, 1..=n.
    Sequential,
    /// Adjacent rows with identical raw stats share a rank.
    Shared,
}

/// An ordered list of sort keys plus the rank numbering its table uses.
#[derive(Debug, Eq, PartialEq)]
pub struct ComparatorProfile {
    pub name: ProfileName,
    pub keys: &'static [(StatKey, Direction)],
    pub rank_style: RankStyle,
}

use self::Direction::Descending as Desc;

/// Division-1 summary table.
pub static NET_ONLY: ComparatorProfile = ComparatorProfile {
    name: ProfileName::NetOnly,
    keys: &[(StatKey::TowersNet, Desc), (StatKey::TowersWon, Desc)],
    rank_style: RankStyle::Sequential,
};

/// Division-2 detailed table, nets first.
pub static FULL_NET: ComparatorProfile = ComparatorProfile {
    name: ProfileName::FullNet,
    keys: &[
        (StatKey::GamesNet, Desc),
        (StatKey::GamesWon, Desc),
        (StatKey::RubbersNet, Desc),
        (StatKey::RubbersWon, Desc),
        (StatKey::TowersNet, Desc),
        (StatKey::TowersWon, Desc),
    ],
    rank_style: RankStyle::Shared,
};

/// Division-2 detailed table, wins first.
pub static WINS_FIRST: ComparatorProfile = ComparatorProfile {
    name: ProfileName::WinsFirst,
    keys: &[
        (StatKey::GamesWon, Desc),
        (StatKey::RubbersWon, Desc),
        (StatKey::TowersWon, Desc),
        (StatKey::RubbersNet, Desc),
        (StatKey::GamesNet, Desc),
        (StatKey::TowersNet, Desc),
    ],
    rank_style: RankStyle::Shared,
};

/// Name of a comparator profile, as used in requests (`net-only`, `full-net`, `wins-first`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileName {
    NetOnly,
    FullNet,
    WinsFirst,
}

impl ProfileName {
    pub const ALL: [ProfileName; 3] = [ProfileName::NetOnly, ProfileName::FullNet, ProfileName::WinsFirst];

    pub fn profile(self) -> &'static ComparatorProfile {
        match self {
            ProfileName::NetOnly => &NET_ONLY,
            ProfileName::FullNet => &FULL_NET,
            ProfileName::WinsFirst => &WINS_FIRST,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileName::NetOnly => "net-only",
            ProfileName::FullNet => "full-net",
            ProfileName::WinsFirst => "wins-first",
        }
    }

    /// Profile a division's table uses when the caller doesn't pick one.
    pub fn default_for(division: Division) -> Self {
        match division {
            Division::One => ProfileName::NetOnly,
            Division::Two => ProfileName::FullNet,
        }
    }
}

impl std::str::FromStr for ProfileName {
    type Err = StandingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileName::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| StandingsError::UnknownProfile(s.to_string()))
    }
}

impl std::fmt::Display for ProfileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order two stats records: `Less` means `a` ranks above `b`.
///
/// The first key on which they differ decides; equal on every key gives `Equal`.
pub fn compare(a: &PlayerStats, b: &PlayerStats, profile: &ComparatorProfile) -> Ordering {
    profile
        .keys
        .iter()
        .map(|&(key, direction)| {
            let ord = key.value(a).cmp(&key.value(b));
            match direction {
                Direction::Descending => ord.reverse(),
                Direction::Ascending => ord,
            }
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}
