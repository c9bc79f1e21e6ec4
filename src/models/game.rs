//! Match (game) records and the "a-b" score pairs they carry.

use crate::models::league::StandingsError;
use crate::models::player::PlayerId;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique identifier for a match (the key of the games JSON object).
pub type MatchId = String;

/// Match log: every match by id.
pub type MatchLog = BTreeMap<MatchId, GameMatch>;

/// Which paired-integer field of a match a value came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    Score,
    TowersTakenDown,
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordField::Score => write!(f, "score"),
            RecordField::TowersTakenDown => write!(f, "towersTakenDown"),
        }
    }
}

/// Two non-negative counts, player 1's first.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScorePair {
    pub first: u32,
    pub second: u32,
}

impl ScorePair {
    pub fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    /// The same pair seen from player 2's side.
    pub fn swapped(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

impl std::str::FromStr for ScorePair {
    type Err = ();

    /// Parse `"3-1"`; whitespace around either number is allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s.split_once('-').ok_or(())?;
        let first = a.trim().parse().map_err(|_| ())?;
        let second = b.trim().parse().map_err(|_| ())?;
        Ok(Self { first, second })
    }
}

impl std::fmt::Display for ScorePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// Parsed result of a played match: rubbers and towers, each player 1 first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MatchResult {
    pub rubbers: ScorePair,
    pub towers: ScorePair,
}

/// A single head-to-head match as stored in the match log.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    pub player1: PlayerId,
    pub player2: PlayerId,
    /// ISO-8601; the entry form writes local `2025-11-30T18:00` with no offset, read as UTC.
    #[serde(deserialize_with = "deserialize_datetime")]
    pub datetime: DateTime<Utc>,
    /// Rubbers won by each side, e.g. `"3-1"`. None if not yet played.
    #[serde(default)]
    pub score: Option<String>,
    /// Towers taken down by each side. None if not yet played.
    #[serde(default)]
    pub towers_taken_down: Option<String>,
    /// Screenshot attachment; carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
}

/// RFC 3339 with an offset, or a naive `YYYY-MM-DDTHH:MM[:SS]` taken as UTC.
fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(datetime) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(datetime.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M"))
        .map(|naive| naive.and_utc())
        .map_err(|e| serde::de::Error::custom(format!("invalid datetime {:?}: {}", raw, e)))
}

impl GameMatch {
    pub fn new(player1: impl Into<PlayerId>, player2: impl Into<PlayerId>, datetime: DateTime<Utc>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            datetime,
            score: None,
            towers_taken_down: None,
            image_data: None,
            image_name: None,
        }
    }

    /// Same match with a score and tower tally filled in.
    pub fn with_result(self, score: impl Into<String>, towers: impl Into<String>) -> Self {
        Self {
            score: Some(score.into()),
            towers_taken_down: Some(towers.into()),
            ..self
        }
    }

    /// A match counts as played only when both the score and the tower tally are present.
    pub fn is_played(&self) -> bool {
        present(&self.score).is_some() && present(&self.towers_taken_down).is_some()
    }

    /// Parse the score and tower tally of a played match.
    ///
    /// Returns `Ok(None)` when either field is missing, and `MalformedRecord` when a present
    /// field is not two integers.
    pub fn result(&self, id: &str) -> Result<Option<MatchResult>, StandingsError> {
        let (Some(score), Some(towers)) = (present(&self.score), present(&self.towers_taken_down)) else {
            return Ok(None);
        };
        let rubbers = parse_pair(id, RecordField::Score, score)?;
        let towers = parse_pair(id, RecordField::TowersTakenDown, towers)?;
        Ok(Some(MatchResult { rubbers, towers }))
    }
}

/// Blank strings are stored by the entry form for untouched inputs; treat them as absent.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

fn parse_pair(id: &str, field: RecordField, value: &str) -> Result<ScorePair, StandingsError> {
    value.parse().map_err(|()| StandingsError::MalformedRecord {
        match_id: id.to_string(),
        field,
        value: value.to_string(),
    })
}
