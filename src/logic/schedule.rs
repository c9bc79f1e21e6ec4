//! Schedule views over the match log: upcoming, past and unplayed matches.

use crate::models::{Division, GameMatch, League, MatchId, PlayerId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Which matches a schedule view shows, relative to today.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFilter {
    #[default]
    All,
    /// Scheduled today or later.
    Upcoming,
    /// Scheduled today or earlier.
    Past,
    /// Scheduled today or earlier, still without a full result.
    Unplayed,
}

/// Parameters of a schedule view.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduleQuery {
    #[serde(default)]
    pub filter: MatchFilter,
    /// Only matches whose player 1 is in this division.
    #[serde(default)]
    pub division: Option<Division>,
    /// Case-insensitive substring of either player's username.
    #[serde(default)]
    pub search: Option<String>,
    /// Drop matches involving an inactive (or unknown) player.
    #[serde(default)]
    pub hide_inactive: bool,
}

/// A match as listed in a schedule view.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMatch {
    pub match_id: MatchId,
    pub datetime: DateTime<Utc>,
    pub player1: PlayerId,
    pub player2: PlayerId,
    /// None when the player is not in the roster.
    pub player1_name: Option<String>,
    pub player2_name: Option<String>,
    pub division: Option<Division>,
    pub score: Option<String>,
    pub towers_taken_down: Option<String>,
    pub played: bool,
}

/// List the matches selected by `query`, ordered by date then match id.
pub fn schedule(league: &League, query: &ScheduleQuery, today: NaiveDate) -> Vec<ScheduledMatch> {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut listed: Vec<ScheduledMatch> = league
        .games
        .iter()
        .filter(|(_, game)| passes_filter(game, query.filter, today))
        .filter_map(|(id, game)| {
            let p1 = league.roster.get(&game.player1);
            let p2 = league.roster.get(&game.player2);
            let division = p1.map(|p| p.division);
            if query.division.is_some() && division != query.division {
                return None;
            }
            if query.hide_inactive && !(p1.is_some_and(|p| p.is_active) && p2.is_some_and(|p| p.is_active)) {
                return None;
            }
            let player1_name = p1.map(|p| p.username.clone());
            let player2_name = p2.map(|p| p.username.clone());
            if let Some(needle) = &needle {
                let hit = [&player1_name, &player2_name]
                    .into_iter()
                    .flatten()
                    .any(|name| name.to_lowercase().contains(needle.as_str()));
                if !hit {
                    return None;
                }
            }
            Some(ScheduledMatch {
                match_id: id.clone(),
                datetime: game.datetime,
                player1: game.player1.clone(),
                player2: game.player2.clone(),
                player1_name,
                player2_name,
                division,
                score: game.score.clone(),
                towers_taken_down: game.towers_taken_down.clone(),
                played: game.is_played(),
            })
        })
        .collect();

    listed.sort_by(|a, b| (a.datetime, &a.match_id).cmp(&(b.datetime, &b.match_id)));
    listed
}

fn passes_filter(game: &GameMatch, filter: MatchFilter, today: NaiveDate) -> bool {
    let day = game.datetime.date_naive();
    match filter {
        MatchFilter::All => true,
        MatchFilter::Upcoming => day >= today,
        MatchFilter::Past => day <= today,
        MatchFilter::Unplayed => day <= today && !game.is_played(),
    }
}
