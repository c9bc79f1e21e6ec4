//! Standings: aggregate, sort by profile, rank, and attach roster names.

use crate::logic::aggregate::aggregate;
use crate::logic::profile::{compare, ComparatorProfile};
use crate::logic::ranking::ranks_for;
use crate::models::{Division, MatchLog, PlayerId, PlayerStats, Roster, StandingsError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A ranked player before display names are attached.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RankedStats {
    pub rank: u32,
    pub player_id: PlayerId,
    pub stats: PlayerStats,
}

/// One row of a standings table, in final display order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub rank: u32,
    pub player_id: PlayerId,
    pub display_name: String,
    pub tag: String,
    pub is_active: bool,
    pub stats: PlayerStats,
}

/// Compute the standings table for one division under the given profile.
pub fn compute_standings(
    roster: &Roster,
    games: &MatchLog,
    division: Division,
    profile: &ComparatorProfile,
) -> Result<Vec<StandingRow>, StandingsError> {
    let stats = aggregate(roster, games, division)?;
    let ranked = rank_stats(stats, profile);
    resolve_rows(roster, ranked)
}

/// Sort stats by the profile and number them.
///
/// Input order is ascending player id; the sort is stable so fully tied players keep it.
pub fn rank_stats(stats: BTreeMap<PlayerId, PlayerStats>, profile: &ComparatorProfile) -> Vec<RankedStats> {
    let mut ordered: Vec<(PlayerId, PlayerStats)> = stats.into_iter().collect();
    ordered.sort_by(|(_, a), (_, b)| compare(a, b, profile));

    let ranks = ranks_for(ordered.iter().map(|(_, s)| s), profile.rank_style);
    ordered
        .into_iter()
        .zip(ranks)
        .map(|((player_id, stats), rank)| RankedStats { rank, player_id, stats })
        .collect()
}

/// Attach username, tag and active flag from the roster to each ranked player.
pub fn resolve_rows(roster: &Roster, ranked: Vec<RankedStats>) -> Result<Vec<StandingRow>, StandingsError> {
    ranked
        .into_iter()
        .map(|r| {
            let player = roster
                .get(&r.player_id)
                .ok_or_else(|| StandingsError::UnknownPlayer(r.player_id.clone()))?;
            Ok(StandingRow {
                rank: r.rank,
                display_name: player.username.clone(),
                tag: player.tag.clone(),
                is_active: player.is_active,
                player_id: r.player_id,
                stats: r.stats,
            })
        })
        .collect()
}
