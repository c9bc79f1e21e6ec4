//! Statistics aggregation: fold the match log into per-player stats for one division.

use crate::models::{Division, MatchLog, PlayerId, PlayerStats, Roster, StandingsError};
use std::collections::BTreeMap;

/// Build one `PlayerStats` per roster player in `division` from every played match.
///
/// 1. Start every eligible player at zero.
/// 2. Skip matches missing either the score or the tower tally.
/// 3. Parse both fields; a malformed one aborts the whole aggregation.
/// 4. Update each side whose player is eligible, independently of the other side.
pub fn aggregate(
    roster: &Roster,
    games: &MatchLog,
    division: Division,
) -> Result<BTreeMap<PlayerId, PlayerStats>, StandingsError> {
    let mut stats: BTreeMap<PlayerId, PlayerStats> = roster
        .iter()
        .filter(|(_, p)| p.division == division)
        .map(|(id, _)| (id.clone(), PlayerStats::default()))
        .collect();

    let mut counted = 0usize;
    for (id, game) in games {
        let result = match game.result(id) {
            Ok(Some(result)) => result,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("Aborting {} standings: {}", division, e);
                return Err(e);
            }
        };
        counted += 1;

        let (rubbers, towers) = (result.rubbers, result.towers);
        if let Some(s) = stats.get_mut(&game.player1) {
            s.record_match(rubbers.first, rubbers.second, towers.first, towers.second);
        }
        let (rubbers, towers) = (rubbers.swapped(), towers.swapped());
        if let Some(s) = stats.get_mut(&game.player2) {
            s.record_match(rubbers.first, rubbers.second, towers.first, towers.second);
        }
    }

    log::debug!(
        "{}: {} players, {} of {} matches played",
        division,
        stats.len(),
        counted,
        games.len()
    );
    Ok(stats)
}
