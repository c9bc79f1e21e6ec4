//! Rank assignment over an already-sorted standings table.

use crate::logic::profile::RankStyle;
use crate::models::PlayerStats;

/// Displayed rank for each row of a sorted table, aligned with the input.
///
/// Position counts up by one every row. A row whose six raw tie-break fields equal the
/// row directly above it shows that row's rank instead of its own position, so ties
/// chain through runs of identical rows (1, 2, 2, 4).
pub fn assign_ranks<'a, I>(ordered: I) -> Vec<u32>
where
    I: IntoIterator<Item = &'a PlayerStats>,
{
    let mut ranks = Vec::new();
    let mut previous: Option<([u64; 6], u32)> = None;
    for (position, stats) in (1u32..).zip(ordered) {
        let fields = stats.tie_break_fields();
        let rank = match previous {
            Some((prev_fields, prev_rank)) if prev_fields == fields => prev_rank,
            _ => position,
        };
        ranks.push(rank);
        previous = Some((fields, rank));
    }
    ranks
}

/// Plain positions 1..=len, no tie sharing.
pub fn sequential_ranks(len: usize) -> Vec<u32> {
    (1u32..).take(len).collect()
}

/// Ranks for a sorted table in the given style.
pub fn ranks_for<'a, I>(ordered: I, style: RankStyle) -> Vec<u32>
where
    I: IntoIterator<Item = &'a PlayerStats>,
{
    match style {
        RankStyle::Shared => assign_ranks(ordered),
        RankStyle::Sequential => sequential_ranks(ordered.into_iter().count()),
    }
}
