//! League business logic: aggregation, ordering, ranking, schedule views, export.

mod aggregate;
mod export;
mod profile;
mod ranking;
mod schedule;
mod standings;

pub use aggregate::aggregate;
pub use export::standings_csv;
pub use profile::{
    compare, ComparatorProfile, Direction, ProfileName, RankStyle, StatKey, FULL_NET, NET_ONLY,
    WINS_FIRST,
};
pub use ranking::{assign_ranks, ranks_for, sequential_ranks};
pub use schedule::{schedule, MatchFilter, ScheduleQuery, ScheduledMatch};
pub use standings::{compute_standings, rank_stats, resolve_rows, RankedStats, StandingRow};
