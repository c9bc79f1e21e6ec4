//! League standings web app: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    aggregate, assign_ranks, compare, compute_standings, rank_stats, ranks_for, resolve_rows,
    schedule, sequential_ranks, standings_csv, ComparatorProfile, Direction, MatchFilter,
    ProfileName, RankStyle, RankedStats, ScheduleQuery, ScheduledMatch, StandingRow, StatKey,
    FULL_NET, NET_ONLY, WINS_FIRST,
};
pub use models::{
    Division, GameMatch, League, MatchId, MatchLog, MatchResult, Player, PlayerId, PlayerStats,
    RecordField, Roster, ScorePair, StandingsError,
};
