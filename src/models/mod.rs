//! Data structures for the tournament dashboard: players, stats, matches, overview.

pub mod datetime;
mod game;
mod player;
mod tournament;

pub use game::{GameMatch, MatchId, MatchStatus, MatchType, Round, Team};
pub use player::{
    Player, PlayerId, PlayerStat, StandingsRow, StatIssue, POINTS_PER_DRAW, POINTS_PER_WIN,
};
pub use tournament::{
    round_number, BestDefense, CleanSheets, CurrentStreak, MatchSummary, Overview,
    OverviewStats, Progress, StandingsResponse, TopScorer,
};
