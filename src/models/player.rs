//! Player, PlayerStat and StandingsRow data structures.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Unique identifier for a player (assigned by the upstream API).
pub type PlayerId = i64;

/// Points awarded for a win. Not the usual 3/1/0 scheme.
pub const POINTS_PER_WIN: u32 = 6;
/// Points awarded for a draw.
pub const POINTS_PER_DRAW: u32 = 2;

/// A registered player, as listed by `GET /players`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub player_name: String,
    #[serde(default, with = "crate::models::datetime::option")]
    pub created_at: Option<NaiveDateTime>,
}

/// Per-player aggregate match statistics for one scope (a round or the whole tournament).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub player_id: PlayerId,
    pub player_name: String,
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_scored: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

/// One inconsistency found in a `PlayerStat` record.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatIssue {
    /// `matches_played != wins + draws + losses`
    MatchCount { expected: u64, actual: u64 },
    /// `goal_difference != goals_scored - goals_against`
    GoalDifference { expected: i64, actual: i64 },
    /// `points != wins * 6 + draws * 2`
    Points { expected: u64, actual: u64 },
}

impl std::fmt::Display for StatIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatIssue::MatchCount { expected, actual } => {
                write!(f, "matches_played is {} but results add up to {}", actual, expected)
            }
            StatIssue::GoalDifference { expected, actual } => {
                write!(f, "goal_difference is {} but goals give {}", actual, expected)
            }
            StatIssue::Points { expected, actual } => {
                write!(f, "points is {} but results give {}", actual, expected)
            }
        }
    }
}

impl PlayerStat {
    /// Zeroed stats for a player who has not played yet.
    pub fn new(player_id: PlayerId, player_name: impl Into<String>) -> Self {
        Self {
            player_id,
            player_name: player_name.into(),
            ..Self::default()
        }
    }

    /// Add another record's numeric fields into this one. The name is left untouched.
    /// Sums saturate, so corrupt upstream counts cannot overflow.
    pub fn absorb(&mut self, other: &PlayerStat) {
        self.matches_played = self.matches_played.saturating_add(other.matches_played);
        self.points = self.points.saturating_add(other.points);
        self.wins = self.wins.saturating_add(other.wins);
        self.draws = self.draws.saturating_add(other.draws);
        self.losses = self.losses.saturating_add(other.losses);
        self.goals_scored = self.goals_scored.saturating_add(other.goals_scored);
        self.goals_against = self.goals_against.saturating_add(other.goals_against);
        self.goal_difference = self.goal_difference.saturating_add(other.goal_difference);
    }

    /// Check the record's internal invariants. An empty list means the record is consistent.
    /// Expected values are computed in `u64`, which cannot overflow for any `u32` input.
    pub fn check(&self) -> Vec<StatIssue> {
        let mut issues = Vec::new();

        let results = u64::from(self.wins) + u64::from(self.draws) + u64::from(self.losses);
        if results != u64::from(self.matches_played) {
            issues.push(StatIssue::MatchCount {
                expected: results,
                actual: u64::from(self.matches_played),
            });
        }

        let diff = i64::from(self.goals_scored) - i64::from(self.goals_against);
        if diff != self.goal_difference {
            issues.push(StatIssue::GoalDifference {
                expected: diff,
                actual: self.goal_difference,
            });
        }

        let points = u64::from(self.wins) * u64::from(POINTS_PER_WIN)
            + u64::from(self.draws) * u64::from(POINTS_PER_DRAW);
        if points != u64::from(self.points) {
            issues.push(StatIssue::Points {
                expected: points,
                actual: u64::from(self.points),
            });
        }

        issues
    }
}

/// A `PlayerStat` with its 1-based position in a ranked table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub rank: usize,
    #[serde(flatten)]
    pub stat: PlayerStat,
}
