//! Tournament-wide payloads: the upstream standings body and the overview summary.

use crate::models::player::PlayerStat;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Body of `GET /standings`: a `tournament` table plus one table per round
/// (`round1`, `round2`, ...). Other top-level keys are ignored.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStandings")]
pub struct StandingsResponse {
    #[serde(default)]
    pub tournament: Vec<PlayerStat>,
    #[serde(flatten)]
    pub rounds: BTreeMap<String, Vec<PlayerStat>>,
}

/// Wire form before the round tables are picked out.
#[derive(Deserialize)]
struct RawStandings {
    #[serde(default)]
    tournament: Vec<PlayerStat>,
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

impl TryFrom<RawStandings> for StandingsResponse {
    type Error = String;

    fn try_from(raw: RawStandings) -> Result<Self, Self::Error> {
        let mut rounds = BTreeMap::new();
        for (key, value) in raw.rest {
            if !key.starts_with("round") {
                log::debug!("Ignoring standings key {}", key);
                continue;
            }
            let table = serde_json::from_value(value)
                .map_err(|e| format!("invalid standings table {}: {}", key, e))?;
            rounds.insert(key, table);
        }
        Ok(Self {
            tournament: raw.tournament,
            rounds,
        })
    }
}

impl StandingsResponse {
    /// Round tables in play order: `roundN` keys by N, then any other keys alphabetically.
    pub fn ordered_rounds(&self) -> Vec<(&str, &[PlayerStat])> {
        let mut rounds: Vec<(&str, &[PlayerStat])> = self
            .rounds
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
            .collect();
        rounds.sort_by_key(|(key, _)| (round_number(key).unwrap_or(u32::MAX), *key));
        rounds
    }
}

/// `round12` -> 12.
pub fn round_number(key: &str) -> Option<u32> {
    key.strip_prefix("round")?.parse().ok()
}

/// Body of `GET /overview`. Every section is optional; the dashboard hides missing ones.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    #[serde(default)]
    pub stats: Option<OverviewStats>,
    #[serde(default)]
    pub top_scorer: Option<TopScorer>,
    #[serde(default)]
    pub best_defense: Option<BestDefense>,
    #[serde(default)]
    pub clean_sheets: Option<CleanSheets>,
    #[serde(default)]
    pub current_streak: Option<CurrentStreak>,
    #[serde(default)]
    pub latest_match: Option<MatchSummary>,
    #[serde(default)]
    pub highest_scoring: Option<MatchSummary>,
    #[serde(default)]
    pub progress: Option<Progress>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_matches: u32,
    pub total_goals: u32,
    pub average_goals: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopScorer {
    pub name: String,
    pub goals: u32,
    pub matches: u32,
    pub average: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestDefense {
    pub player: String,
    pub goals_against: u32,
    pub matches: u32,
    pub average: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleanSheets {
    pub player: String,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentStreak {
    pub player: String,
    pub wins: u32,
}

/// A single match as shown on the overview cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    #[serde(default)]
    pub match_type: Option<String>,
    pub date: String,
    pub team1: String,
    pub team2: String,
    pub score1: u32,
    pub score2: u32,
    #[serde(default)]
    pub total_goals: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub current_phase: String,
    pub phase_percentage: u32,
    pub phase_total_matches: u32,
    pub matches_played: u32,
}
