//! Standings aggregation: merge per-round player stats and rank them.

use crate::models::{PlayerId, PlayerStat, StandingsResponse, StandingsRow, StatIssue};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Merge round-scoped stats into one record per player.
///
/// Rounds are visited in the given order. The first time a player is seen their record
/// is copied; later records are summed into it field by field. The name from the first
/// occurrence is kept. Output is in first-seen order.
pub fn merge_rounds<'a, I>(rounds: I) -> Vec<PlayerStat>
where
    I: IntoIterator<Item = (&'a str, &'a [PlayerStat])>,
{
    let mut index: HashMap<PlayerId, usize> = HashMap::new();
    let mut merged: Vec<PlayerStat> = Vec::new();

    for (label, stats) in rounds {
        log::debug!("Merging {} player record(s) from {}", stats.len(), label);
        for stat in stats {
            match index.get(&stat.player_id) {
                Some(&i) => merged[i].absorb(stat),
                None => {
                    index.insert(stat.player_id, merged.len());
                    merged.push(stat.clone());
                }
            }
        }
    }

    merged
}

/// Table order: points desc, goal difference desc, then player id asc.
pub fn compare_standings(a: &PlayerStat, b: &PlayerStat) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| a.player_id.cmp(&b.player_id))
}

/// Sort a copy of `players` into table order and number the rows from 1.
pub fn rank_standings(players: &[PlayerStat]) -> Vec<StandingsRow> {
    let mut sorted = players.to_vec();
    sorted.sort_by(compare_standings);
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, stat)| StandingsRow { rank: i + 1, stat })
        .collect()
}

/// A flagged record: which table it came from and what is wrong with it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StatWarning {
    pub scope: String,
    pub player_id: PlayerId,
    pub player_name: String,
    pub issue: StatIssue,
}

impl std::fmt::Display for StatWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} (#{}): {}",
            self.scope, self.player_name, self.player_id, self.issue
        )
    }
}

/// Check every record of one table. Inconsistent records are reported, not removed.
pub fn check_records(scope: &str, stats: &[PlayerStat]) -> Vec<StatWarning> {
    stats
        .iter()
        .flat_map(|stat| {
            stat.check().into_iter().map(move |issue| StatWarning {
                scope: scope.to_string(),
                player_id: stat.player_id,
                player_name: stat.player_name.clone(),
                issue,
            })
        })
        .collect()
}

/// Everything the standings page shows.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct StandingsView {
    /// Merged across all rounds.
    pub tournament: Vec<StandingsRow>,
    /// Each round's own table, keyed like the upstream (`round1`, ...).
    pub rounds: BTreeMap<String, Vec<StandingsRow>>,
    pub warnings: Vec<StatWarning>,
}

impl StandingsView {
    /// Look up a table by scope name: `tournament` or a round key.
    pub fn table(&self, scope: &str) -> Option<&[StandingsRow]> {
        if scope == "tournament" {
            return Some(&self.tournament);
        }
        self.rounds.get(scope).map(Vec::as_slice)
    }
}

/// Build the standings view from the upstream body.
///
/// The upstream `tournament` table is ignored; it is recomputed from the rounds.
pub fn tournament_standings(response: &StandingsResponse) -> StandingsView {
    let ordered = response.ordered_rounds();

    let warnings: Vec<StatWarning> = ordered
        .iter()
        .flat_map(|(label, stats)| check_records(label, stats))
        .collect();
    for w in &warnings {
        log::warn!("Inconsistent player stats in {}", w);
    }

    let merged = merge_rounds(ordered.iter().copied());
    let rounds = ordered
        .iter()
        .map(|(label, stats)| (label.to_string(), rank_standings(stats)))
        .collect();

    StandingsView {
        tournament: rank_standings(&merged),
        rounds,
        warnings,
    }
}
