//! Overview highlights: top scorer, best defense, streaks, notable matches, progress.
//!
//! All selections keep the first candidate on ties, in the order the input lists them.

use crate::logic::fixtures::{team_label, NameLookup};
use crate::models::{
    datetime, BestDefense, CleanSheets, CurrentStreak, GameMatch, MatchStatus, MatchSummary,
    Overview, OverviewStats, PlayerId, PlayerStat, Progress, Round, Team, TopScorer,
};
use std::collections::HashMap;

/// First item with the greatest key.
fn first_max_by_key<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Option<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut best: Option<(K, T)> = None;
    for item in items {
        let k = key(&item);
        match &best {
            Some((best_key, _)) if k <= *best_key => {}
            _ => best = Some((k, item)),
        }
    }
    best.map(|(_, item)| item)
}

fn per_match(total: u32, matches: u32) -> f64 {
    if matches == 0 {
        0.0
    } else {
        f64::from(total) / f64::from(matches)
    }
}

/// Player with the most goals scored.
pub fn top_scorer(players: &[PlayerStat]) -> Option<&PlayerStat> {
    first_max_by_key(players, |p| p.goals_scored)
}

/// Player who conceded the fewest goals, among those who have played.
pub fn best_defense(players: &[PlayerStat]) -> Option<&PlayerStat> {
    first_max_by_key(
        players.iter().filter(|p| p.matches_played > 0),
        |p| std::cmp::Reverse(p.goals_against),
    )
}

fn completed(matches: &[GameMatch]) -> impl Iterator<Item = &GameMatch> {
    matches
        .iter()
        .filter(|m| m.status == MatchStatus::Completed && m.score().is_some())
}

/// Most recently played match.
pub fn latest_match(matches: &[GameMatch]) -> Option<&GameMatch> {
    first_max_by_key(completed(matches), |m| m.match_date)
}

/// Played match with the most goals in total.
pub fn highest_scoring_match(matches: &[GameMatch]) -> Option<&GameMatch> {
    first_max_by_key(completed(matches), |m| m.total_goals())
}

/// Per-player tally in first-seen order.
fn tally_order(matches: &[GameMatch]) -> Vec<PlayerId> {
    let mut seen = Vec::new();
    for m in matches {
        for id in m.team(Team::One).into_iter().chain(m.team(Team::Two)) {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
    }
    seen
}

/// Clean sheets per player: played matches where the other side did not score.
pub fn clean_sheets(matches: &[GameMatch]) -> Vec<(PlayerId, u32)> {
    let mut counts: HashMap<PlayerId, u32> = HashMap::new();
    for m in completed(matches) {
        for team in [Team::One, Team::Two] {
            if m.goals(team.opponent()) == Some(0) {
                for id in m.team(team) {
                    *counts.entry(id).or_default() += 1;
                }
            }
        }
    }
    tally_order(matches)
        .into_iter()
        .map(|id| (id, counts.get(&id).copied().unwrap_or(0)))
        .collect()
}

/// Current run of consecutive wins per player, over played matches in date order.
pub fn current_streaks(matches: &[GameMatch]) -> Vec<(PlayerId, u32)> {
    let mut played: Vec<&GameMatch> = completed(matches).collect();
    played.sort_by_key(|m| m.match_date);

    let mut streaks: HashMap<PlayerId, u32> = HashMap::new();
    for m in played {
        let winner = m.winner();
        for team in [Team::One, Team::Two] {
            for id in m.team(team) {
                let streak = streaks.entry(id).or_default();
                if winner == Some(team) {
                    *streak += 1;
                } else {
                    *streak = 0;
                }
            }
        }
    }
    tally_order(matches)
        .into_iter()
        .map(|id| (id, streaks.get(&id).copied().unwrap_or(0)))
        .collect()
}

fn leader(tally: Vec<(PlayerId, u32)>) -> Option<(PlayerId, u32)> {
    first_max_by_key(tally, |(_, n)| *n).filter(|(_, n)| *n > 0)
}

fn same_round(m: &GameMatch, label: &str) -> bool {
    match (m.round_kind(), Round::from_label(label)) {
        (Some(a), Some(b)) => a == b,
        _ => m.round == label,
    }
}

/// Progress through the current phase.
///
/// The current phase is the round of the earliest scheduled match; once nothing is
/// scheduled it is the latest round that has matches.
pub fn progress(matches: &[GameMatch]) -> Option<Progress> {
    let next = matches
        .iter()
        .filter(|m| m.status == MatchStatus::Scheduled)
        .min_by_key(|m| m.match_date);
    let phase = match next {
        Some(m) => m.round.clone(),
        None => matches
            .iter()
            .max_by_key(|m| m.round_kind())
            .map(|m| m.round.clone())?,
    };

    let in_phase: Vec<&GameMatch> = matches.iter().filter(|m| same_round(m, &phase)).collect();
    let total = in_phase.len() as u32;
    let played = in_phase.iter().filter(|m| m.is_completed()).count() as u32;
    let percentage = if total == 0 {
        0
    } else {
        (played * 100 + total / 2) / total
    };

    Some(Progress {
        current_phase: phase,
        phase_percentage: percentage,
        phase_total_matches: total,
        matches_played: played,
    })
}

fn summarize(m: &GameMatch, names: &NameLookup<'_>, with_total: bool) -> MatchSummary {
    let (score1, score2) = m.score().unwrap_or((0, 0));
    MatchSummary {
        match_type: Some(m.match_type.label().to_string()),
        date: datetime::display(&m.match_date),
        team1: team_label(m, Team::One, names),
        team2: team_label(m, Team::Two, names),
        score1,
        score2,
        total_goals: with_total.then(|| m.total_goals()),
    }
}

fn name_of(id: PlayerId, names: &NameLookup<'_>) -> String {
    names
        .get(&id)
        .map(|n| n.to_string())
        .unwrap_or_else(|| format!("Player {id}"))
}

/// Rebuild the overview from matches and merged tournament stats.
pub fn build_overview(
    matches: &[GameMatch],
    standings: &[PlayerStat],
    names: &NameLookup<'_>,
) -> Overview {
    let (total_matches, total_goals) = completed(matches).fold((0u32, 0u32), |(n, g), m| {
        (n + 1, g.saturating_add(m.total_goals()))
    });

    Overview {
        stats: Some(OverviewStats {
            total_matches,
            total_goals,
            average_goals: per_match(total_goals, total_matches),
        }),
        top_scorer: top_scorer(standings).map(|p| TopScorer {
            name: p.player_name.clone(),
            goals: p.goals_scored,
            matches: p.matches_played,
            average: per_match(p.goals_scored, p.matches_played),
        }),
        best_defense: best_defense(standings).map(|p| BestDefense {
            player: p.player_name.clone(),
            goals_against: p.goals_against,
            matches: p.matches_played,
            average: per_match(p.goals_against, p.matches_played),
        }),
        clean_sheets: leader(clean_sheets(matches)).map(|(id, count)| CleanSheets {
            player: name_of(id, names),
            count,
        }),
        current_streak: leader(current_streaks(matches)).map(|(id, wins)| CurrentStreak {
            player: name_of(id, names),
            wins,
        }),
        latest_match: latest_match(matches).map(|m| summarize(m, names, false)),
        highest_scoring: highest_scoring_match(matches).map(|m| summarize(m, names, true)),
        progress: progress(matches),
    }
}
