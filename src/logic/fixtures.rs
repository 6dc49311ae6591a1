//! Fixtures and results: split the match list and label the teams.

use crate::models::{
    datetime, GameMatch, MatchId, MatchStatus, Player, PlayerId, PlayerStat, Team,
};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;

/// Player id -> display name.
pub type NameLookup<'a> = HashMap<PlayerId, &'a str>;

/// Names from the player list, falling back to names found in stat records.
pub fn name_lookup<'a>(players: &'a [Player], stats: &'a [PlayerStat]) -> NameLookup<'a> {
    let mut names: NameLookup<'a> = stats
        .iter()
        .map(|s| (s.player_id, s.player_name.as_str()))
        .collect();
    names.extend(players.iter().map(|p| (p.player_id, p.player_name.as_str())));
    names
}

fn denormalized_name(m: &GameMatch, team: Team, slot: usize) -> Option<&str> {
    let name = match (team, slot) {
        (Team::One, 0) => &m.team1_player1_name,
        (Team::One, _) => &m.team1_player2_name,
        (Team::Two, 0) => &m.team2_player1_name,
        (Team::Two, _) => &m.team2_player2_name,
    };
    name.as_deref().filter(|n| !n.trim().is_empty())
}

/// "Alex" for 1v1, "Alex & Sam" for 2v2.
pub fn team_label(m: &GameMatch, team: Team, names: &NameLookup<'_>) -> String {
    m.team(team)
        .into_iter()
        .enumerate()
        .map(|(slot, id)| match denormalized_name(m, team, slot) {
            Some(n) => n.to_string(),
            None => names
                .get(&id)
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("Player {id}")),
        })
        .collect::<Vec<_>>()
        .join(" & ")
}

/// One line of the fixtures or results table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FixtureRow {
    pub id: MatchId,
    #[serde(with = "crate::models::datetime")]
    pub match_date: NaiveDateTime,
    pub display_date: String,
    pub round: String,
    pub match_type: &'static str,
    pub team1: String,
    pub team2: String,
    /// "3 - 1" once a result is in.
    pub score: Option<String>,
}

impl FixtureRow {
    pub fn from_match(m: &GameMatch, names: &NameLookup<'_>) -> Self {
        Self {
            id: m.id,
            match_date: m.match_date,
            display_date: datetime::display(&m.match_date),
            round: m.round.clone(),
            match_type: m.match_type.label(),
            team1: team_label(m, Team::One, names),
            team2: team_label(m, Team::Two, names),
            score: m.score().map(|(a, b)| format!("{a} - {b}")),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Fixtures {
    /// Scheduled, soonest first.
    pub upcoming: Vec<FixtureRow>,
    /// Completed, most recent first.
    pub results: Vec<FixtureRow>,
}

pub fn split_fixtures(matches: &[GameMatch], names: &NameLookup<'_>) -> Fixtures {
    let mut upcoming: Vec<&GameMatch> = matches
        .iter()
        .filter(|m| m.status == MatchStatus::Scheduled)
        .collect();
    upcoming.sort_by_key(|m| m.match_date);

    let mut results: Vec<&GameMatch> = matches
        .iter()
        .filter(|m| m.status == MatchStatus::Completed)
        .collect();
    results.sort_by(|a, b| b.match_date.cmp(&a.match_date));

    Fixtures {
        upcoming: upcoming
            .into_iter()
            .map(|m| FixtureRow::from_match(m, names))
            .collect(),
        results: results
            .into_iter()
            .map(|m| FixtureRow::from_match(m, names))
            .collect(),
    }
}
