//! Match (game), Team, Round and MatchType for 1v1 / 2v2 games.

use crate::models::player::PlayerId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Unique identifier for a match (assigned by the upstream API).
pub type MatchId = i64;

/// One side of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

/// Whether a match still has to be played.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Completed,
}

/// Players per side.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum MatchType {
    #[serde(rename = "1v1")]
    OneVOne,
    #[serde(rename = "2v2")]
    TwoVTwo,
}

impl MatchType {
    pub fn label(self) -> &'static str {
        match self {
            MatchType::OneVOne => "1v1",
            MatchType::TwoVTwo => "2v2",
        }
    }
}

/// Phase of the tournament. Declaration order is play order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Round {
    #[serde(rename = "Round 1")]
    RoundOne,
    #[serde(rename = "Round 2")]
    RoundTwo,
    #[serde(rename = "Knockouts")]
    Knockouts,
}

impl Round {
    pub const ALL: [Round; 3] = [Round::RoundOne, Round::RoundTwo, Round::Knockouts];

    /// Label used on the wire and in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Round::RoundOne => "Round 1",
            Round::RoundTwo => "Round 2",
            Round::Knockouts => "Knockouts",
        }
    }

    /// Round 2 is played in pairs; everything else is 1v1.
    pub fn default_match_type(self) -> MatchType {
        match self {
            Round::RoundTwo => MatchType::TwoVTwo,
            Round::RoundOne | Round::Knockouts => MatchType::OneVOne,
        }
    }

    pub fn from_label(label: &str) -> Option<Round> {
        Round::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// A single match as returned by `GET /matches`.
///
/// `round` is kept as the raw label so an unknown round from the upstream does not
/// break the whole listing; use [`GameMatch::round_kind`] for the typed value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub round: String,
    pub match_type: MatchType,
    pub team1_player1_id: PlayerId,
    #[serde(default)]
    pub team1_player2_id: Option<PlayerId>,
    pub team2_player1_id: PlayerId,
    #[serde(default)]
    pub team2_player2_id: Option<PlayerId>,
    #[serde(default)]
    pub team1_goals: Option<u32>,
    #[serde(default)]
    pub team2_goals: Option<u32>,
    #[serde(with = "crate::models::datetime")]
    pub match_date: NaiveDateTime,
    #[serde(default)]
    pub status: MatchStatus,
    /// Denormalized names, when the upstream joins them in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team1_player1_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team1_player2_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team2_player1_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team2_player2_name: Option<String>,
}

impl GameMatch {
    pub fn round_kind(&self) -> Option<Round> {
        Round::from_label(&self.round)
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Player ids on one side (1 for 1v1, 2 for 2v2).
    pub fn team(&self, team: Team) -> Vec<PlayerId> {
        let (first, second) = match team {
            Team::One => (self.team1_player1_id, self.team1_player2_id),
            Team::Two => (self.team2_player1_id, self.team2_player2_id),
        };
        std::iter::once(first).chain(second).collect()
    }

    /// Which side the player is on, if any.
    pub fn side_of(&self, player_id: PlayerId) -> Option<Team> {
        [Team::One, Team::Two]
            .into_iter()
            .find(|&t| self.team(t).contains(&player_id))
    }

    pub fn goals(&self, team: Team) -> Option<u32> {
        match team {
            Team::One => self.team1_goals,
            Team::Two => self.team2_goals,
        }
    }

    /// Both scores, if the match has a result.
    pub fn score(&self) -> Option<(u32, u32)> {
        Some((self.team1_goals?, self.team2_goals?))
    }

    pub fn total_goals(&self) -> u32 {
        self.score().map(|(a, b)| a.saturating_add(b)).unwrap_or(0)
    }

    /// Winning side; None for draws and unplayed matches.
    pub fn winner(&self) -> Option<Team> {
        let (a, b) = self.score()?;
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Some(Team::One),
            std::cmp::Ordering::Less => Some(Team::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}
