//! Admin forms: field-presence checks before a player or match is sent upstream.

use crate::error::FormError;
use crate::models::{MatchStatus, MatchType, PlayerId, Round};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Body of a player create/rename.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerForm {
    #[serde(default)]
    pub player_name: String,
}

impl PlayerForm {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
        }
    }

    /// Trimmed copy; the name must not be blank.
    pub fn validate(&self) -> Result<PlayerForm, FormError> {
        let name = self.player_name.trim();
        if name.is_empty() {
            return Err(FormError::MissingPlayerName);
        }
        Ok(PlayerForm::new(name))
    }
}

/// Match form as submitted by the admin panel. Everything but the round may be missing.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct MatchForm {
    pub round: String,
    #[serde(default)]
    pub match_type: Option<MatchType>,
    #[serde(default)]
    pub team1_player1_id: Option<PlayerId>,
    #[serde(default)]
    pub team1_player2_id: Option<PlayerId>,
    #[serde(default)]
    pub team2_player1_id: Option<PlayerId>,
    #[serde(default)]
    pub team2_player2_id: Option<PlayerId>,
    #[serde(default)]
    pub team1_goals: Option<u32>,
    #[serde(default)]
    pub team2_goals: Option<u32>,
    #[serde(default, with = "crate::models::datetime::option")]
    pub match_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: Option<MatchStatus>,
}

/// A checked match, in the shape the upstream `POST/PUT /matches` expects.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchSubmission {
    pub round: Round,
    pub match_type: MatchType,
    pub team1_player1_id: PlayerId,
    pub team1_player2_id: Option<PlayerId>,
    pub team2_player1_id: PlayerId,
    pub team2_player2_id: Option<PlayerId>,
    pub team1_goals: Option<u32>,
    pub team2_goals: Option<u32>,
    #[serde(with = "crate::models::datetime")]
    pub match_date: NaiveDateTime,
    pub status: MatchStatus,
}

impl MatchForm {
    /// Check the form and fill in the derived fields.
    ///
    /// 1. The match type defaults from the round (Round 2 is 2v2, the rest 1v1).
    /// 2. 1v1 drops any second players; 2v2 needs all four.
    /// 3. No player may appear twice.
    /// 4. Scores come in pairs. Without an explicit status a scored match is completed.
    pub fn into_submission(self) -> Result<MatchSubmission, FormError> {
        let round = Round::from_label(&self.round)
            .ok_or_else(|| FormError::UnknownRound(self.round.clone()))?;
        let match_type = self.match_type.unwrap_or_else(|| round.default_match_type());
        let match_date = self.match_date.ok_or(FormError::MissingDate)?;

        let team1_player1_id = self
            .team1_player1_id
            .ok_or(FormError::MissingPlayer { team: 1, slot: 1 })?;
        let team2_player1_id = self
            .team2_player1_id
            .ok_or(FormError::MissingPlayer { team: 2, slot: 1 })?;

        let (team1_player2_id, team2_player2_id) = match match_type {
            MatchType::OneVOne => (None, None),
            MatchType::TwoVTwo => match (self.team1_player2_id, self.team2_player2_id) {
                (Some(a), Some(b)) => (Some(a), Some(b)),
                _ => return Err(FormError::IncompleteTeams),
            },
        };

        let mut seen = HashSet::new();
        let ids = [
            Some(team1_player1_id),
            team1_player2_id,
            Some(team2_player1_id),
            team2_player2_id,
        ];
        for id in ids.into_iter().flatten() {
            if !seen.insert(id) {
                return Err(FormError::DuplicatePlayer(id));
            }
        }

        let scored = match (self.team1_goals, self.team2_goals) {
            (Some(_), Some(_)) => true,
            (None, None) => false,
            _ => return Err(FormError::PartialScore),
        };
        let status = match self.status {
            Some(MatchStatus::Completed) if !scored => return Err(FormError::MissingScore),
            Some(status) => status,
            None if scored => MatchStatus::Completed,
            None => MatchStatus::Scheduled,
        };

        Ok(MatchSubmission {
            round,
            match_type,
            team1_player1_id,
            team1_player2_id,
            team2_player1_id,
            team2_player2_id,
            team1_goals: self.team1_goals,
            team2_goals: self.team2_goals,
            match_date,
            status,
        })
    }
}
