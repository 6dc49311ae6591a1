//! Errors for upstream calls, form validation and configuration, and their HTTP mapping.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::PlayerId;

/// Field-presence failures in admin form submissions.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FormError {
    #[error("Player name is required")]
    MissingPlayerName,
    #[error("Unknown round: {0}")]
    UnknownRound(String),
    #[error("Match date is required")]
    MissingDate,
    #[error("Team {team} player {slot} is required")]
    MissingPlayer { team: u8, slot: u8 },
    #[error("All player positions must be filled for 2v2 matches")]
    IncompleteTeams,
    #[error("Cannot use the same player multiple times (player {0})")]
    DuplicatePlayer(PlayerId),
    #[error("Both scores are required to record a result")]
    PartialScore,
    #[error("A completed match needs a score")]
    MissingScore,
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx from the upstream; `detail` is its error message.
    #[error("{detail}")]
    Upstream { status: u16, detail: String },

    #[error("Invalid upstream response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

impl ResponseError for DashboardError {
    fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::Form(_) => StatusCode::BAD_REQUEST,
            DashboardError::NotFound(_) => StatusCode::NOT_FOUND,
            DashboardError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            DashboardError::Http(_) | DashboardError::Decode { .. } => StatusCode::BAD_GATEWAY,
            DashboardError::Csv(_) | DashboardError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "detail": self.to_string() }))
    }
}
