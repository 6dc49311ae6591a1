//! Tournament dashboard backend: library with models, standings logic and the REST surface.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use client::TournamentApi;
pub use config::Config;
pub use error::{DashboardError, FormError, Result};
pub use logic::{
    build_overview, merge_rounds, rank_standings, split_fixtures, top_scorer,
    tournament_standings, MatchForm, MatchSubmission, PlayerForm, StandingsView,
};
pub use models::{
    GameMatch, MatchId, MatchStatus, MatchType, Overview, Player, PlayerId, PlayerStat, Round,
    StandingsResponse, StandingsRow, Team,
};
