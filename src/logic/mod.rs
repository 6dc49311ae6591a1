//! Dashboard business logic: standings aggregation, fixtures, highlights, forms, export.

pub mod export;
pub mod fixtures;
pub mod forms;
pub mod highlights;
pub mod standings;

pub use export::standings_csv;
pub use fixtures::{name_lookup, split_fixtures, team_label, FixtureRow, Fixtures, NameLookup};
pub use forms::{MatchForm, MatchSubmission, PlayerForm};
pub use highlights::{
    best_defense, build_overview, clean_sheets, current_streaks, highest_scoring_match,
    latest_match, progress, top_scorer,
};
pub use standings::{
    check_records, compare_standings, merge_rounds, rank_standings, tournament_standings,
    StandingsView, StatWarning,
};
