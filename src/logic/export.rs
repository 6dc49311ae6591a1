//! CSV export of a standings table, same columns as the dashboard.

use crate::models::StandingsRow;

pub const CSV_HEADER: [&str; 10] = ["Pos", "Player", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"];

pub fn standings_csv(rows: &[StandingsRow]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        let s = &row.stat;
        writer.write_record([
            row.rank.to_string(),
            s.player_name.clone(),
            s.matches_played.to_string(),
            s.wins.to_string(),
            s.draws.to_string(),
            s.losses.to_string(),
            s.goals_scored.to_string(),
            s.goals_against.to_string(),
            s.goal_difference.to_string(),
            s.points.to_string(),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}
