//! REST routes for the dashboard. Read endpoints compose upstream data into views;
//! admin endpoints check the form and forward it upstream.

use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    HttpResponse,
};
use serde::{Deserialize, Serialize};

use crate::client::TournamentApi;
use crate::error::{DashboardError, Result};
use crate::logic::{
    build_overview, merge_rounds, name_lookup, split_fixtures, standings_csv,
    tournament_standings, MatchForm, PlayerForm,
};
use crate::models::{MatchId, PlayerId};

type ApiState = Data<TournamentApi>;

#[derive(Serialize)]
struct HealthResponse<'a> {
    ok: bool,
    service: &'static str,
    upstream: &'a str,
}

/// Path segment: player id (e.g. /api/players/{player_id})
#[derive(Deserialize)]
struct PlayerPath {
    player_id: PlayerId,
}

/// Path segment: match id (e.g. /api/matches/{match_id})
#[derive(Deserialize)]
struct MatchPath {
    match_id: MatchId,
}

/// Path segment: standings scope, `tournament` or a round key like `round1`.
#[derive(Deserialize)]
struct ScopePath {
    scope: String,
}

#[get("/api/health")]
async fn api_health(api: ApiState) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-dashboard",
        upstream: api.base_url(),
    })
}

/// Tournament table (merged over all rounds) plus each round's own table.
#[get("/api/standings")]
async fn api_standings(api: ApiState) -> Result<HttpResponse> {
    let response = api.standings().await?;
    Ok(HttpResponse::Ok().json(tournament_standings(&response)))
}

/// One standings table as CSV.
#[get("/api/standings/{scope}.csv")]
async fn api_standings_csv(api: ApiState, path: Path<ScopePath>) -> Result<HttpResponse> {
    let response = api.standings().await?;
    let view = tournament_standings(&response);
    let rows = view
        .table(&path.scope)
        .ok_or_else(|| DashboardError::NotFound(format!("No standings for {}", path.scope)))?;
    let csv = standings_csv(rows)?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}-standings.csv\"", path.scope),
        ))
        .body(csv))
}

/// Upcoming fixtures and past results.
#[get("/api/fixtures")]
async fn api_fixtures(api: ApiState) -> Result<HttpResponse> {
    let (matches, players) = tokio::try_join!(api.matches(), api.players())?;
    let names = name_lookup(&players, &[]);
    Ok(HttpResponse::Ok().json(split_fixtures(&matches, &names)))
}

/// Upstream overview; rebuilt from matches and standings when the upstream can't serve it.
#[get("/api/overview")]
async fn api_overview(api: ApiState) -> Result<HttpResponse> {
    match api.overview().await {
        Ok(overview) => Ok(HttpResponse::Ok().json(overview)),
        Err(e) => {
            log::warn!("Upstream overview unavailable ({}), rebuilding locally", e);
            let (matches, players, standings) =
                tokio::try_join!(api.matches(), api.players(), api.standings())?;
            let merged = merge_rounds(standings.ordered_rounds());
            let names = name_lookup(&players, &merged);
            Ok(HttpResponse::Ok().json(build_overview(&matches, &merged, &names)))
        }
    }
}

#[get("/api/players")]
async fn api_list_players(api: ApiState) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(api.players().await?))
}

#[post("/api/players")]
async fn api_create_player(api: ApiState, body: Json<PlayerForm>) -> Result<HttpResponse> {
    let form = body.validate()?;
    let player = api.create_player(&form).await?;
    log::info!("Created player {} ({})", player.player_id, player.player_name);
    Ok(HttpResponse::Ok().json(player))
}

#[put("/api/players/{player_id}")]
async fn api_update_player(
    api: ApiState,
    path: Path<PlayerPath>,
    body: Json<PlayerForm>,
) -> Result<HttpResponse> {
    let form = body.validate()?;
    let player = api.update_player(path.player_id, &form).await?;
    log::info!("Renamed player {} to {}", player.player_id, player.player_name);
    Ok(HttpResponse::Ok().json(player))
}

#[delete("/api/players/{player_id}")]
async fn api_delete_player(api: ApiState, path: Path<PlayerPath>) -> Result<HttpResponse> {
    let echoed = api.delete_player(path.player_id).await?;
    log::info!("Deleted player {}", path.player_id);
    Ok(HttpResponse::Ok().json(echoed))
}

#[get("/api/matches")]
async fn api_list_matches(api: ApiState) -> Result<HttpResponse> {
    let mut matches = api.matches().await?;
    matches.sort_by_key(|m| m.match_date);
    Ok(HttpResponse::Ok().json(matches))
}

#[post("/api/matches")]
async fn api_create_match(api: ApiState, body: Json<MatchForm>) -> Result<HttpResponse> {
    let submission = body.into_inner().into_submission()?;
    let created = api.create_match(&submission).await?;
    log::info!("Created match {} ({})", created.id, created.round);
    Ok(HttpResponse::Ok().json(created))
}

#[put("/api/matches/{match_id}")]
async fn api_update_match(
    api: ApiState,
    path: Path<MatchPath>,
    body: Json<MatchForm>,
) -> Result<HttpResponse> {
    let submission = body.into_inner().into_submission()?;
    let updated = api.update_match(path.match_id, &submission).await?;
    log::info!("Updated match {} ({:?})", updated.id, updated.status);
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/api/matches/{match_id}")]
async fn api_delete_match(api: ApiState, path: Path<MatchPath>) -> Result<HttpResponse> {
    let echoed = api.delete_match(path.match_id).await?;
    log::info!("Deleted match {}", path.match_id);
    Ok(HttpResponse::Ok().json(echoed))
}

/// Register every route. The app must carry a `Data<TournamentApi>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_standings)
        .service(api_standings_csv)
        .service(api_fixtures)
        .service(api_overview)
        .service(api_list_players)
        .service(api_create_player)
        .service(api_update_player)
        .service(api_delete_player)
        .service(api_list_matches)
        .service(api_create_match)
        .service(api_update_match)
        .service(api_delete_match);
}
