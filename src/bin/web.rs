//! Single binary web server: dashboard JSON API in front of the tournament REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env (or a .env file): HOST, PORT, API_BASE_URL, API_TIMEOUT_SECS.

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use tournament_dashboard::{api, Config, TournamentApi};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let client = TournamentApi::from_config(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    log::info!("Using tournament API at {}", client.base_url());

    let state = Data::new(client);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await
}
