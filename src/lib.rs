pub mod api;
pub mod config;
pub mod models;
pub mod services;

use crate::services::youtube::YouTubeClient;
use anyhow::Result;
use rocket::{routes, Build, Rocket};

/// Shared state handed to every request handler.
pub struct AppState {
    pub youtube: YouTubeClient,
}

/// Assembles the Rocket instance serving the crawler API under `/api`.
pub fn build_rocket(state: AppState) -> Result<Rocket<Build>> {
    let cors = config::create_cors()?;

    Ok(rocket::custom(config::server_figment())
        .manage(state)
        .mount(
            "/api",
            routes![
                api::health::health_check,
                api::crawl::crawl_comments,
                api::crawl::crawl_by_username
            ],
        )
        .attach(cors))
}
