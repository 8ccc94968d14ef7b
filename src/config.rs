use anyhow::Result;
use env_logger::Builder;
use log::LevelFilter;
use rocket::figment::Figment;
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;

const DEFAULT_PORT: u16 = 5000;

pub fn init_logger() {
    Builder::new().filter_level(LevelFilter::Info).init();
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

/// Reads the Data API key, with setup instructions when it is missing.
pub fn youtube_api_key() -> Result<String> {
    env::var("YOUTUBE_API_KEY").map_err(|_| {
        anyhow::anyhow!(
            "YOUTUBE_API_KEY environment variable is not set.\n\
             To set the API key you can either:\n\
             1. Export the environment variable:\n\
             \x20  export YOUTUBE_API_KEY='your_api_key'\n\
             2. Or create a .env file in the project directory containing:\n\
             \x20  YOUTUBE_API_KEY=your_api_key"
        )
    })
}

/// Rocket figment listening on all interfaces, port taken from `PORT`.
pub fn server_figment() -> Figment {
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    rocket::Config::figment()
        .merge(("address", "0.0.0.0"))
        .merge(("port", port))
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&[
            "Authorization",
            "Accept",
            "Content-Type",
        ]))
        .allow_credentials(false)
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
