#[macro_use]
extern crate rocket;

use log::info;
use yt_comment_crawler::services::youtube::YouTubeClient;
use yt_comment_crawler::{build_rocket, config, AppState};

#[launch]
fn rocket() -> _ {
    config::load_environment();
    config::init_logger();

    let api_key = match config::youtube_api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let state = AppState {
        youtube: YouTubeClient::new(api_key),
    };

    info!("Starting YouTube Comment Crawler API...");
    build_rocket(state).expect("Failed to create Rocket instance")
}
