use crate::models::{CrawlByUsernameRequest, CrawlRequest, CrawlResponse, ErrorResponse};
use crate::services::crawler::crawl_channel_comments;
use crate::services::filter::CommentFilter;
use crate::services::resolver::{resolve_channel_id, ChannelResolution};
use crate::AppState;
use log::error;
use rocket::http::Status;
use rocket::post;
use rocket::serde::json::Json;
use rocket::State;

const DEFAULT_MAX_VIDEOS: usize = 50;
const DEFAULT_MAX_COMMENTS: usize = 100;

fn positive(value: Option<i64>, default: usize, name: &str) -> Result<usize, ErrorResponse> {
    match value {
        None => Ok(default),
        Some(v) if v > 0 => Ok(v as usize),
        Some(_) => Err(ErrorResponse {
            status: Status::BadRequest,
            error: format!("{name} must be a positive integer"),
        }),
    }
}

async fn run_crawl(
    state: &State<AppState>,
    channel_id: &str,
    filter: &CommentFilter,
    max_videos: usize,
    max_comments: usize,
) -> Result<Json<CrawlResponse>, ErrorResponse> {
    match crawl_channel_comments(&state.youtube, channel_id, filter, max_videos, max_comments)
        .await
    {
        Ok(results) => Ok(Json(CrawlResponse::new(results))),
        Err(e) => {
            error!("Crawl failed for channel {channel_id}: {e:?}");
            Err(ErrorResponse {
                status: Status::InternalServerError,
                error: e.to_string(),
            })
        }
    }
}

#[post("/crawl", data = "<request>")]
pub async fn crawl_comments(
    request: Json<CrawlRequest>,
    state: &State<AppState>,
) -> Result<Json<CrawlResponse>, ErrorResponse> {
    let request = request.into_inner();

    let channel_id = match request.channel_id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            return Err(ErrorResponse {
                status: Status::BadRequest,
                error: "Missing channel_id parameter".to_string(),
            })
        }
    };

    let max_videos = positive(request.max_videos, DEFAULT_MAX_VIDEOS, "max_videos")?;
    let max_comments = positive(request.max_comments, DEFAULT_MAX_COMMENTS, "max_comments")?;
    let filter = CommentFilter::new(request.username, request.keywords);

    run_crawl(state, &channel_id, &filter, max_videos, max_comments).await
}

#[post("/by-username", data = "<request>")]
pub async fn crawl_by_username(
    request: Json<CrawlByUsernameRequest>,
    state: &State<AppState>,
) -> Result<Json<CrawlResponse>, ErrorResponse> {
    let request = request.into_inner();

    let channel_username = match request.channel_username.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            return Err(ErrorResponse {
                status: Status::BadRequest,
                error: "Missing channel_username parameter".to_string(),
            })
        }
    };

    let max_videos = positive(request.max_videos, DEFAULT_MAX_VIDEOS, "max_videos")?;
    let max_comments = positive(request.max_comments, DEFAULT_MAX_COMMENTS, "max_comments")?;

    let channel_id = match resolve_channel_id(&state.youtube, &channel_username).await {
        Ok(ChannelResolution::Found(id)) => id,
        Ok(ChannelResolution::NotFound) => {
            return Err(ErrorResponse {
                status: Status::NotFound,
                error: format!("Could not find channel ID for username: {channel_username}"),
            })
        }
        Err(e) => {
            error!("Channel resolution failed for {channel_username}: {e:?}");
            return Err(ErrorResponse {
                status: Status::NotFound,
                error: format!("Could not find channel ID for username: {channel_username}"),
            });
        }
    };

    let filter = CommentFilter::new(request.username, request.keywords);
    run_crawl(state, &channel_id, &filter, max_videos, max_comments).await
}
