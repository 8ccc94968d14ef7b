use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::serde::{Deserialize, Serialize};
use rocket::{response, Response};
use serde_json::{json, Map, Value};
use std::io::Cursor;

/// One top-level comment as returned by the commentThreads endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub published_at: String,
    pub like_count: i64,
}

/// A video taken from a channel's uploads playlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRef {
    pub video_id: String,
    pub title: String,
}

impl VideoRef {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

/// Matching comments of a single video, keyed by its watch URL.
#[derive(Debug, Clone, Serialize)]
pub struct VideoComments {
    pub video_url: String,
    pub comments: Vec<Comment>,
}

// Every field stays Option so that missing values reach the handler and come
// back as a 400 with a JSON error instead of Rocket's 422.
#[derive(Debug, Serialize, Deserialize)]
pub struct CrawlRequest {
    pub channel_id: Option<String>,
    pub username: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub max_videos: Option<i64>,
    pub max_comments: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CrawlByUsernameRequest {
    pub channel_username: Option<String>,
    pub username: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub max_videos: Option<i64>,
    pub max_comments: Option<i64>,
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Serialize)]
pub struct CrawlResponse {
    pub success: bool,
    pub video_count: usize,
    pub results: Map<String, Value>,
}

impl CrawlResponse {
    /// Builds the wire shape from crawl results, keeping video order.
    pub fn new(entries: Vec<VideoComments>) -> Self {
        let mut results = Map::new();
        for entry in &entries {
            results.insert(entry.video_url.clone(), json!(entry.comments));
        }

        CrawlResponse {
            success: true,
            video_count: results.len(),
            results,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    #[serde(skip)]
    pub status: Status,
    pub error: String,
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status;
        let json = serde_json::to_string(&self).unwrap();
        Response::build()
            .status(status)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
