use crate::models::{Comment, VideoRef};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// One page of a paginated Data API list call.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

/// Page-level access to the YouTube Data API v3. Pagination policy lives in
/// the callers; implementations only fetch single pages, which keeps the
/// crawl logic testable against scripted fakes.
#[async_trait]
pub trait YouTubeApi: Send + Sync {
    /// Uploads playlist id of a channel, `None` when the channel id is unknown.
    async fn uploads_playlist_id(&self, channel_id: &str) -> Result<Option<String>>;

    async fn playlist_items_page(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<Page<VideoRef>>;

    async fn comment_threads_page(
        &self,
        video_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<Page<Comment>>;

    /// Legacy `forUsername` lookup, `None` when no channel carries the name.
    async fn channel_id_for_username(&self, username: &str) -> Result<Option<String>>;

    /// First channel id matching a search query, `None` on an empty result.
    async fn search_channel_id(&self, query: &str) -> Result<Option<String>>;
}

pub struct YouTubeClient {
    http: Client,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(api_key: String) -> Self {
        YouTubeClient {
            http: Client::new(),
            api_key,
        }
    }

    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        let response = self
            .http
            .get(url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "YouTube API request failed with status {status}: {body}"
            ));
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl YouTubeApi for YouTubeClient {
    // https://developers.google.com/youtube/v3/docs/channels
    async fn uploads_playlist_id(&self, channel_id: &str) -> Result<Option<String>> {
        let response = self
            .get_json(
                "https://www.googleapis.com/youtube/v3/channels",
                &[("part", "contentDetails"), ("id", channel_id)],
            )
            .await?;

        Ok(
            response["items"][0]["contentDetails"]["relatedPlaylists"]["uploads"]
                .as_str()
                .map(String::from),
        )
    }

    // https://developers.google.com/youtube/v3/docs/playlistItems
    async fn playlist_items_page(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<Page<VideoRef>> {
        let max_results = max_results.to_string();
        let mut query = vec![
            ("part", "snippet,contentDetails"),
            ("playlistId", playlist_id),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self
            .get_json("https://www.googleapis.com/youtube/v3/playlistItems", &query)
            .await?;

        let mut items = Vec::new();
        if let Some(arr) = response["items"].as_array() {
            for item in arr {
                if let Some(video_id) = item["snippet"]["resourceId"]["videoId"].as_str() {
                    items.push(VideoRef {
                        video_id: video_id.to_string(),
                        title: item["snippet"]["title"].as_str().unwrap_or("").to_string(),
                    });
                }
            }
        }

        Ok(Page {
            items,
            next_page_token: response["nextPageToken"].as_str().map(String::from),
        })
    }

    // https://developers.google.com/youtube/v3/docs/commentThreads
    async fn comment_threads_page(
        &self,
        video_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<Page<Comment>> {
        let max_results = max_results.to_string();
        let mut query = vec![
            ("part", "snippet"),
            ("videoId", video_id),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self
            .get_json("https://www.googleapis.com/youtube/v3/commentThreads", &query)
            .await?;

        let mut items = Vec::new();
        if let Some(arr) = response["items"].as_array() {
            for item in arr {
                let snippet = &item["snippet"]["topLevelComment"]["snippet"];
                items.push(Comment {
                    author: snippet["authorDisplayName"]
                        .as_str()
                        .unwrap_or("")
                        .to_string(),
                    text: snippet["textDisplay"].as_str().unwrap_or("").to_string(),
                    published_at: snippet["publishedAt"].as_str().unwrap_or("").to_string(),
                    like_count: snippet["likeCount"].as_i64().unwrap_or(0),
                });
            }
        }

        Ok(Page {
            items,
            next_page_token: response["nextPageToken"].as_str().map(String::from),
        })
    }

    async fn channel_id_for_username(&self, username: &str) -> Result<Option<String>> {
        let response = self
            .get_json(
                "https://www.googleapis.com/youtube/v3/channels",
                &[("part", "id"), ("forUsername", username)],
            )
            .await?;

        Ok(response["items"][0]["id"].as_str().map(String::from))
    }

    // https://developers.google.com/youtube/v3/docs/search/list
    async fn search_channel_id(&self, query: &str) -> Result<Option<String>> {
        let response = self
            .get_json(
                "https://www.googleapis.com/youtube/v3/search",
                &[
                    ("part", "snippet"),
                    ("q", query),
                    ("type", "channel"),
                    ("maxResults", "1"),
                ],
            )
            .await?;

        Ok(response["items"][0]["snippet"]["channelId"]
            .as_str()
            .map(String::from))
    }
}
