use crate::services::youtube::YouTubeApi;
use anyhow::Result;

/// Outcome of a username lookup. Transport failures stay on the surrounding
/// `Result` so callers can tell them apart from a name that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelResolution {
    Found(String),
    NotFound,
}

/// Resolves a channel username or @handle to a channel id. Tries the legacy
/// `forUsername` lookup first; newer handles only show up through the search
/// fallback.
pub async fn resolve_channel_id<A: YouTubeApi>(
    youtube: &A,
    username: &str,
) -> Result<ChannelResolution> {
    let name = username.strip_prefix('@').unwrap_or(username);

    if let Some(channel_id) = youtube.channel_id_for_username(name).await? {
        return Ok(ChannelResolution::Found(channel_id));
    }

    if let Some(channel_id) = youtube.search_channel_id(&format!("@{name}")).await? {
        return Ok(ChannelResolution::Found(channel_id));
    }

    Ok(ChannelResolution::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Comment, VideoRef};
    use crate::services::youtube::Page;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeLookup {
        by_username: Option<String>,
        by_search: Option<String>,
        username_lookup_fails: bool,
        seen_usernames: Mutex<Vec<String>>,
        search_calls: AtomicUsize,
    }

    #[async_trait]
    impl YouTubeApi for FakeLookup {
        async fn uploads_playlist_id(&self, _channel_id: &str) -> Result<Option<String>> {
            Ok(None)
        }

        async fn playlist_items_page(
            &self,
            _playlist_id: &str,
            _max_results: u32,
            _page_token: Option<&str>,
        ) -> Result<Page<VideoRef>> {
            Ok(Page {
                items: Vec::new(),
                next_page_token: None,
            })
        }

        async fn comment_threads_page(
            &self,
            _video_id: &str,
            _max_results: u32,
            _page_token: Option<&str>,
        ) -> Result<Page<Comment>> {
            Ok(Page {
                items: Vec::new(),
                next_page_token: None,
            })
        }

        async fn channel_id_for_username(&self, username: &str) -> Result<Option<String>> {
            if self.username_lookup_fails {
                return Err(anyhow!("connection reset"));
            }
            self.seen_usernames
                .lock()
                .unwrap()
                .push(username.to_string());
            Ok(self.by_username.clone())
        }

        async fn search_channel_id(&self, _query: &str) -> Result<Option<String>> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.by_search.clone())
        }
    }

    #[tokio::test]
    async fn test_legacy_lookup_wins_without_search() {
        let fake = FakeLookup {
            by_username: Some("UC-legacy".to_string()),
            by_search: Some("UC-search".to_string()),
            ..Default::default()
        };

        let resolution = resolve_channel_id(&fake, "somechannel").await.unwrap();

        assert_eq!(resolution, ChannelResolution::Found("UC-legacy".to_string()));
        assert_eq!(fake.search_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_handle_falls_back_to_search() {
        let fake = FakeLookup {
            by_search: Some("UC-search".to_string()),
            ..Default::default()
        };

        let resolution = resolve_channel_id(&fake, "somechannel").await.unwrap();

        assert_eq!(resolution, ChannelResolution::Found("UC-search".to_string()));
        assert_eq!(fake.search_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_leading_at_is_stripped_once() {
        let fake = FakeLookup {
            by_username: Some("UC-legacy".to_string()),
            ..Default::default()
        };

        resolve_channel_id(&fake, "@somechannel").await.unwrap();

        let seen = fake.seen_usernames.lock().unwrap();
        assert_eq!(seen.as_slice(), ["somechannel"]);
    }

    #[tokio::test]
    async fn test_unknown_name_is_not_found() {
        let fake = FakeLookup::default();

        let resolution = resolve_channel_id(&fake, "nobody").await.unwrap();

        assert_eq!(resolution, ChannelResolution::NotFound);
    }

    #[tokio::test]
    async fn test_transport_errors_surface_as_err() {
        let fake = FakeLookup {
            username_lookup_fails: true,
            ..Default::default()
        };

        let result = resolve_channel_id(&fake, "somechannel").await;

        assert!(result.is_err());
    }
}
