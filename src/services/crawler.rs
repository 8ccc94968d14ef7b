use crate::models::{Comment, VideoComments, VideoRef};
use crate::services::filter::CommentFilter;
use crate::services::youtube::YouTubeApi;
use anyhow::Result;
use log::{info, warn};

/// Upstream per-call maxima of the two list endpoints.
const VIDEO_PAGE_SIZE: usize = 50;
const COMMENT_PAGE_SIZE: usize = 100;

/// Collects up to `max_videos` uploads of a channel, in playlist order.
/// An unknown channel id yields an empty list rather than an error.
pub async fn list_videos<A: YouTubeApi>(
    youtube: &A,
    channel_id: &str,
    max_videos: usize,
) -> Result<Vec<VideoRef>> {
    let playlist_id = match youtube.uploads_playlist_id(channel_id).await? {
        Some(id) => id,
        None => {
            info!("No uploads playlist found for channel {channel_id}");
            return Ok(Vec::new());
        }
    };

    let mut videos: Vec<VideoRef> = Vec::new();
    let mut page_token: Option<String> = None;

    while videos.len() < max_videos {
        let want = VIDEO_PAGE_SIZE.min(max_videos - videos.len()) as u32;
        let page = youtube
            .playlist_items_page(&playlist_id, want, page_token.as_deref())
            .await?;

        let got = page.items.len();
        videos.extend(page.items);

        // An empty page with a continuation token would loop forever.
        match page.next_page_token {
            Some(token) if got > 0 => page_token = Some(token),
            _ => break,
        }
    }

    videos.truncate(max_videos);
    Ok(videos)
}

/// Collects up to `max_comments` top-level comments of a video.
pub async fn list_comments<A: YouTubeApi>(
    youtube: &A,
    video_id: &str,
    max_comments: usize,
) -> Result<Vec<Comment>> {
    let mut comments: Vec<Comment> = Vec::new();
    let mut page_token: Option<String> = None;

    while comments.len() < max_comments {
        let want = COMMENT_PAGE_SIZE.min(max_comments - comments.len()) as u32;
        let page = youtube
            .comment_threads_page(video_id, want, page_token.as_deref())
            .await?;

        let got = page.items.len();
        comments.extend(page.items);

        match page.next_page_token {
            Some(token) if got > 0 => page_token = Some(token),
            _ => break,
        }
    }

    comments.truncate(max_comments);
    Ok(comments)
}

/// Crawls a channel video by video and returns each video's filtered
/// comments, keyed by watch URL. Videos without matches are left out. A video
/// whose comment fetch fails (comments disabled, typically) contributes
/// nothing but does not abort the crawl; failing to list the videos does.
pub async fn crawl_channel_comments<A: YouTubeApi>(
    youtube: &A,
    channel_id: &str,
    filter: &CommentFilter,
    max_videos: usize,
    max_comments_per_video: usize,
) -> Result<Vec<VideoComments>> {
    let videos = list_videos(youtube, channel_id, max_videos).await?;
    info!("Found {} videos for channel {channel_id}", videos.len());

    let mut results: Vec<VideoComments> = Vec::new();

    for video in &videos {
        let comments = match list_comments(youtube, &video.video_id, max_comments_per_video).await
        {
            Ok(comments) => comments,
            Err(e) => {
                warn!(
                    "Could not fetch comments for video {}: {e:#}",
                    video.video_id
                );
                Vec::new()
            }
        };

        let matches = filter.apply(&comments);
        if !matches.is_empty() {
            results.push(VideoComments {
                video_url: video.watch_url(),
                comments: matches,
            });
        }
    }

    info!(
        "Matched comments on {} of {} videos for channel {channel_id}",
        results.len(),
        videos.len()
    );

    Ok(results)
}
