use anyhow::Result;
use clap::Parser;
use log::info;
use yt_comment_crawler::config;
use yt_comment_crawler::models::VideoComments;
use yt_comment_crawler::services::crawler::crawl_channel_comments;
use yt_comment_crawler::services::filter::CommentFilter;
use yt_comment_crawler::services::youtube::YouTubeClient;

const SEPARATOR_WIDTH: usize = 80;
const SAMPLE_COMMENTS: usize = 3;
const MAX_DISPLAY_CHARS: usize = 100;

/// Crawl and filter comments from a YouTube channel.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// YouTube channel id to crawl
    #[clap(long = "channel_id")]
    channel_id: String,

    /// Keep only comments whose author name contains this text
    #[clap(long)]
    username: Option<String>,

    /// Keep only comments containing at least one of these words
    #[clap(long, num_args = 1..)]
    keywords: Option<Vec<String>>,

    /// Maximum number of videos to check
    #[clap(long = "max_videos", default_value_t = 50)]
    max_videos: usize,

    /// Maximum number of comments per video
    #[clap(long = "max_comments", default_value_t = 100)]
    max_comments: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    config::load_environment();
    config::init_logger();

    let args = Args::parse();

    let api_key = match config::youtube_api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let youtube = YouTubeClient::new(api_key);
    let filter = CommentFilter::new(args.username, args.keywords);

    info!("Crawling channel {}...", args.channel_id);
    let results = crawl_channel_comments(
        &youtube,
        &args.channel_id,
        &filter,
        args.max_videos,
        args.max_comments,
    )
    .await?;

    display_results(&results);
    Ok(())
}

fn display_results(results: &[VideoComments]) {
    if results.is_empty() {
        println!("No matching comments found.");
        return;
    }

    println!("Found matching comments in {} videos:", results.len());
    println!("{}", "-".repeat(SEPARATOR_WIDTH));

    for entry in results {
        println!("Video: {}", entry.video_url);
        println!("Matching comments: {}", entry.comments.len());

        // First few comments as a sample, long texts cut down.
        for comment in entry.comments.iter().take(SAMPLE_COMMENTS) {
            println!(
                "  - {}: {}",
                comment.author,
                truncate(&comment.text, MAX_DISPLAY_CHARS)
            );
        }

        if entry.comments.len() > SAMPLE_COMMENTS {
            println!("  ... and {} more", entry.comments.len() - SAMPLE_COMMENTS);
        }

        println!("{}", "-".repeat(SEPARATOR_WIDTH));
    }
}

/// Cuts display text down to `max_chars`, ellipsis included.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}
