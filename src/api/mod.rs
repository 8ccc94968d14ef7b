pub mod crawl;
pub mod health;
