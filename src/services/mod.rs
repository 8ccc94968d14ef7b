pub mod crawler;
pub mod filter;
pub mod resolver;
pub mod youtube;
