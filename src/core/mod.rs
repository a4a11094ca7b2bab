pub mod query;
pub mod score;
pub mod scrape;
pub mod vocab;
