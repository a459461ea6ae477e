pub mod db;
pub mod input;
pub mod scraper;
