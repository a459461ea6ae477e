mod page_fetcher;
mod seo_extractor;

pub use page_fetcher::{FetchedPage, PageFetcher, DEFAULT_TIMEOUT};
pub use seo_extractor::extract_seo;
