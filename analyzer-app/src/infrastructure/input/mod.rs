mod url_normalizer;
mod url_validator;

pub use url_normalizer::normalize_url;
pub use url_validator::{UrlValidator, EMPTY_URL, INVALID_URL, MAX_URL_LENGTH, URL_TOO_LONG};
