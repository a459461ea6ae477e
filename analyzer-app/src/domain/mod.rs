mod seo_data;
mod url;
mod url_check;

pub use seo_data::SeoData;
pub use self::url::{Url, UrlWithLastCheck};
pub use url_check::{NewUrlCheck, UrlCheck};
