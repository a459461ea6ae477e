mod error;
mod home;
mod url_show;
mod urls_index;

pub use error::render_error_page;
pub use home::render_home_page;
pub use url_show::render_url_page;
pub use urls_index::render_urls_page;
