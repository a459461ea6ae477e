mod error_display;
mod flash_messages;
mod layout;
mod url_form;

pub use error_display::ErrorDisplay;
pub use flash_messages::{Flash, FlashKind, FlashMessages};
pub use layout::Layout;
pub use url_form::UrlForm;
