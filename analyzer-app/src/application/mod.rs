mod add_url;
mod run_check;

pub use add_url::{AddUrl, AddUrlOutcome};
pub use run_check::RunCheck;
