mod app_error;

pub use app_error::{AppError, CHECK_FAILED_MESSAGE};
