pub mod url_checks;
pub mod urls;

pub use url_checks::Entity as UrlChecks;
pub use urls::Entity as Urls;
