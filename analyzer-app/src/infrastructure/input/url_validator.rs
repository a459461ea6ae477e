use super::normalize_url;
use analyzer_errors::AppError;
use url::{Host, Url};

pub const MAX_URL_LENGTH: usize = 255;

pub const EMPTY_URL: &str = "URL must not be empty";
pub const URL_TOO_LONG: &str = "URL must not exceed 255 characters";
pub const INVALID_URL: &str = "Invalid URL";

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];
const MAX_LABEL_LENGTH: usize = 63;
const MAX_DOMAIN_LENGTH: usize = 253;

pub struct UrlValidator;

impl UrlValidator {
    /// Checks a user-submitted URL. Rules run in order and the first failure
    /// is the only one reported.
    pub fn validate(raw: &str) -> Result<Url, AppError> {
        let raw = raw.trim();

        if raw.is_empty() {
            return Err(AppError::InvalidUrl(EMPTY_URL.to_string()));
        }

        if raw.chars().count() > MAX_URL_LENGTH {
            return Err(AppError::InvalidUrl(URL_TOO_LONG.to_string()));
        }

        let parsed = Url::parse(raw).map_err(|_| Self::invalid())?;

        if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
            return Err(Self::invalid());
        }

        match parsed.host() {
            Some(Host::Domain(domain)) if Self::is_valid_domain(domain) => {}
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {}
            _ => return Err(Self::invalid()),
        }

        // The stored name uses the punycode host, which can outgrow the input.
        if normalize_url(&parsed).chars().count() > MAX_URL_LENGTH {
            return Err(AppError::InvalidUrl(URL_TOO_LONG.to_string()));
        }

        Ok(parsed)
    }

    fn invalid() -> AppError {
        AppError::InvalidUrl(INVALID_URL.to_string())
    }

    // Needs at least one dot: bare hosts like `localhost` are not public sites.
    fn is_valid_domain(domain: &str) -> bool {
        let domain = domain.strip_suffix('.').unwrap_or(domain);
        if domain.len() > MAX_DOMAIN_LENGTH {
            return false;
        }
        let labels: Vec<&str> = domain.split('.').collect();

        labels.len() >= 2
            && labels.iter().all(|label| {
                !label.is_empty()
                    && label.len() <= MAX_LABEL_LENGTH
                    && !label.starts_with('-')
                    && !label.ends_with('-')
                    && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            })
    }
}
