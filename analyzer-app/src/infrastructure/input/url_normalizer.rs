use url::Url;

/// Reduces a parsed URL to `scheme://host[:port]`. Userinfo, path, query and
/// fragment are dropped; default ports are already elided by the parser.
pub fn normalize_url(url: &Url) -> String {
    let mut normalized = format!("{}://", url.scheme());

    if let Some(host) = url.host_str() {
        normalized.push_str(host);
    }

    if let Some(port) = url.port() {
        normalized.push(':');
        normalized.push_str(&port.to_string());
    }

    normalized
}
