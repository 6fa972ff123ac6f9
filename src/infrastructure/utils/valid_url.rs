use url::Url;

/// Checks whether a string parses as an absolute URL.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}
