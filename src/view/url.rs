use std::sync::OnceLock;

use regex::Regex;

/// Anchored at the start of the value: only values that begin with
/// `http://` or `https://` become links, so a link target is always the
/// whole value and never text merely containing a URL.
const HTTP_URL_PATTERN: &str =
    r"^(http|https)://(\w+:?\w*)?(\S+)(:[0-9]+)?(/|/([\w#!:.?+=&%!\-/]))?";

fn http_url_regex() -> Option<&'static Regex> {
    static CACHE: OnceLock<Option<Regex>> = OnceLock::new();
    CACHE
        .get_or_init(|| Regex::new(HTTP_URL_PATTERN).ok())
        .as_ref()
}

/// Whether a field value should render as a link.
///
/// Only `http://` and `https://` values qualify; anything else stays text.
pub fn is_valid_http_url(value: &str) -> bool {
    http_url_regex().is_some_and(|re| re.is_match(value))
}
