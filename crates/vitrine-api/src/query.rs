//! Query-string parsing.

use percent_encoding::percent_decode_str;

/// Parse a raw query string into decoded key/value pairs.
///
/// A key without `=` becomes a pair with an empty value; empty
/// segments are skipped.
pub fn parse_pairs(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode(key), decode(value))
        })
        .collect()
}

/// The first value for `key`, if present.
pub fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn decode(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    percent_decode_str(&plus_decoded)
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let pairs = parse_pairs("page=2&limit=10&q=trail");
        assert_eq!(first(&pairs, "page"), Some("2"));
        assert_eq!(first(&pairs, "limit"), Some("10"));
        assert_eq!(first(&pairs, "q"), Some("trail"));
        assert_eq!(first(&pairs, "missing"), None);
    }

    #[test]
    fn test_percent_and_plus_decoding() {
        let pairs = parse_pairs("q=trail+pack&category=caf%C3%A9");
        assert_eq!(first(&pairs, "q"), Some("trail pack"));
        assert_eq!(first(&pairs, "category"), Some("café"));
    }

    #[test]
    fn test_degenerate_segments() {
        let pairs = parse_pairs("&flag&=empty&");
        assert_eq!(first(&pairs, "flag"), Some(""));
        assert_eq!(first(&pairs, ""), Some("empty"));
    }
}
