/// Percent-encodes `key=value` pairs joined with `&`.
///
/// Used both for query strings and for `application/x-www-form-urlencoded`
/// request bodies.
pub fn encode_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Joins `base` and `path` and appends the encoded query string.
pub fn with_query(base: &str, path: &str, pairs: &[(&str, &str)]) -> String {
    format!(
        "{}/{}?{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/'),
        encode_pairs(pairs)
    )
}
