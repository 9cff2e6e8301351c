// ABOUTME: URL query-string building helpers
// ABOUTME: Percent-encodes key-value pairs and appends them to base URLs

/// Build a query string from ordered key-value pairs.
///
/// Keys and values are percent-encoded; pair order is preserved exactly as
/// given. An empty sequence builds an empty string.
pub fn build<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut query = String::new();
    for (key, value) in params {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(&urlencoding::encode(key.as_ref()));
        query.push('=');
        query.push_str(&urlencoding::encode(value.as_ref()));
    }
    query
}

/// Append a query string to a base URL.
///
/// Uses `?` when the base carries no query yet, `&` otherwise. A base with no
/// parameters to append is returned unchanged.
pub fn append<I, K, V>(base_url: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let query = build(params);
    if query.is_empty() {
        return base_url.to_string();
    }
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base_url, separator, query)
}
