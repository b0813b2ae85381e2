use url::Url;

use crate::errors::Result;

/// Renders `?k=v&k=v2...` from `(key, values)` pairs in iteration order.
/// Nothing is percent-encoded; a key with no values renders as `k=`.
pub fn query_string<K, V, I>(params: I) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
    I: IntoIterator<Item = (K, Vec<V>)>,
{
    let mut out = String::new();
    let mut push = |key: &str, value: &str| {
        out.push(if out.is_empty() { '?' } else { '&' });
        out.push_str(key);
        out.push('=');
        out.push_str(value);
    };
    for (key, values) in params {
        if values.is_empty() {
            push(key.as_ref(), "");
        }
        for value in &values {
            push(key.as_ref(), value.as_ref());
        }
    }
    out
}

/// Query parameters of `url`, decoded and grouped by key in first-seen order.
pub fn query_params(url: &Url) -> Vec<(String, Vec<String>)> {
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for (k, v) in url.query_pairs() {
        match grouped.iter_mut().find(|(key, _)| *key == k) {
            Some((_, values)) => values.push(v.into_owned()),
            None => grouped.push((k.into_owned(), vec![v.into_owned()])),
        }
    }
    grouped
}

pub fn query_string_from_url(url: &str) -> Result<String> {
    let url = Url::parse(url)?;
    Ok(query_string(query_params(&url)))
}
