//! Query-string helpers for the `--query` user filter.

/// Pick the user filter from a query string such as `user_id=U2&tab=1`.
///
/// `user_id` wins when present; otherwise the value of the first parameter
/// is used. Values are percent-decoded (`+` counts as a space). Returns
/// `None` for an empty query.
pub fn parse_first_query_value(query: &str) -> Option<String> {
    let params: Vec<(String, String)> = query
        .trim_start_matches('?')
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|p| {
            let (k, v) = p.split_once('=').unwrap_or((p, ""));
            (decode(k), decode(v))
        })
        .collect();

    params
        .iter()
        .find(|(k, _)| k == "user_id")
        .or_else(|| params.first())
        .map(|(_, v)| v.clone())
}

fn decode(s: &str) -> String {
    let s = s.replace('+', " ");
    match urlencoding::decode(&s) {
        Ok(c) => c.into_owned(),
        Err(_) => s.clone(),
    }
}
