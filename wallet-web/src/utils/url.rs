//! Query-string access for page configuration

use web_sys::window;

/// Read `key` from `window.location.search`.
///
/// Used as the configuration source; the router's query map is not available
/// yet when the wallet context is created.
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    find_query_param(&search, key)
}

/// Look up `key` in a raw query string (with or without the leading `?`).
///
/// The first occurrence wins. A bare key (`?debug`) yields an empty string.
pub fn find_query_param(search: &str, key: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (name == key).then(|| decode_component(value))
        })
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(spaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_query_param() {
        let search = "?wallet=eternl&discovery=poll&interval_ms=2000";
        assert_eq!(find_query_param(search, "wallet"), Some("eternl".to_string()));
        assert_eq!(find_query_param(search, "interval_ms"), Some("2000".to_string()));
        assert_eq!(find_query_param(search, "missing"), None);
    }

    #[test]
    fn test_find_query_param_decodes_and_handles_bare_keys() {
        assert_eq!(
            find_query_param("wallet=gero%20wallet", "wallet"),
            Some("gero wallet".to_string())
        );
        assert_eq!(find_query_param("?wallet=typhon+cip30", "wallet"), Some("typhon cip30".to_string()));
        assert_eq!(find_query_param("?debug&wallet=lace", "debug"), Some(String::new()));
        assert_eq!(find_query_param("", "wallet"), None);
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(
            find_query_param("?wallet=nami&wallet=lace", "wallet"),
            Some("nami".to_string())
        );
    }
}
