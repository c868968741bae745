//! Query string dictionary for HTTP request parameters.
//!
//! [`QueryDict`] is a read-only, multi-valued dictionary for GET parameters.
//! The resolver consults it for the configured locale query parameter; it is
//! parsed once when the request is built and never mutated afterwards.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

/// A read-only dictionary for query string data.
///
/// Supports multiple values per key; [`get`](QueryDict::get) returns the last
/// value, matching common form semantics.
///
/// # Examples
///
/// ```
/// use lingua_rs_http::QueryDict;
///
/// let qd = QueryDict::parse("color=red&color=blue&size=large");
/// assert_eq!(qd.get("color"), Some("blue"));
/// assert_eq!(qd.get_list("color").unwrap().len(), 2);
/// assert_eq!(qd.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryDict {
    data: HashMap<String, Vec<String>>,
}

impl QueryDict {
    /// Creates a new, empty `QueryDict`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a URL query string (e.g. `"key1=val1&key2=val2"`).
    ///
    /// Handles percent-encoding and `+`-encoded spaces, and supports multiple
    /// values per key. Malformed pairs are tolerated: a pair without `=`
    /// becomes a key with an empty value.
    pub fn parse(query_string: &str) -> Self {
        let mut data: HashMap<String, Vec<String>> = HashMap::new();

        for pair in query_string.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair
                .find('=')
                .map_or((pair, ""), |eq| (&pair[..eq], &pair[eq + 1..]));

            data.entry(percent_decode(key))
                .or_default()
                .push(percent_decode(value));
        }

        Self { data }
    }

    /// Returns the last value for a key, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data
            .get(key)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Returns all values for a key.
    pub fn get_list(&self, key: &str) -> Option<&Vec<String>> {
        self.data.get(key)
    }

    /// Returns `true` if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Returns `true` if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// Decodes a percent-encoded component, treating `+` as a space.
fn percent_decode(input: &str) -> String {
    let plus_decoded = input.replace('+', " ");
    percent_decode_str(&plus_decoded)
        .decode_utf8()
        .map_or_else(|_| plus_decoded.clone(), |s| s.to_string())
}
