//! Query parameters of the stat card endpoint.

use url::form_urlencoded;

/// Raw `username` values found in the query string.
///
/// Parsed leniently from the raw query so that malformed input still ends up
/// as an error card instead of a plain-text extractor rejection. Parameters
/// other than `username` are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CardParams {
    usernames: Vec<String>,
}

impl CardParams {
    pub fn from_query(query: Option<&str>) -> Self {
        let usernames = query
            .map(|q| {
                form_urlencoded::parse(q.as_bytes())
                    .filter(|(key, _)| key == "username")
                    .map(|(_, value)| value.into_owned())
                    .collect()
            })
            .unwrap_or_default();

        Self { usernames }
    }

    /// The username, if it was given exactly once.
    pub fn username(&self) -> Option<&str> {
        match self.usernames.as_slice() {
            [single] => Some(single.as_str()),
            _ => None,
        }
    }
}
