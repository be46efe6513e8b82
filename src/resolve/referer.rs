//! Parsed `Referer` URL of the page embedding the iframe.

use std::fmt;
use std::ops::Range;

use url::Url;

/// An absolute, hierarchical referer URL.
///
/// Anything `Url` refuses, URLs that cannot be a base (`mailto:`, `data:`),
/// and URLs without a `scheme://` authority are not referers we can rewrite
/// against. Authority and path are kept exactly as sent, so URLs built from
/// them point at the page the client saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Referer {
    raw: String,
    url: Url,
    netloc: Range<usize>,
    path: Range<usize>,
}

impl Referer {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim_matches(|c: char| c <= ' ');
        let url = Url::parse(raw).ok()?;
        if url.cannot_be_a_base() {
            return None;
        }

        let netloc_start = raw.find("://")? + 3;
        let netloc_end = raw[netloc_start..]
            .find(['/', '?', '#'])
            .map_or(raw.len(), |i| netloc_start + i);
        let path_end = raw[netloc_end..]
            .find(['?', '#'])
            .map_or(raw.len(), |i| netloc_end + i);

        Some(Self {
            raw: raw.to_string(),
            url,
            netloc: netloc_start..netloc_end,
            path: netloc_end..path_end,
        })
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Userinfo, host and port as sent, e.g. `user@www.Referer.com:80`.
    pub fn netloc(&self) -> &str {
        &self.raw[self.netloc.clone()]
    }

    /// Path as sent, without dot-segment or percent-encoding normalization.
    pub fn path(&self) -> &str {
        &self.raw[self.path.clone()]
    }

    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    /// First non-empty, form-decoded value of the query parameter `name`.
    pub fn query_value(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, value)| key.as_ref() == name && !value.is_empty())
            .map(|(_, value)| value.into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Referer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
