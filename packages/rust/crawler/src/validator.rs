//! Decides whether a bookmark URL is worth fetching at all.

use url::Url;

use bookmarklens_shared::RetrievalConfig;

/// Pure URL predicate: `http`/`https` scheme and a host outside the blocklist.
#[derive(Debug, Clone)]
pub struct UrlValidator {
    blocked_hosts: Vec<String>,
}

impl UrlValidator {
    /// Build a validator with the given blocked hosts.
    ///
    /// Entries are lowercased; leading and trailing `.` are ignored.
    pub fn new<I, S>(blocked_hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let blocked_hosts = blocked_hosts
            .into_iter()
            .map(|h| h.as_ref().trim().trim_matches('.').to_ascii_lowercase())
            .filter(|h| !h.is_empty())
            .collect();
        Self { blocked_hosts }
    }

    /// Parse `raw` and return it only if it is retrievable.
    pub fn parse(&self, raw: &str) -> Option<Url> {
        let url = Url::parse(raw).ok()?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return None;
        }
        let host = url.host_str()?;
        if self.is_blocked(host) {
            return None;
        }
        Some(url)
    }

    pub fn is_valid(&self, raw: &str) -> bool {
        self.parse(raw).is_some()
    }

    /// Exact match or subdomain of a blocked host. A fully qualified host
    /// (`drive.google.com.`) matches like its unqualified form.
    fn is_blocked(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        self.blocked_hosts.iter().any(|blocked| {
            host == *blocked
                || host
                    .strip_suffix(blocked.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::from(&RetrievalConfig::default())
    }
}

impl From<&RetrievalConfig> for UrlValidator {
    fn from(config: &RetrievalConfig) -> Self {
        Self::new(&config.blocked_hosts)
    }
}
