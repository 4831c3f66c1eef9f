//! Page location capability
//!
//! The character state never touches a global location. It is handed a
//! `LocationProvider` that can report the current URL and swap its query
//! string in place (no history entry, no reload).

use url::Url;

pub trait LocationProvider {
    /// The page's current absolute URL
    fn current(&self) -> Url;

    /// Replace the query string of the current URL, keeping origin and path.
    /// `None` or an empty query clears it.
    fn replace_query(&mut self, query: Option<&str>);
}

/// In-process location, used by the CLI and by tests
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    url: Url,
    replacements: usize,
}

impl MemoryLocation {
    pub fn new(url: Url) -> Self {
        Self { url, replacements: 0 }
    }

    pub fn parse(url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(url)?))
    }

    /// How many times the query was replaced
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl LocationProvider for MemoryLocation {
    fn current(&self) -> Url {
        self.url.clone()
    }

    fn replace_query(&mut self, query: Option<&str>) {
        let query = query.filter(|q| !q.is_empty());
        self.url.set_query(query);
        self.replacements += 1;
        log::debug!("Location replaced: {}", self.url);
    }
}
