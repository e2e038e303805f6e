use crate::error::{Error, Result};
use crate::utils::with_query;

pub const EMPTY_SEARCH_NOTICE: &str = "Please enter a service or location";

/// Where a validated search navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget {
    /// Home page listing, `/?query=&location=`.
    Home,
    /// Dedicated results page, `/search?query=&location=`.
    Results,
}

impl SearchTarget {
    fn path(self) -> &'static str {
        match self {
            SearchTarget::Home => "/",
            SearchTarget::Results => "/search",
        }
    }
}

/// Trimmed search text and location, at least one of them non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerms {
    query: String,
    location: String,
}

impl SearchTerms {
    pub fn new(query: &str, location: &str) -> Result<Self> {
        let query = query.trim();
        let location = location.trim();

        if query.is_empty() && location.is_empty() {
            return Err(Error::Validation(EMPTY_SEARCH_NOTICE.to_string()));
        }

        Ok(Self {
            query: query.to_string(),
            location: location.to_string(),
        })
    }

    pub fn url(&self, target: SearchTarget) -> String {
        with_query(
            "",
            target.path(),
            &[("query", self.query.as_str()), ("location", self.location.as_str())],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_empty_is_rejected() {
        assert!(matches!(
            SearchTerms::new("  ", ""),
            Err(Error::Validation(msg)) if msg == EMPTY_SEARCH_NOTICE
        ));
    }

    #[test]
    fn either_field_is_enough() {
        let only_city = SearchTerms::new("", " Mysuru ").unwrap();
        assert_eq!(only_city.url(SearchTarget::Home), "/?query=&location=Mysuru");

        let only_query = SearchTerms::new("ac repair", "").unwrap();
        assert_eq!(
            only_query.url(SearchTarget::Results),
            "/search?query=ac%20repair&location="
        );
    }

    #[test]
    fn values_are_percent_encoded() {
        let terms = SearchTerms::new("tiles & marble", "Navi Mumbai").unwrap();
        assert_eq!(
            terms.url(SearchTarget::Home),
            "/?query=tiles%20%26%20marble&location=Navi%20Mumbai"
        );
    }
}
