//! Query URL construction and term extraction.
//!
//! A search term maps deterministically onto a request URL against the configured
//! endpoint; the search-history view needs the inverse mapping to turn previously
//! issued URLs back into display terms. Both directions go through the `url` crate
//! so encoding and decoding stay symmetric.

use url::Url;

use crate::domain::error::{Result, StorysiftError};

/// Name of the query-string parameter carrying the search term.
const QUERY_PARAM: &str = "query";

/// Builds the request URL for a search term.
///
/// The term is appended as a form-urlencoded `query` parameter, so spaces and
/// reserved characters are escaped. An empty term is legal and produces a
/// front-page query (`?query=`), matching the upstream API's behavior.
///
/// # Errors
///
/// Returns [`StorysiftError::Config`] if the configured endpoint is not a valid
/// absolute URL.
pub fn build_query_url(endpoint: &str, term: &str) -> Result<String> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| StorysiftError::Config(format!("invalid endpoint {endpoint}: {e}")))?;

    url.query_pairs_mut().clear().append_pair(QUERY_PARAM, term);

    Ok(url.into())
}

/// Recovers the search term from a previously issued query URL.
///
/// Inverse of [`build_query_url`]: reads the `query` parameter and decodes it.
/// Returns `None` for URLs that do not parse or carry no `query` parameter,
/// which the history derivation simply skips.
#[must_use]
pub fn extract_term(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;

    parsed
        .query_pairs()
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

    #[test]
    fn builds_url_from_template() {
        let url = build_query_url(ENDPOINT, "React").unwrap();
        assert_eq!(url, "https://hn.algolia.com/api/v1/search?query=React");
    }

    #[test]
    fn encodes_reserved_characters() {
        let url = build_query_url(ENDPOINT, "rust async").unwrap();
        assert_eq!(url, "https://hn.algolia.com/api/v1/search?query=rust+async");

        let url = build_query_url(ENDPOINT, "c&c").unwrap();
        assert_eq!(url, "https://hn.algolia.com/api/v1/search?query=c%26c");
    }

    #[test]
    fn empty_term_is_allowed() {
        let url = build_query_url(ENDPOINT, "").unwrap();
        assert_eq!(url, "https://hn.algolia.com/api/v1/search?query=");
    }

    #[test]
    fn extract_is_inverse_of_build() {
        for term in ["React", "rust async", "c&c", ""] {
            let url = build_query_url(ENDPOINT, term).unwrap();
            assert_eq!(extract_term(&url).as_deref(), Some(term));
        }
    }

    #[test]
    fn extract_rejects_urls_without_query_param() {
        assert_eq!(extract_term("https://hn.algolia.com/api/v1/search"), None);
        assert_eq!(extract_term("not a url"), None);
    }

    #[test]
    fn rejects_invalid_endpoint() {
        assert!(build_query_url("not a url", "rust").is_err());
    }
}
