//! Recent-search derivation.
//!
//! The application records every issued query URL; this module derives the short
//! list of distinct search terms shown as quick-repeat shortcuts. The derivation
//! is pure: it never stores anything, it just reads the URL sequence backwards.

use crate::domain::query::extract_term;

/// Maximum number of recent terms offered as shortcuts.
pub const HISTORY_LIMIT: usize = 5;

/// Derives the most recent distinct search terms from issued query URLs.
///
/// Each term appears once, at its most recent position; the result is ordered
/// most-recent-last and truncated to [`HISTORY_LIMIT`] entries. URLs that do not
/// carry a query parameter are skipped.
#[must_use]
pub fn recent_terms(issued_urls: &[String]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::with_capacity(HISTORY_LIMIT);

    for url in issued_urls.iter().rev() {
        let Some(term) = extract_term(url) else {
            continue;
        };
        if terms.contains(&term) {
            continue;
        }
        terms.push(term);
        if terms.len() == HISTORY_LIMIT {
            break;
        }
    }

    terms.reverse();
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::query::build_query_url;

    const ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

    fn urls(terms: &[&str]) -> Vec<String> {
        terms
            .iter()
            .map(|t| build_query_url(ENDPOINT, t).unwrap())
            .collect()
    }

    #[test]
    fn ends_with_the_most_recent_term() {
        let history = recent_terms(&urls(&["React", "Redux"]));
        assert_eq!(history, vec!["React", "Redux"]);
    }

    #[test]
    fn duplicate_terms_keep_only_the_latest_occurrence() {
        let history = recent_terms(&urls(&["React", "Redux", "React"]));
        assert_eq!(history, vec!["Redux", "React"]);
    }

    #[test]
    fn truncates_to_the_last_five_distinct_terms() {
        let history = recent_terms(&urls(&["a", "b", "c", "d", "e", "f", "g"]));
        assert_eq!(history, vec!["c", "d", "e", "f", "g"]);
    }

    #[test]
    fn skips_urls_without_a_query_parameter() {
        let mut issued = urls(&["rust"]);
        issued.push("https://hn.algolia.com/api/v1/search".to_string());

        assert_eq!(recent_terms(&issued), vec!["rust"]);
    }

    #[test]
    fn empty_input_yields_empty_history() {
        assert!(recent_terms(&[]).is_empty());
    }
}
