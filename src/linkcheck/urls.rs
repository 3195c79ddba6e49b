//! URL extraction from markdown text.

use regex::Regex;
use std::sync::LazyLock;

/// Matches absolute http/https/ftp URLs, capturing protocol, domain, and
/// path remainder separately. The trailing character class keeps closing
/// punctuation (`.`, `,`, `:`) out of the match.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(http|ftp|https)://([\w\-_]+(?:(?:\.[\w\-_]+)+))([\w\-.,@?^=%&:/~+#]*[\w\-@?^=%&/~+#])?",
    )
    .unwrap()
});

/// One URL found in a block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMatch {
    /// Scheme ("http", "https", "ftp").
    pub protocol: String,
    /// Host part, including subdomains.
    pub domain: String,
    /// Path remainder, possibly empty.
    pub path: String,
}

impl UrlMatch {
    /// Reassemble the full URL from its captured parts.
    pub fn to_url(&self) -> String {
        format!("{}://{}{}", self.protocol, self.domain, self.path)
    }
}

/// Extract every URL from a block of markdown text.
///
/// Matches are non-overlapping, leftmost-first, in text order. No
/// deduplication: a URL cited twice is checked twice.
pub fn extract_urls(text: &str) -> Vec<UrlMatch> {
    URL_RE
        .captures_iter(text)
        .map(|caps| UrlMatch {
            protocol: caps[1].to_string(),
            domain: caps[2].to_string(),
            path: caps
                .get(3)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_a_simple_url() {
        let urls = extract_urls("See https://example.com/page for details.");

        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].protocol, "https");
        assert_eq!(urls[0].domain, "example.com");
        assert_eq!(urls[0].path, "/page");
        assert_eq!(urls[0].to_url(), "https://example.com/page");
    }

    #[test]
    fn extracts_two_urls_in_text_order() {
        let text = "Docs at https://docs.example.org/guide and data at \
                    http://data.example.org/set1.csv here.";
        let urls = extract_urls(text);

        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0].to_url(), "https://docs.example.org/guide");
        assert_eq!(urls[1].to_url(), "http://data.example.org/set1.csv");
    }

    #[test]
    fn trailing_period_is_not_part_of_the_url() {
        let urls = extract_urls("Visit https://example.com/page.");

        assert_eq!(urls[0].to_url(), "https://example.com/page");
    }

    #[test]
    fn bare_domain_has_empty_path() {
        let urls = extract_urls("Go to https://example.com now");

        assert_eq!(urls[0].domain, "example.com");
        assert_eq!(urls[0].path, "");
        assert_eq!(urls[0].to_url(), "https://example.com");
    }

    #[test]
    fn markdown_link_syntax_is_handled() {
        let urls = extract_urls("[Pyomo docs](https://pyomo.readthedocs.io/en/stable/)");

        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].to_url(), "https://pyomo.readthedocs.io/en/stable/");
    }

    #[test]
    fn ftp_scheme_is_matched() {
        let urls = extract_urls("Mirror: ftp://mirror.example.net/pub/data");

        assert_eq!(urls[0].protocol, "ftp");
    }

    #[test]
    fn duplicates_are_not_collapsed() {
        let text = "https://example.com/a then https://example.com/a again";
        let urls = extract_urls(text);

        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], urls[1]);
    }

    #[test]
    fn text_without_urls_yields_nothing() {
        assert!(extract_urls("no links here, just prose").is_empty());
        assert!(extract_urls("").is_empty());
    }

    #[test]
    fn query_strings_and_anchors_survive() {
        let urls = extract_urls("https://example.com/search?q=ipopt&page=2#results end");

        assert_eq!(
            urls[0].to_url(),
            "https://example.com/search?q=ipopt&page=2#results"
        );
    }

    #[test]
    fn domain_requires_at_least_one_dot() {
        // "localhost" has no dot; the regex intentionally skips it.
        assert!(extract_urls("http://localhost/page").is_empty());
    }
}
