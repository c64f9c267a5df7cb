use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

/// Pattern for `local-part@domain` tokens found in commit payloads
const EMAIL_PATTERN: &str = r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+";

/// Suffixes of addresses GitHub uses to mask real emails
const PLACEHOLDER_SUFFIXES: [&str; 4] = [
    "@github.com",
    "@users.noreply.github.com",
    "@nowhere.local",
    "@nowhere.com",
];

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Returns every email-shaped substring of `text` in order of appearance
///
/// Duplicates are kept. Anything that looks like `local@domain.tld` matches,
/// so the result may contain tokens that are not real addresses.
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}

/// Checks whether an address belongs to a placeholder domain
///
/// Comparison is case-sensitive, so `a@GitHub.com` is not a placeholder.
pub fn is_placeholder(email: &str) -> bool {
    PLACEHOLDER_SUFFIXES
        .iter()
        .any(|suffix| email.ends_with(suffix))
}

/// Drops placeholder addresses and deduplicates the rest
///
/// # Arguments
/// * `emails` - Candidate addresses, usually the output of [`extract_emails`]
pub fn filter_emails<I, S>(emails: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    emails
        .into_iter()
        .map(Into::into)
        .filter(|email| !is_placeholder(email))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const COMMITS_BODY: &str = r#"[
      {"commit": {"author": {"name": "Alice", "email": "alice@example.com"},
                  "committer": {"name": "GitHub", "email": "noreply@github.com"}}},
      {"commit": {"author": {"name": "Alice", "email": "alice@example.com"},
                  "committer": {"name": "Bob", "email": "bob.smith+dev@mail.example.org"}}},
      {"commit": {"author": {"name": "Bot", "email": "12345+bot@users.noreply.github.com"}}}
    ]"#;

    #[test]
    fn test_extract_keeps_duplicates_in_order() {
        let found = extract_emails(COMMITS_BODY);
        assert_eq!(
            found,
            vec![
                "alice@example.com",
                "noreply@github.com",
                "alice@example.com",
                "bob.smith+dev@mail.example.org",
                "12345+bot@users.noreply.github.com",
            ]
        );
    }

    #[test]
    fn test_extract_no_matches() {
        assert!(extract_emails("no addresses here, just @ signs and dots.").is_empty());
        assert!(extract_emails("").is_empty());
    }

    #[test]
    fn test_extract_requires_dot_in_domain() {
        assert!(extract_emails("root@localhost").is_empty());
        assert_eq!(extract_emails("x root@my-host.lan y"), vec!["root@my-host.lan"]);
    }

    #[test]
    fn test_filter_example() {
        let filtered = filter_emails([
            "a@github.com",
            "b@users.noreply.github.com",
            "c@example.com",
            "c@example.com",
        ]);
        assert_eq!(filtered, HashSet::from(["c@example.com".to_string()]));
    }

    #[test]
    fn test_filter_all_placeholder_domains() {
        let filtered = filter_emails(["x@nowhere.local", "y@nowhere.com", "z@github.com"]);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let filtered = filter_emails(["dev@GitHub.com"]);
        assert!(filtered.contains("dev@GitHub.com"));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_emails(extract_emails(COMMITS_BODY));
        let twice = filter_emails(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filtered_extraction_has_no_placeholders() {
        let filtered = filter_emails(extract_emails(COMMITS_BODY));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|email| !is_placeholder(email)));
        assert!(filtered.contains("alice@example.com"));
        assert!(filtered.contains("bob.smith+dev@mail.example.org"));
    }
}
