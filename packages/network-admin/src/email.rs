//! Email address syntax check.
//!
//! Mirrors the rules WordPress applies in `is_email`, so an address accepted here
//! is one the platform would also accept. No DNS or deliverability checks.

use lazy_static::lazy_static;
use regex::Regex;

const MIN_LENGTH: usize = 6;

lazy_static! {
    static ref LOCAL_PART_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~.-]+$").unwrap();

    static ref CONSECUTIVE_DOTS_REGEX: Regex = Regex::new(r"\.{2,}").unwrap();

    static ref DOMAIN_LABEL_REGEX: Regex = Regex::new(r"(?i)^[a-z0-9-]+$").unwrap();
}

/// Characters PHP's `trim` strips by default.
const PHP_WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Whether `email` is a syntactically valid address.
pub fn is_email(email: &str) -> bool {
    if email.len() < MIN_LENGTH {
        return false;
    }

    // The '@' may not be the first character
    let at = match email.char_indices().skip(1).find(|&(_, c)| c == '@') {
        Some((i, _)) => i,
        None => return false,
    };
    let (local, domain) = (&email[..at], &email[at + 1..]);

    if !LOCAL_PART_REGEX.is_match(local) {
        return false;
    }

    if CONSECUTIVE_DOTS_REGEX.is_match(domain) {
        return false;
    }

    if domain.trim_matches(|c: char| c == '.' || PHP_WHITESPACE.contains(&c)) != domain {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    labels.iter().all(|label| {
        label.trim_matches(|c: char| c == '-' || PHP_WHITESPACE.contains(&c)) == *label
            && DOMAIN_LABEL_REGEX.is_match(label)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        assert!(is_email("jane@example.com"));
        assert!(is_email("john.doe+wp@mail.example.co.uk"));
        assert!(is_email("o'brien@example.ie"));
        assert!(is_email("UPPER@EXAMPLE.COM"));
        assert!(is_email("a@b.co"));
    }

    #[test]
    fn test_rejects_short_addresses() {
        assert!(!is_email("a@b.c"));
        assert!(!is_email(""));
    }

    #[test]
    fn test_rejects_missing_or_leading_at() {
        assert!(!is_email("jane.example.com"));
        assert!(!is_email("@example.com"));
    }

    #[test]
    fn test_rejects_bad_local_part() {
        assert!(!is_email("jane doe@example.com"));
        assert!(!is_email("jane(doe)@example.com"));
        assert!(!is_email("jäne@example.com"));
    }

    #[test]
    fn test_rejects_bad_domain() {
        assert!(!is_email("jane@example..com"));
        assert!(!is_email("jane@.example.com"));
        assert!(!is_email("jane@example.com."));
        assert!(!is_email("jane@localhost"));
        assert!(!is_email("jane@-example.com"));
        assert!(!is_email("jane@example-.com"));
        assert!(!is_email("jane@exa_mple.com"));
        assert!(!is_email("jane@example.com "));
    }

    #[test]
    fn test_second_at_lands_in_domain() {
        assert!(!is_email("jane@doe@example.com"));
    }
}
