use std::sync::OnceLock;

use regex::Regex;

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern should compile"))
}

/// Every non-overlapping email-like substring of `text`, left to right.
///
/// The pattern favors recall: it accepts anything shaped like
/// `local@domain.tld` with a two-letter-or-longer alphabetic suffix.
pub fn find_emails(text: &str) -> Vec<&str> {
    email_regex().find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_matches() {
        assert!(find_emails("").is_empty());
        assert!(find_emails("   ").is_empty());
    }

    #[test]
    fn finds_every_address_in_order() {
        let text = "Contact: alice@example.com, bob.smith+tag@mail.co.uk; carol%x@host-1.io";

        assert_eq!(
            find_emails(text),
            vec![
                "alice@example.com",
                "bob.smith+tag@mail.co.uk",
                "carol%x@host-1.io"
            ]
        );
    }

    #[test]
    fn keeps_original_case() {
        assert_eq!(find_emails("Foo@Bar.COM"), vec!["Foo@Bar.COM"]);
    }

    #[test]
    fn rejects_short_or_numeric_suffix() {
        assert!(find_emails("a@b.c").is_empty());
        assert!(find_emails("user@host.123").is_empty());
        assert!(find_emails("no at sign.com").is_empty());
        assert!(find_emails("@example.com").is_empty());
    }

    #[test]
    fn backtracks_into_domain_for_suffix() {
        // The domain class swallows dots, the suffix must still be found.
        assert_eq!(find_emails("x@a.b.cd."), vec!["x@a.b.cd"]);
        assert_eq!(find_emails("x@a.bc1"), vec!["x@a.bc"]);
    }

    #[test]
    fn non_ascii_letters_break_the_match() {
        assert_eq!(find_emails("jörg@example.de"), vec!["rg@example.de"]);
        assert!(find_emails("user@exämple.de").is_empty());
    }
}
