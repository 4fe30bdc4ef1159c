use std::collections::BTreeSet;

/// An extracted address, always stored trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn normalized(raw: &str) -> Self {
        EmailAddress(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unique addresses of one extraction run.
///
/// Iteration is always in ascending ordinal order of the stored strings, so
/// display and export never depend on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailCollection {
    entries: BTreeSet<EmailAddress>,
}

impl EmailCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the address was not present yet.
    pub fn insert(&mut self, raw: &str) -> bool {
        self.entries.insert(EmailAddress::normalized(raw))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub fn contains(&self, raw: &str) -> bool {
        self.entries.contains(&EmailAddress::normalized(raw))
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmailAddress> {
        self.entries.iter()
    }

    pub fn sorted(&self) -> Vec<String> {
        self.iter().map(|email| email.as_str().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_folds_case_and_whitespace() {
        let mut emails = EmailCollection::new();

        assert!(emails.insert("Foo@Bar.COM"));
        assert!(!emails.insert("  foo@bar.com "));

        assert_eq!(emails.len(), 1);
        assert!(emails.contains("FOO@bar.com"));
        assert_eq!(emails.sorted(), vec!["foo@bar.com".to_string()]);
    }

    #[test]
    fn sorted_uses_ordinal_order() {
        let mut emails = EmailCollection::new();
        emails.insert("zed@x.com");
        emails.insert("a.b@x.com");
        emails.insert("a-b@x.com");
        emails.insert("_x@x.com");

        assert_eq!(
            emails.sorted(),
            vec![
                "_x@x.com".to_string(),
                "a-b@x.com".to_string(),
                "a.b@x.com".to_string(),
                "zed@x.com".to_string(),
            ]
        );
    }
}
