//! Paper author entry

use serde::{Deserialize, Serialize};

/// One author row in the submission form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Author {
    pub name: String,
    pub email: String,
    pub affiliation: String,
}

impl Author {
    /// Create an author with every field filled in
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        affiliation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            affiliation: affiliation.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.email.trim().is_empty()
            && self.affiliation.trim().is_empty()
    }

    /// Review line, "Name - Affiliation", with placeholders for missing parts
    pub fn review_line(&self) -> String {
        let name = non_empty_or(&self.name, "Name not provided");
        let affiliation = non_empty_or(&self.affiliation, "Affiliation not provided");
        format!("{} - {}", name, affiliation)
    }

    /// Replace a single field
    pub fn set(&mut self, field: AuthorField, value: String) {
        match field {
            AuthorField::Name => self.name = value,
            AuthorField::Email => self.email = value,
            AuthorField::Affiliation => self.affiliation = value,
        }
    }

    pub fn get(&self, field: AuthorField) -> &str {
        match field {
            AuthorField::Name => &self.name,
            AuthorField::Email => &self.email,
            AuthorField::Affiliation => &self.affiliation,
        }
    }
}

/// Editable author field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum AuthorField {
    Name,
    Email,
    Affiliation,
}

impl AuthorField {
    pub const ALL: [AuthorField; 3] = [AuthorField::Name, AuthorField::Email, AuthorField::Affiliation];

    pub fn key(&self) -> &'static str {
        match self {
            AuthorField::Name => "name",
            AuthorField::Email => "email",
            AuthorField::Affiliation => "affiliation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthorField::Name => "Full Name",
            AuthorField::Email => "Email",
            AuthorField::Affiliation => "Affiliation",
        }
    }
}

pub(crate) fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_blank() {
        assert!(Author::default().is_blank());
        assert!(!Author::new("Ada Lovelace", "", "").is_blank());
    }

    #[test]
    fn test_set_and_get() {
        let mut author = Author::default();
        author.set(AuthorField::Email, "ada@example.org".to_string());
        assert_eq!(author.get(AuthorField::Email), "ada@example.org");
        assert_eq!(author.get(AuthorField::Name), "");
    }

    #[test]
    fn test_review_line() {
        let author = Author::new("Ada Lovelace", "ada@example.org", "Analytical Society");
        assert_eq!(author.review_line(), "Ada Lovelace - Analytical Society");
        assert_eq!(
            Author::default().review_line(),
            "Name not provided - Affiliation not provided"
        );
    }
}
