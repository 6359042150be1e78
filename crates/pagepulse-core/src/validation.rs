//! Form field validation

use std::sync::OnceLock;

use regex::Regex;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    pub fn required(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
            required: true,
        }
    }
}

/// Check required fields; returns the names of the invalid ones
///
/// A required field is invalid when blank, and a required email field also
/// when it does not look like an address.
pub fn validate_form(fields: &[FormField]) -> Vec<String> {
    fields
        .iter()
        .filter(|f| f.required)
        .filter(|f| {
            let blank = f.value.trim().is_empty();
            blank || (f.kind == FieldKind::Email && !validate_email(&f.value))
        })
        .map(|f| f.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jane@example.org"));
        assert!(validate_email("a.b+c@mail.example.co"));
        assert!(!validate_email("jane@example"));
        assert!(!validate_email("jane example@x.org"));
        assert!(!validate_email("@example.org"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_validate_form() {
        let fields = vec![
            FormField::required("fullName", FieldKind::Text, "Jane"),
            FormField::required("email", FieldKind::Email, "nope"),
            FormField::required("phone", FieldKind::Tel, "   "),
            FormField {
                name: "notes".to_string(),
                value: String::new(),
                kind: FieldKind::Text,
                required: false,
            },
        ];
        assert_eq!(validate_form(&fields), vec!["email", "phone"]);
    }
}
