//! Field validation rules.
//!
//! The rule table is an explicit, immutable structure keyed by field role.
//! The controller in `form` classifies each field from its `id` and `type`
//! attributes and passes a [`FieldInput`] snapshot in, so everything here is
//! pure and runs in host tests without a DOM.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

pub const MSG_REQUIRED: &str = "Dieses Feld ist erforderlich";
pub const MSG_CONSENT: &str = "Bitte akzeptieren Sie die Datenschutzerklärung";
pub const MSG_NAME: &str =
    "Bitte geben Sie einen gültigen Namen ein (2-50 Zeichen, nur Buchstaben)";
pub const MSG_EMAIL: &str = "Bitte geben Sie eine gültige E-Mail-Adresse ein";
pub const MSG_PHONE: &str =
    "Bitte geben Sie eine gültige Telefonnummer ein (10-20 Zeichen)";
pub const MSG_MESSAGE: &str = "Die Nachricht muss mindestens 10 Zeichen lang sein";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    Name,
    Email,
    Phone,
    Message,
    Consent,
}

/// What a field looked like at validation time.
#[derive(Debug, Clone, Default)]
pub struct FieldInput {
    pub role: Option<FieldRole>,
    pub value: String,
    pub checked: bool,
    pub required: bool,
}

struct Rule {
    pattern: Option<Regex>,
    min_len: Option<usize>,
    /// Phone and message are only checked once the user typed something.
    skip_when_empty: bool,
    message: &'static str,
}

pub struct RuleSet {
    rules: HashMap<FieldRole, Rule>,
}

static BUILTIN: Lazy<RuleSet> = Lazy::new(|| {
    let mut rules = HashMap::new();
    rules.insert(
        FieldRole::Name,
        Rule {
            pattern: Some(Regex::new(r"^[a-zA-ZÀ-ÿ\s'-]{2,50}$").unwrap()),
            min_len: None,
            skip_when_empty: false,
            message: MSG_NAME,
        },
    );
    rules.insert(
        FieldRole::Email,
        Rule {
            pattern: Some(Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()),
            min_len: None,
            skip_when_empty: false,
            message: MSG_EMAIL,
        },
    );
    rules.insert(
        FieldRole::Phone,
        Rule {
            // [0-9] rather than \d: the regex crate's \d is Unicode-aware,
            // the original check only ever accepted ASCII digits
            pattern: Some(Regex::new(r"^[0-9\s+\-()]{10,20}$").unwrap()),
            min_len: None,
            skip_when_empty: true,
            message: MSG_PHONE,
        },
    );
    rules.insert(
        FieldRole::Message,
        Rule {
            pattern: None,
            min_len: Some(10),
            skip_when_empty: true,
            message: MSG_MESSAGE,
        },
    );
    RuleSet { rules }
});

impl RuleSet {
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN
    }

    /// Validates one field. First failure wins: required-check, then the
    /// role-specific pattern or length rule.
    ///
    /// Two quirks carried over from the shipped site: name and email rules run
    /// even for empty optional fields, and an unchecked required checkbox is
    /// caught by the consent rule rather than the generic required message.
    pub fn check(&self, input: &FieldInput) -> Result<(), &'static str> {
        if input.role == Some(FieldRole::Consent) {
            if input.required && !input.checked {
                return Err(MSG_CONSENT);
            }
            return Ok(());
        }

        let trimmed = input.value.trim();
        if input.required && trimmed.is_empty() {
            return Err(MSG_REQUIRED);
        }

        let Some(role) = input.role else {
            return Ok(());
        };
        let Some(rule) = self.rules.get(&role) else {
            return Ok(());
        };
        if rule.skip_when_empty && trimmed.is_empty() {
            return Ok(());
        }
        if let Some(pattern) = &rule.pattern {
            if !pattern.is_match(&input.value) {
                return Err(rule.message);
            }
        }
        if let Some(min_len) = rule.min_len {
            // UTF-16 units, the length a browser reports for a string value
            if trimmed.encode_utf16().count() < min_len {
                return Err(rule.message);
            }
        }
        Ok(())
    }
}

/// Maps a field's `id` and `type` attribute to its validation role.
/// Precedence follows the shipped site: checkbox, name ids, email, tel,
/// message id.
pub fn classify(id: &str, input_type: &str) -> Option<FieldRole> {
    if input_type == "checkbox" {
        Some(FieldRole::Consent)
    } else if id == "firstName" || id == "lastName" {
        Some(FieldRole::Name)
    } else if input_type == "email" {
        Some(FieldRole::Email)
    } else if input_type == "tel" {
        Some(FieldRole::Phone)
    } else if id == "message" {
        Some(FieldRole::Message)
    } else {
        None
    }
}

/// Minimal HTML escaping applied to collected form values, equivalent to
/// writing the value through a text node and reading back `innerHTML`.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
