//! Schema-style validation for the pot and amount dialogs.
//!
//! Each form is described by a [`FormDescriptor`]: an ordered list of fields,
//! each carrying an ordered list of [`Rule`]s. Validation runs on every field
//! change; the first failing rule of a field supplies its message.
//! [`FormState`] tracks touched fields so errors only surface once the user
//! has interacted with a field or attempted a submit.

pub mod amount_form;
pub mod pot_form;
pub mod state;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

pub use amount_form::AmountForm;
pub use pot_form::PotForm;
pub use state::{FormFlow, FormState};

/// Field keys shared by the forms and the shell's `set` command.
pub mod fields {
    pub const NAME: &str = "name";
    pub const TARGET: &str = "target";
    pub const COLOR: &str = "color";
    pub const AMOUNT: &str = "amount";
}

/// Messages surfaced to the user.
pub mod messages {
    pub const NAME_REQUIRED: &str = "Name is required";
    pub const NAME_TOO_LONG: &str = "Too Long!";
    pub const TARGET_REQUIRED: &str = "Target is required";
    pub const NOT_A_NUMBER: &str = "Should be a number";
    pub const MORE_THAN_ZERO: &str = "Should be more than 0";
    pub const COLOR_REQUIRED: &str = "Color is required";
    pub const AMOUNT_OVER_TOTAL: &str = "Amount cannot be greater than current amount";
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Mapping from field key to the message of its first failing rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn retain(&mut self, keep: impl Fn(&str) -> bool) {
        self.0.retain(|field, _| keep(field));
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

type RuleCallback = dyn Fn(&str) -> Result<(), String> + Send + Sync;

/// A single check applied to a raw field value.
#[derive(Clone)]
pub enum Rule {
    /// Value must be non-blank.
    Required(&'static str),
    /// Trimmed value must not exceed the character count.
    MaxChars(usize, &'static str),
    /// Non-blank value must parse as a finite number.
    Number(&'static str),
    /// Numeric value must be strictly greater than zero.
    Positive(&'static str),
    /// Numeric value must be strictly less than the bound.
    LessThan(f64, &'static str),
    Custom(Arc<RuleCallback>),
}

impl Rule {
    pub fn custom(check: impl Fn(&str) -> Result<(), String> + Send + Sync + 'static) -> Self {
        Rule::Custom(Arc::new(check))
    }

    fn check(&self, raw: &str) -> Result<(), ValidationError> {
        let trimmed = raw.trim();
        match self {
            Rule::Required(message) => {
                if trimmed.is_empty() {
                    Err(ValidationError::new(*message))
                } else {
                    Ok(())
                }
            }
            Rule::MaxChars(max, message) => {
                if trimmed.chars().count() > *max {
                    Err(ValidationError::new(*message))
                } else {
                    Ok(())
                }
            }
            Rule::Number(message) => {
                if trimmed.is_empty() || parse_number(trimmed).is_some() {
                    Ok(())
                } else {
                    Err(ValidationError::new(*message))
                }
            }
            Rule::Positive(message) => match parse_number(trimmed) {
                Some(value) if value <= 0.0 => Err(ValidationError::new(*message)),
                _ => Ok(()),
            },
            Rule::LessThan(bound, message) => match parse_number(trimmed) {
                Some(value) if value >= *bound => Err(ValidationError::new(*message)),
                _ => Ok(()),
            },
            Rule::Custom(check) => check(raw).map_err(ValidationError::new),
        }
    }
}

/// Parses a user-entered amount. A leading `$` and grouping commas are accepted.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',')
        .collect();
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Declarative description of a single form field.
#[derive(Clone)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub rules: Vec<Rule>,
}

impl FieldDescriptor {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the message of the first failing rule.
    pub fn validate(&self, raw: &str) -> Result<(), ValidationError> {
        self.rules.iter().try_for_each(|rule| rule.check(raw))
    }
}

/// Metadata describing a full form, including field order.
#[derive(Clone)]
pub struct FormDescriptor {
    pub name: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl FormDescriptor {
    pub fn new(name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self { name, fields }
    }

    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Validates every field; missing values are treated as blank.
    pub fn validate(&self, values: &BTreeMap<String, String>) -> FormErrors {
        let mut errors = FormErrors::new();
        for field in &self.fields {
            let raw = values.get(field.key).map(String::as_str).unwrap_or("");
            if let Err(err) = field.validate(raw) {
                errors.insert(field.key, err.message);
            }
        }
        errors
    }
}
