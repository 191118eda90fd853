//! Field rules and form state shared by the login, register and review forms.

use std::collections::HashMap;

use leptos::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    Required(&'static str),
    MinLength(usize, &'static str),
    Range { min: i64, max: i64, message: &'static str },
}

/// Returns the message of the first rule `value` breaks.
pub fn validate(value: &str, rules: &[Rule]) -> Option<&'static str> {
    let trimmed = value.trim();
    rules.iter().find_map(|rule| match rule {
        Rule::Required(message) if trimmed.is_empty() => Some(*message),
        Rule::MinLength(len, message) if !trimmed.is_empty() && trimmed.chars().count() < *len => {
            Some(*message)
        }
        Rule::Range { min, max, message } => match trimmed.parse::<i64>() {
            Ok(n) if (*min..=*max).contains(&n) => None,
            _ if trimmed.is_empty() => None,
            _ => Some(*message),
        },
        _ => None,
    })
}

/// Password policy applied after the required checks on the register form.
pub fn check_new_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password != confirm {
        return Err("Password & Confirm Password do not match");
    }
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    if password.chars().count() < 6 || !has_upper || !has_lower {
        return Err("Password must be at least 6 characters and include uppercase & lowercase letters");
    }
    Ok(())
}

pub mod fields {
    use super::Rule;

    pub const EMAIL: &[Rule] = &[Rule::Required("Email is required")];
    pub const PASSWORD: &[Rule] = &[Rule::Required("Password is required")];
    pub const NAME: &[Rule] = &[Rule::Required("Name is required")];
    pub const PHOTO_URL: &[Rule] = &[Rule::Required("Photo URL is required")];
    pub const CONFIRM_PASSWORD: &[Rule] = &[Rule::Required("Please confirm your password")];

    pub const FOOD_NAME: &[Rule] = &[Rule::Required("Food name is required")];
    pub const FOOD_IMAGE: &[Rule] = &[Rule::Required("Food image URL is required")];
    pub const RESTAURANT_NAME: &[Rule] = &[Rule::Required("Restaurant name is required")];
    pub const LOCATION: &[Rule] = &[Rule::Required("Location is required")];
    pub const RATING: &[Rule] = &[
        Rule::Required("Rating is required"),
        Rule::Range { min: 1, max: 5, message: "Rating must be between 1 and 5" },
    ];
    pub const REVIEW_TEXT: &[Rule] = &[
        Rule::Required("Review text is required"),
        Rule::MinLength(10, "Review should be at least 10 characters long"),
    ];
}

/// Values and errors of one form. Copy, so handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct FormState {
    values: RwSignal<HashMap<&'static str, String>>,
    errors: RwSignal<HashMap<&'static str, &'static str>>,
    rules: StoredValue<Vec<(&'static str, &'static [Rule])>>,
}

impl FormState {
    pub fn new(rules: Vec<(&'static str, &'static [Rule])>) -> Self {
        Self {
            values: create_rw_signal(HashMap::new()),
            errors: create_rw_signal(HashMap::new()),
            rules: store_value(rules),
        }
    }

    pub fn value(&self, field: &'static str) -> String {
        self.values.with(|v| v.get(field).cloned().unwrap_or_default())
    }

    pub fn value_untracked(&self, field: &'static str) -> String {
        self.values
            .with_untracked(|v| v.get(field).cloned().unwrap_or_default())
    }

    pub fn set(&self, field: &'static str, value: String) {
        self.values.update(|v| {
            v.insert(field, value);
        });
    }

    /// Sets a value and re-checks that field if it already shows an error.
    pub fn set_validated(&self, field: &'static str, value: String) {
        self.set(field, value);
        if self.errors.with_untracked(|e| e.contains_key(field)) {
            self.validate_field(field);
        }
    }

    pub fn error(&self, field: &'static str) -> Option<&'static str> {
        self.errors.with(|e| e.get(field).copied())
    }

    pub fn validate_field(&self, field: &'static str) -> bool {
        let failure = self.rules.with_value(|rules| {
            rules
                .iter()
                .find(|(name, _)| *name == field)
                .and_then(|(_, rules)| validate(&self.value_untracked(field), rules))
        });
        self.errors.update(|e| match failure {
            Some(message) => {
                e.insert(field, message);
            }
            None => {
                e.remove(field);
            }
        });
        failure.is_none()
    }

    /// Checks every field; returns whether the form may be submitted.
    pub fn validate_all(&self) -> bool {
        let names: Vec<&'static str> = self.rules.with_value(|r| r.iter().map(|(n, _)| *n).collect());
        names
            .into_iter()
            .fold(true, |ok, name| self.validate_field(name) && ok)
    }

    pub fn reset(&self, values: &[(&'static str, String)]) {
        self.values.set(values.iter().cloned().collect());
        self.errors.set(HashMap::new());
    }
}
