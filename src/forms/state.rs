use std::collections::{BTreeMap, BTreeSet};

use crate::core::errors::{DashboardError, Result};

use super::{FormDescriptor, FormErrors};

/// Values, touched set and current errors for one open form.
///
/// Errors are recomputed after every change. [`FormState::visible_errors`]
/// hides errors of untouched fields until a submit has been attempted.
#[derive(Clone)]
pub struct FormState {
    descriptor: FormDescriptor,
    defaults: BTreeMap<String, String>,
    values: BTreeMap<String, String>,
    touched: BTreeSet<String>,
    submitted: bool,
    errors: FormErrors,
}

impl FormState {
    pub fn new(descriptor: FormDescriptor, defaults: BTreeMap<String, String>) -> Self {
        let errors = descriptor.validate(&defaults);
        Self {
            descriptor,
            values: defaults.clone(),
            defaults,
            touched: BTreeSet::new(),
            submitted: false,
            errors,
        }
    }

    pub fn descriptor(&self) -> &FormDescriptor {
        &self.descriptor
    }

    /// Stores a raw value, marks the field touched and revalidates.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let field = self.descriptor.field(key).ok_or_else(|| {
            DashboardError::InvalidInput(format!(
                "unknown field `{key}` for the {} form",
                self.descriptor.name
            ))
        })?;
        let key = field.key;
        self.values.insert(key.to_string(), value.into());
        self.touched.insert(key.to_string());
        self.revalidate();
        Ok(())
    }

    /// Marks a field as interacted with without changing its value.
    pub fn touch(&mut self, key: &str) {
        if self.descriptor.field(key).is_some() {
            self.touched.insert(key.to_string());
        }
    }

    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn is_touched(&self, key: &str) -> bool {
        self.touched.contains(key)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// True while nothing differs from the defaults and no field was touched.
    pub fn is_pristine(&self) -> bool {
        self.touched.is_empty() && !self.submitted && self.values == self.defaults
    }

    /// All current errors, whether or not they are shown yet.
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Errors the user should see right now.
    pub fn visible_errors(&self) -> FormErrors {
        if self.submitted {
            return self.errors.clone();
        }
        let mut visible = self.errors.clone();
        visible.retain(|field| self.touched.contains(field));
        visible
    }

    pub fn visible_error(&self, key: &str) -> Option<&str> {
        if self.submitted || self.touched.contains(key) {
            self.errors.get(key)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records a submit attempt. Returns the values when every field passes.
    pub fn attempt_submit(&mut self) -> std::result::Result<&BTreeMap<String, String>, FormErrors> {
        self.submitted = true;
        self.revalidate();
        if self.errors.is_empty() {
            Ok(&self.values)
        } else {
            Err(self.errors.clone())
        }
    }

    /// Discards input and returns to the defaults.
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.touched.clear();
        self.submitted = false;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = self.descriptor.validate(&self.values);
    }
}

/// Contract shared by the typed forms: expose a [`FormState`] and turn a
/// validated value map into the form's payload.
pub trait FormFlow {
    type Output;

    fn state(&self) -> &FormState;

    fn state_mut(&mut self) -> &mut FormState;

    /// Builds the payload from values that passed validation.
    fn commit(&self, values: &BTreeMap<String, String>) -> std::result::Result<Self::Output, FormErrors>;

    /// Validates, builds the payload and resets the form on success. On
    /// failure the form keeps its input and every error becomes visible.
    fn submit(&mut self) -> std::result::Result<Self::Output, FormErrors> {
        let values = self.state_mut().attempt_submit()?.clone();
        let output = self.commit(&values)?;
        self.state_mut().reset();
        Ok(output)
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        self.state_mut().set_field(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{fields, messages, FieldDescriptor, Rule};

    fn state() -> FormState {
        let descriptor = FormDescriptor::new(
            "sample",
            vec![
                FieldDescriptor::new(fields::NAME, "Name")
                    .rule(Rule::Required(messages::NAME_REQUIRED)),
                FieldDescriptor::new(fields::TARGET, "Target")
                    .rule(Rule::Required(messages::TARGET_REQUIRED)),
            ],
        );
        FormState::new(descriptor, BTreeMap::new())
    }

    #[test]
    fn errors_hidden_until_touched() {
        let mut form = state();
        assert_eq!(form.errors().len(), 2);
        assert!(form.visible_errors().is_empty());
        assert!(form.is_pristine());

        form.set_field(fields::NAME, "").unwrap();
        let visible = form.visible_errors();
        assert_eq!(visible.get(fields::NAME), Some(messages::NAME_REQUIRED));
        assert!(!visible.contains(fields::TARGET));
        assert_eq!(form.visible_error(fields::TARGET), None);
    }

    #[test]
    fn touch_reveals_without_changing_value() {
        let mut form = state();
        form.touch(fields::TARGET);
        assert_eq!(form.value(fields::TARGET), "");
        assert_eq!(
            form.visible_error(fields::TARGET),
            Some(messages::TARGET_REQUIRED)
        );
    }

    #[test]
    fn failed_submit_shows_everything() {
        let mut form = state();
        form.set_field(fields::NAME, "Trip").unwrap();
        let errors = form.attempt_submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(form.is_submitted());
        assert_eq!(
            form.visible_error(fields::TARGET),
            Some(messages::TARGET_REQUIRED)
        );
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = state();
        form.set_field(fields::NAME, "Trip").unwrap();
        form.reset();
        assert!(form.is_pristine());
        assert_eq!(form.value(fields::NAME), "");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut form = state();
        let err = form.set_field("colour", "#fff").unwrap_err();
        assert!(err.to_string().contains("unknown field `colour`"));
    }
}
