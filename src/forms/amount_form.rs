use std::collections::BTreeMap;

use crate::core::progress::{self, AdjustmentKind, AdjustmentPreview};

use super::{
    fields, messages, parse_number, FieldDescriptor, FormDescriptor, FormErrors, FormFlow,
    FormState, Rule,
};

/// Single-field form behind the deposit and withdraw dialogs.
#[derive(Clone)]
pub struct AmountForm {
    state: FormState,
    kind: AdjustmentKind,
    current_total: f64,
    target: f64,
}

impl AmountForm {
    pub fn deposit(current_total: f64, target: f64) -> Self {
        Self::new(AdjustmentKind::Deposit, current_total, target)
    }

    /// Withdrawals must stay strictly below the pot's current total.
    pub fn withdraw(current_total: f64, target: f64) -> Self {
        Self::new(AdjustmentKind::Withdraw, current_total, target)
    }

    fn new(kind: AdjustmentKind, current_total: f64, target: f64) -> Self {
        let mut amount = FieldDescriptor::new(fields::AMOUNT, "Amount")
            .rule(Rule::Required(messages::TARGET_REQUIRED))
            .rule(Rule::Number(messages::NOT_A_NUMBER))
            .rule(Rule::Positive(messages::MORE_THAN_ZERO));
        if kind == AdjustmentKind::Withdraw {
            amount = amount.rule(Rule::LessThan(current_total, messages::AMOUNT_OVER_TOTAL));
        }
        let descriptor = FormDescriptor::new(kind.label(), vec![amount]);
        Self {
            state: FormState::new(descriptor, BTreeMap::new()),
            kind,
            current_total,
            target,
        }
    }

    pub fn kind(&self) -> AdjustmentKind {
        self.kind
    }

    pub fn current_total(&self) -> f64 {
        self.current_total
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Parsed amount when the field currently holds a positive number.
    pub fn amount(&self) -> Option<f64> {
        parse_number(self.state.value(fields::AMOUNT)).filter(|value| *value > 0.0)
    }

    /// Live preview of the pot after this adjustment. Invalid input previews
    /// as an adjustment of zero.
    pub fn preview(&self) -> AdjustmentPreview {
        progress::preview(
            self.kind,
            self.current_total,
            self.target,
            self.amount().unwrap_or(0.0),
        )
    }
}

impl FormFlow for AmountForm {
    type Output = f64;

    fn state(&self) -> &FormState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    fn commit(&self, values: &BTreeMap<String, String>) -> Result<f64, FormErrors> {
        let raw = values.get(fields::AMOUNT).map(String::as_str).unwrap_or("");
        parse_number(raw).ok_or_else(|| {
            let mut errors = FormErrors::new();
            errors.insert(fields::AMOUNT, messages::NOT_A_NUMBER);
            errors
        })
    }
}
