//! Percentage and preview arithmetic behind the progress bars.

use crate::domain::Pot;

/// Uncapped share of `target` reached by `total`, in percent.
pub fn percentage(total: f64, target: f64) -> f64 {
    if target <= 0.0 || !target.is_finite() {
        return 0.0;
    }
    total / target * 100.0
}

/// Constrains a percentage to `[0, 100]`; NaN collapses to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Bar width for `total` against `target`.
pub fn clamped_percentage(total: f64, target: f64) -> f64 {
    clamp_percent(percentage(total, target))
}

/// Label and bar values for one pot, computed once.
///
/// `percent` is the uncapped value shown as text; `bar_percent` is the
/// clamped value used for widths and never exceeds 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub percent: f64,
    pub bar_percent: f64,
}

impl Progress {
    pub fn of(total: f64, target: f64) -> Self {
        let percent = percentage(total, target);
        Self {
            percent,
            bar_percent: clamp_percent(percent),
        }
    }

    pub fn for_pot(pot: &Pot) -> Self {
        Self::of(pot.total, pot.target)
    }
}

/// Direction of a balance adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentKind {
    Deposit,
    Withdraw,
}

impl AdjustmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            AdjustmentKind::Deposit => "Add",
            AdjustmentKind::Withdraw => "Withdraw",
        }
    }
}

/// Live preview rendered inside the add/withdraw dialogs.
///
/// The bar is split into a `base` segment and a `change` segment: for a
/// deposit the change is the newly added share, for a withdrawal it is the
/// share being removed. Both segments are clamped so their sum stays within
/// `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentPreview {
    pub kind: AdjustmentKind,
    pub amount: f64,
    pub new_total: f64,
    pub base_bar_percent: f64,
    pub change_bar_percent: f64,
    pub new_percent: f64,
}

/// Computes the preview for `amount`. Non-positive or non-finite amounts
/// preview as no change; withdrawals never go below zero.
pub fn preview(kind: AdjustmentKind, total: f64, target: f64, amount: f64) -> AdjustmentPreview {
    let amount = if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    };
    let current_bar = clamped_percentage(total, target);

    match kind {
        AdjustmentKind::Deposit => {
            let new_total = total + amount;
            let new_percent = percentage(new_total, target);
            AdjustmentPreview {
                kind,
                amount,
                new_total,
                base_bar_percent: current_bar,
                change_bar_percent: (clamp_percent(new_percent) - current_bar).max(0.0),
                new_percent,
            }
        }
        AdjustmentKind::Withdraw => {
            let applied = amount.min(total.max(0.0));
            let new_total = total - applied;
            let new_percent = percentage(new_total, target);
            let base = clamp_percent(new_percent);
            AdjustmentPreview {
                kind,
                amount,
                new_total,
                base_bar_percent: base,
                change_bar_percent: (current_bar - base).max(0.0),
                new_percent,
            }
        }
    }
}
