use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, NamedEntity};
use crate::domain::palette;

/// Longest pot name accepted by the create/edit forms.
pub const NAME_MAX_CHARS: usize = 30;

/// A named savings goal.
///
/// The fixture format carries no identifier, so one is minted on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pot {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub target: f64,
    pub total: f64,
    pub theme: String,
}

impl Pot {
    /// Creates an empty pot from validated input.
    pub fn new(input: PotInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            target: input.target,
            total: 0.0,
            theme: input.theme,
        }
    }

    /// Overwrites the editable fields, keeping the saved amount.
    pub fn apply(&mut self, input: PotInput) {
        self.name = input.name;
        self.target = input.target;
        self.theme = input.theme;
    }

    /// Human name of the pot's theme colour, falling back to the raw code.
    pub fn theme_name(&self) -> &str {
        palette::lookup(&self.theme)
            .map(|entry| entry.name)
            .unwrap_or(self.theme.as_str())
    }
}

impl NamedEntity for Pot {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Pot {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.theme_name())
    }
}

/// Validated payload produced by the create/edit pot form.
#[derive(Debug, Clone, PartialEq)]
pub struct PotInput {
    pub name: String,
    pub target: f64,
    pub theme: String,
}

impl PotInput {
    pub fn new(name: impl Into<String>, target: f64, theme: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target,
            theme: theme.into(),
        }
    }
}
