//! Static dashboard document loaded once at startup.

use std::{fs, path::Path};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::errors::Result;
use crate::domain::pot::Pot;

const BUNDLED_FIXTURE: &str = include_str!("../../data/data.json");

/// Root of the fixture document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub balance: Balance,
    #[serde(default)]
    pub pots: Vec<Pot>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub recurring_bills: RecurringBills,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    pub current: f64,
    pub income: f64,
    pub expenses: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(default)]
    pub avatar: String,
    pub name: String,
    pub category: String,
    pub date: DateTime<Utc>,
    pub amount: f64,
    #[serde(default)]
    pub recurring: bool,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub category: String,
    pub maximum: f64,
    pub theme: String,
}

/// Recurring-bill tiles on the overview.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringBills {
    pub paid: f64,
    pub total_upcoming: f64,
    pub due_soon: f64,
}

impl Default for RecurringBills {
    fn default() -> Self {
        Self {
            paid: 190.00,
            total_upcoming: 194.98,
            due_soon: 59.98,
        }
    }
}

impl DashboardData {
    /// Parses the fixture compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_FIXTURE)
    }

    /// Loads a fixture document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let parsed = Self::from_json(&data)?;
        tracing::info!(path = %path.display(), pots = parsed.pots.len(), "Loaded fixture");
        Ok(parsed)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads `path` when given, otherwise the bundled fixture.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }
}
