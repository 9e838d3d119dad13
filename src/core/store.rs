//! In-memory collection of pots keyed by stable identifier.

use std::collections::HashMap;

use uuid::Uuid;

use crate::core::errors::{DashboardError, Result};
use crate::domain::{palette, Pot, PotInput};

/// Owns every pot plus the display order.
///
/// Dialogs and commands refer to pots by id, so removing one pot never
/// re-targets an operation at its neighbour.
#[derive(Debug, Clone, Default)]
pub struct PotStore {
    pots: HashMap<Uuid, Pot>,
    order: Vec<Uuid>,
}

impl PotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from fixture records, keeping their order.
    pub fn from_pots(pots: impl IntoIterator<Item = Pot>) -> Self {
        let mut store = Self::new();
        for pot in pots {
            store.insert(pot);
        }
        store
    }

    fn insert(&mut self, pot: Pot) -> Uuid {
        let id = pot.id;
        if self.pots.insert(id, pot).is_none() {
            self.order.push(id);
        }
        id
    }

    /// Appends a new pot with nothing saved yet.
    pub fn create(&mut self, input: PotInput) -> Uuid {
        let pot = Pot::new(input);
        tracing::info!(id = %pot.id, name = %pot.name, target = pot.target, "Created pot");
        self.insert(pot)
    }

    /// Replaces name, target and theme, preserving the saved total.
    pub fn update(&mut self, id: Uuid, input: PotInput) -> Result<()> {
        let pot = self.pots.get_mut(&id).ok_or(DashboardError::PotNotFound(id))?;
        pot.apply(input);
        tracing::info!(id = %id, name = %pot.name, target = pot.target, "Updated pot");
        Ok(())
    }

    /// Removes a pot; later pots move up one display position.
    pub fn remove(&mut self, id: Uuid) -> Result<Pot> {
        let pot = self.pots.remove(&id).ok_or(DashboardError::PotNotFound(id))?;
        self.order.retain(|candidate| *candidate != id);
        tracing::info!(id = %id, name = %pot.name, "Removed pot");
        Ok(pot)
    }

    /// Adds `amount` to the pot. The total may exceed the target.
    pub fn deposit(&mut self, id: Uuid, amount: f64) -> Result<f64> {
        if !(amount.is_finite() && amount > 0.0) {
            return Err(DashboardError::InvalidAmount(format!(
                "deposit must be more than 0 (got {amount})"
            )));
        }
        let pot = self.pots.get_mut(&id).ok_or(DashboardError::PotNotFound(id))?;
        pot.total += amount;
        tracing::info!(id = %id, amount, total = pot.total, "Deposited into pot");
        Ok(pot.total)
    }

    /// Takes `amount` out of the pot; requires `0 < amount < total`.
    pub fn withdraw(&mut self, id: Uuid, amount: f64) -> Result<f64> {
        let pot = self.pots.get_mut(&id).ok_or(DashboardError::PotNotFound(id))?;
        if !(amount.is_finite() && amount > 0.0) {
            return Err(DashboardError::InvalidAmount(format!(
                "withdrawal must be more than 0 (got {amount})"
            )));
        }
        if amount >= pot.total {
            return Err(DashboardError::InvalidAmount(format!(
                "withdrawal of {amount} must be less than the current total {}",
                pot.total
            )));
        }
        pot.total -= amount;
        tracing::info!(id = %id, amount, total = pot.total, "Withdrew from pot");
        Ok(pot.total)
    }

    pub fn get(&self, id: Uuid) -> Option<&Pot> {
        self.pots.get(&id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.pots.contains_key(&id)
    }

    /// Pots in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Pot> + Clone + '_ {
        self.order.iter().filter_map(move |id| self.pots.get(id))
    }

    /// Id of the pot shown at zero-based `position`.
    pub fn id_at(&self, position: usize) -> Option<Uuid> {
        self.order.get(position).copied()
    }

    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.order.iter().position(|candidate| *candidate == id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of every pot's saved amount.
    pub fn total_saved(&self) -> f64 {
        self.iter().map(|pot| pot.total).sum()
    }

    pub fn is_theme_in_use(&self, code: &str, excluding: Option<Uuid>) -> bool {
        palette::is_in_use(code, self.iter(), excluding)
    }

    /// Theme codes held by pots other than `excluding`, in display order.
    pub fn themes_in_use(&self, excluding: Option<Uuid>) -> Vec<&str> {
        self.iter()
            .filter(|pot| excluding != Some(pot.id))
            .map(|pot| pot.theme.as_str())
            .collect()
    }
}
