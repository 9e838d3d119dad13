//! Page-level owner of the pot collection and the open dialog.

use uuid::Uuid;

use crate::core::dialog::{ActiveDialog, DialogState, PotDialog};
use crate::core::errors::{DashboardError, Result};
use crate::core::store::PotStore;
use crate::domain::{palette, ColorEntry, ColorOption, Pot};
use crate::forms::{AmountForm, FormFlow, PotForm};

/// Result of a successful dialog submit. Each variant corresponds to exactly
/// one store mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Uuid),
    Updated(Uuid),
    Deleted(Pot),
    Deposited { id: Uuid, total: f64 },
    Withdrew { id: Uuid, total: f64 },
}

/// Routes dialog events to the [`PotStore`].
///
/// Only this type mutates the collection; views read through [`PotsManager::store`].
#[derive(Clone, Default)]
pub struct PotsManager {
    store: PotStore,
    dialog: Option<ActiveDialog>,
}

impl PotsManager {
    pub fn new(store: PotStore) -> Self {
        Self {
            store,
            dialog: None,
        }
    }

    pub fn from_pots(pots: impl IntoIterator<Item = Pot>) -> Self {
        Self::new(PotStore::from_pots(pots))
    }

    pub fn store(&self) -> &PotStore {
        &self.store
    }

    pub fn state(&self) -> DialogState {
        self.dialog
            .as_ref()
            .map(ActiveDialog::state)
            .unwrap_or_default()
    }

    pub fn dialog(&self) -> Option<&ActiveDialog> {
        self.dialog.as_ref()
    }

    pub fn open_create(&mut self) -> DialogState {
        let form = PotForm::for_create(self.store.iter());
        self.replace(ActiveDialog::Creating(PotDialog::new(form)))
    }

    /// Opens the edit dialog pre-filled from the pot's current values.
    pub fn open_edit(&mut self, id: Uuid) -> Result<DialogState> {
        let pot = self.require(id)?;
        let form = PotForm::for_edit(pot, self.store.iter());
        Ok(self.replace(ActiveDialog::Editing(id, PotDialog::new(form))))
    }

    pub fn open_delete(&mut self, id: Uuid) -> Result<DialogState> {
        self.require(id)?;
        Ok(self.replace(ActiveDialog::Deleting(id)))
    }

    pub fn open_deposit(&mut self, id: Uuid) -> Result<DialogState> {
        let pot = self.require(id)?;
        let form = AmountForm::deposit(pot.total, pot.target);
        Ok(self.replace(ActiveDialog::Depositing(id, form)))
    }

    pub fn open_withdraw(&mut self, id: Uuid) -> Result<DialogState> {
        let pot = self.require(id)?;
        let form = AmountForm::withdraw(pot.total, pot.target);
        Ok(self.replace(ActiveDialog::Withdrawing(id, form)))
    }

    /// Writes a raw value into the open dialog's form.
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        let dialog = self.dialog.as_mut().ok_or(DashboardError::NoActiveDialog)?;
        match dialog {
            ActiveDialog::Creating(pot) | ActiveDialog::Editing(_, pot) => {
                pot.form_mut().set_field(key, value)
            }
            ActiveDialog::Depositing(_, form) | ActiveDialog::Withdrawing(_, form) => {
                form.set_field(key, value)
            }
            ActiveDialog::Deleting(_) => Err(DashboardError::DialogMismatch(
                "The delete dialog has no fields".into(),
            )),
        }
    }

    /// Picks a theme by menu position, code or name. Colours held by other
    /// pots are disabled in the menu and cannot be picked.
    pub fn select_color(&mut self, token: &str) -> Result<&'static ColorEntry> {
        let entry = palette::resolve(token).map_err(DashboardError::InvalidInput)?;
        let excluding = self.state().target();
        if self.store.is_theme_in_use(entry.code, excluding) {
            return Err(DashboardError::InvalidInput(format!(
                "{} ({}) is already used by another pot",
                entry.name, entry.code
            )));
        }
        self.pot_dialog_mut()?.select_color(entry)?;
        tracing::debug!(code = entry.code, "Selected theme");
        Ok(entry)
    }

    pub fn toggle_color_menu(&mut self) -> Result<bool> {
        Ok(self.pot_dialog_mut()?.toggle_color_menu())
    }

    /// Click outside the popover. A no-op when nothing is open.
    pub fn dismiss_color_menu(&mut self) {
        if let Some(dialog) = self.dialog.as_mut().and_then(ActiveDialog::pot_dialog_mut) {
            dialog.dismiss_color_menu();
        }
    }

    /// Theme menu rows for the open create/edit dialog.
    pub fn color_options(&self) -> Result<Vec<ColorOption>> {
        let dialog = self
            .dialog
            .as_ref()
            .ok_or(DashboardError::NoActiveDialog)?;
        let pot_dialog = dialog.pot_dialog().ok_or_else(|| mismatch(dialog.state()))?;
        let selected = pot_dialog.form().selected_color();
        let selected = (!selected.is_placeholder()).then_some(selected.code);
        Ok(palette::color_menu(
            self.store.iter(),
            selected,
            dialog.state().target(),
        ))
    }

    /// Submits the open dialog. Validation failures keep it open with every
    /// error visible; success applies one mutation and closes it.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let dialog = self.dialog.as_mut().ok_or(DashboardError::NoActiveDialog)?;
        let outcome = match dialog {
            ActiveDialog::Creating(pot) => {
                let input = pot.form_mut().submit()?;
                self.dialog = None;
                SubmitOutcome::Created(self.store.create(input))
            }
            ActiveDialog::Editing(id, pot) => {
                let id = *id;
                let input = pot.form_mut().submit()?;
                self.dialog = None;
                self.store.update(id, input)?;
                SubmitOutcome::Updated(id)
            }
            ActiveDialog::Deleting(id) => {
                let id = *id;
                self.dialog = None;
                SubmitOutcome::Deleted(self.store.remove(id)?)
            }
            ActiveDialog::Depositing(id, form) => {
                let id = *id;
                let amount = form.submit()?;
                self.dialog = None;
                let total = self.store.deposit(id, amount)?;
                SubmitOutcome::Deposited { id, total }
            }
            ActiveDialog::Withdrawing(id, form) => {
                let id = *id;
                let amount = form.submit()?;
                self.dialog = None;
                let total = self.store.withdraw(id, amount)?;
                SubmitOutcome::Withdrew { id, total }
            }
        };
        tracing::debug!(?outcome, "Dialog submitted");
        Ok(outcome)
    }

    /// Closes the open dialog, discarding its input. Returns what was open.
    pub fn cancel(&mut self) -> DialogState {
        let previous = self.state();
        if self.dialog.take().is_some() {
            tracing::debug!(dialog = %previous, "Dialog closed");
        }
        previous
    }

    fn replace(&mut self, dialog: ActiveDialog) -> DialogState {
        let state = dialog.state();
        if let Some(previous) = self.dialog.replace(dialog) {
            tracing::debug!(replaced = %previous.state(), "Replacing open dialog");
        }
        tracing::debug!(dialog = %state, "Dialog opened");
        state
    }

    fn require(&self, id: Uuid) -> Result<&Pot> {
        self.store.get(id).ok_or(DashboardError::PotNotFound(id))
    }

    fn pot_dialog_mut(&mut self) -> Result<&mut PotDialog> {
        let dialog = self.dialog.as_mut().ok_or(DashboardError::NoActiveDialog)?;
        let state = dialog.state();
        dialog.pot_dialog_mut().ok_or_else(|| mismatch(state))
    }
}

fn mismatch(state: DialogState) -> DashboardError {
    DashboardError::DialogMismatch(format!(
        "The {} dialog has no color picker",
        state.label()
    ))
}
