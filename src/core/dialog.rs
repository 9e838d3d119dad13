//! Modal dialog model for the pots page.
//!
//! At most one dialog exists at a time. The open dialog owns its form, so
//! dropping the dialog discards any unsaved input.

use std::fmt;

use uuid::Uuid;

use crate::core::errors::Result;
use crate::domain::ColorEntry;
use crate::forms::{AmountForm, FormFlow, PotForm};

/// Which dialog is open and for which pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Creating,
    Editing(Uuid),
    Deleting(Uuid),
    Depositing(Uuid),
    Withdrawing(Uuid),
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    /// Pot the dialog acts on, if any.
    pub fn target(&self) -> Option<Uuid> {
        match self {
            DialogState::Closed | DialogState::Creating => None,
            DialogState::Editing(id)
            | DialogState::Deleting(id)
            | DialogState::Depositing(id)
            | DialogState::Withdrawing(id) => Some(*id),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DialogState::Closed => "closed",
            DialogState::Creating => "create",
            DialogState::Editing(_) => "edit",
            DialogState::Deleting(_) => "delete",
            DialogState::Depositing(_) => "add",
            DialogState::Withdrawing(_) => "withdraw",
        }
    }
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target() {
            Some(id) => write!(f, "{} ({id})", self.label()),
            None => f.write_str(self.label()),
        }
    }
}

/// Create/edit dialog: the pot form plus the theme popover flag.
#[derive(Clone)]
pub struct PotDialog {
    form: PotForm,
    color_menu_open: bool,
}

impl PotDialog {
    pub fn new(form: PotForm) -> Self {
        Self {
            form,
            color_menu_open: false,
        }
    }

    pub fn form(&self) -> &PotForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PotForm {
        &mut self.form
    }

    pub fn is_color_menu_open(&self) -> bool {
        self.color_menu_open
    }

    /// Flips the popover and returns whether it is now open.
    pub fn toggle_color_menu(&mut self) -> bool {
        self.color_menu_open = !self.color_menu_open;
        self.color_menu_open
    }

    pub fn dismiss_color_menu(&mut self) {
        self.color_menu_open = false;
    }

    /// Picking a colour closes the popover.
    pub fn select_color(&mut self, entry: &ColorEntry) -> Result<()> {
        self.form.select_color(entry)?;
        self.color_menu_open = false;
        Ok(())
    }
}

/// The open dialog together with the input it owns.
#[derive(Clone)]
pub enum ActiveDialog {
    Creating(PotDialog),
    Editing(Uuid, PotDialog),
    Deleting(Uuid),
    Depositing(Uuid, AmountForm),
    Withdrawing(Uuid, AmountForm),
}

impl ActiveDialog {
    pub fn state(&self) -> DialogState {
        match self {
            ActiveDialog::Creating(_) => DialogState::Creating,
            ActiveDialog::Editing(id, _) => DialogState::Editing(*id),
            ActiveDialog::Deleting(id) => DialogState::Deleting(*id),
            ActiveDialog::Depositing(id, _) => DialogState::Depositing(*id),
            ActiveDialog::Withdrawing(id, _) => DialogState::Withdrawing(*id),
        }
    }

    pub fn pot_dialog(&self) -> Option<&PotDialog> {
        match self {
            ActiveDialog::Creating(dialog) | ActiveDialog::Editing(_, dialog) => Some(dialog),
            _ => None,
        }
    }

    pub fn pot_dialog_mut(&mut self) -> Option<&mut PotDialog> {
        match self {
            ActiveDialog::Creating(dialog) | ActiveDialog::Editing(_, dialog) => Some(dialog),
            _ => None,
        }
    }

    pub fn amount_form(&self) -> Option<&AmountForm> {
        match self {
            ActiveDialog::Depositing(_, form) | ActiveDialog::Withdrawing(_, form) => Some(form),
            _ => None,
        }
    }

    pub fn amount_form_mut(&mut self) -> Option<&mut AmountForm> {
        match self {
            ActiveDialog::Depositing(_, form) | ActiveDialog::Withdrawing(_, form) => Some(form),
            _ => None,
        }
    }

    /// True once the user has entered anything that closing would discard.
    pub fn has_unsaved_input(&self) -> bool {
        if let Some(dialog) = self.pot_dialog() {
            return !dialog.form().state().is_pristine();
        }
        self.amount_form()
            .is_some_and(|form| !form.state().is_pristine())
    }
}
