//! Pot engine: the entity store, progress arithmetic, dialog orchestration
//! and the read-side services built on top of them.

pub mod dialog;
pub mod errors;
pub mod pots_manager;
pub mod progress;
pub mod services;
pub mod store;

pub use dialog::{ActiveDialog, DialogState, PotDialog};
pub use pots_manager::{PotsManager, SubmitOutcome};
pub use progress::{AdjustmentKind, AdjustmentPreview, Progress};
pub use store::PotStore;
