pub mod common;
pub mod fixture;
pub mod palette;
pub mod pot;

pub use common::{Displayable, NamedEntity};
pub use fixture::{Balance, Budget, DashboardData, RecurringBills, Transaction};
pub use palette::{ColorEntry, ColorOption, PALETTE};
pub use pot::{Pot, PotInput, NAME_MAX_CHARS};
