pub mod config;
pub mod navigation;
pub mod pots;
pub mod system;

use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "overview", "pots", "nav", "sidebar", "pot", "set", "colors", "color", "dialog", "submit",
    "cancel", "config", "help", "version", "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(navigation::definitions());
    commands.extend(pots::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn registry() -> CommandRegistry {
    CommandRegistry::ordered(all_entries(), ROOT_COMMAND_ORDER)
}
