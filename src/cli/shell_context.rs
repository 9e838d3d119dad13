use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    core::PotsManager,
    domain::DashboardData,
};

use super::navigation::Sidebar;
use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    /// Fixture document; balances, transactions and budgets are read-only.
    pub data: DashboardData,
    pub pots: PotsManager,
    pub sidebar: Sidebar,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, route: {}, dialog: {}, last_command: {:?} }}",
            self.running,
            self.sidebar.active(),
            self.pots.state(),
            self.last_command
        )
    }
}
