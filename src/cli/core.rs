//! Core CLI loop, dispatch, and shell context helpers.

use std::io;

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use uuid::Uuid;

use crate::{
    config::{Config, ConfigManager},
    core::errors::DashboardError,
    core::services::OverviewService,
    core::PotsManager,
    domain::{DashboardData, Displayable, NamedEntity},
};

pub use crate::core::errors::CliError;

use super::commands;
use super::io as cli_io;
use super::navigation::{Route, Sidebar};
use super::output::{self, OutputPreferences};
use super::registry::CommandEntry;
pub use super::shell_context::{CliMode, ShellContext};
use super::ui::formatting::Formatter;
use super::ui::progress_bar::bar_width;
use super::ui::views;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::new()?)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let registry = commands::registry();

        let config = config_manager.load()?;
        apply_output(&config);
        let data = load_fixture(&config)?;
        let pots = PotsManager::from_pots(data.pots.clone());
        let start = Route::parse(&config.start_route).unwrap_or_else(|| {
            cli_io::print_warning(format!(
                "Unknown start route `{}`; showing the overview.",
                config.start_route
            ));
            Route::Overview
        });
        let sidebar = Sidebar::new(start, config.sidebar_collapsed);

        tracing::info!(
            mode = ?mode,
            pots = pots.store().len(),
            route = %start,
            "Shell context ready"
        );

        Ok(ShellContext {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            data,
            pots,
            sidebar,
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn prompt(&self) -> String {
        let state = self.pots.state();
        if state.is_open() {
            format!("finance[{}|{}]> ", self.sidebar.active(), state.label())
        } else {
            format!("finance[{}]> ", self.sidebar.active())
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.get(command).map(|entry| entry.handler) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        crate::cli::shell::handle_line(self, line)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if !self.can_prompt() {
            return Ok(true);
        }
        let prompt = if self
            .pots
            .dialog()
            .is_some_and(|dialog| dialog.has_unsaved_input())
        {
            "Discard the open dialog and exit?"
        } else {
            "Exit shell?"
        };
        cli_io::confirm_action(&self.theme, prompt, false).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Core(DashboardError::Validation(errors)) => {
                for (field, message) in errors.iter() {
                    self.print_error(&format!("{field}: {message}"));
                }
                self.print_hint("Fix the fields with `set <field> <value>`, then `submit` again.");
                Ok(())
            }
            CommandError::Core(DashboardError::NoActiveDialog) => {
                self.print_error("No dialog is open.");
                self.print_hint("Open one with `pot new`, `pot edit <n>`, `pot add <n>` or `pot withdraw <n>`.");
                Ok(())
            }
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        cli_io::print_hint(message);
    }

    pub(crate) fn formatter(&self) -> Formatter {
        Formatter::new()
    }

    pub(crate) fn print_lines(&self, lines: Vec<String>) {
        for line in lines {
            println!("{line}");
        }
    }

    /// Renders the active route.
    pub(crate) fn show_route(&self) -> CommandResult {
        let formatter = self.formatter();
        let lines = match self.sidebar.active() {
            Route::Overview => {
                let summary = OverviewService::summarize(&self.data, self.pots.store());
                views::overview(&formatter, &summary)
            }
            Route::Pots => views::pots_page(&formatter, self.pots.store(), bar_width()),
            other => views::coming_soon(&formatter, other),
        };
        self.print_lines(lines);
        Ok(())
    }

    pub(crate) fn show_dialog(&self) -> CommandResult {
        let lines = views::dialog(&self.formatter(), &self.pots, bar_width());
        self.print_lines(lines);
        Ok(())
    }

    /// Resolves a 1-based position or a pot name.
    pub(crate) fn resolve_pot(&self, token: &str) -> Result<Uuid, CommandError> {
        let store = self.pots.store();
        if let Ok(position) = token.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|index| store.id_at(index))
                .ok_or_else(|| {
                    CommandError::InvalidArguments(format!(
                        "no pot at position {position} ({} pots)",
                        store.len()
                    ))
                });
        }
        store
            .iter()
            .find(|pot| pot.name().eq_ignore_ascii_case(token.trim()))
            .map(|pot| pot.id)
            .ok_or_else(|| CommandError::InvalidArguments(format!("no pot named `{token}`")))
    }

    /// Takes the pot from `args` or, interactively, from a picker.
    pub(crate) fn pot_from_args(
        &self,
        args: &[&str],
        usage: &str,
    ) -> Result<Option<Uuid>, CommandError> {
        if !args.is_empty() {
            return self.resolve_pot(&args.join(" ")).map(Some);
        }
        if !self.can_prompt() {
            return Err(CommandError::InvalidArguments(format!("usage: {usage}")));
        }
        let store = self.pots.store();
        if store.is_empty() {
            return Err(CommandError::InvalidArguments("there are no pots yet".into()));
        }
        let items: Vec<String> = store.iter().map(Displayable::display_label).collect();
        let choice = cli_io::select_item(&self.theme, "Select pot", &items)?;
        Ok(choice.and_then(|index| store.id_at(index)))
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager
            .save(&self.config)
            .map_err(CommandError::from_core)
    }

    pub(crate) fn apply_config(&mut self, config: Config) {
        apply_output(&config);
        self.config = config;
    }
}

fn apply_output(config: &Config) {
    output::set_preferences(OutputPreferences {
        plain_mode: config.plain_output,
    });
}

/// Loads the configured fixture, falling back to the bundled one.
fn load_fixture(config: &Config) -> Result<DashboardData, CliError> {
    if let Some(path) = config.fixture_path.as_deref() {
        match DashboardData::from_path(path) {
            Ok(data) => return Ok(data),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Fixture load failed");
                cli_io::print_warning(format!(
                    "Could not load {} ({err}); using the bundled data.",
                    path.display()
                ));
            }
        }
    }
    Ok(DashboardData::bundled()?)
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] DashboardError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl CommandError {
    pub(crate) fn from_core(error: DashboardError) -> Self {
        CommandError::Core(error)
    }
}

impl From<CliError> for CommandError {
    fn from(err: CliError) -> Self {
        match err {
            CliError::Core(inner) => CommandError::Core(inner),
            CliError::Input(message) | CliError::Command(message) => {
                CommandError::InvalidArguments(message)
            }
        }
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn process_script(
    config_manager: ConfigManager,
    lines: &[&str],
) -> Result<ShellContext, CliError> {
    let mut app = ShellContext::with_config_manager(CliMode::Script, config_manager)?;
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => app.report_error(err)?,
        }
    }
    Ok(app)
}
