//! Command table for the dashboard shell.
//!
//! Each entry names a handler and declares which words may follow it, so
//! help and tab completion read from the same table as dispatch.

use std::collections::HashSet;

use crate::cli::core::CommandResult;
use crate::cli::navigation::Route;
use crate::cli::shell_context::ShellContext;
use crate::config::KEYS;
use crate::domain::palette;
use crate::forms::fields;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Actions accepted by `pot`. `deposit` is an alias of `add`.
pub const POT_ACTIONS: &[&str] = &["new", "edit", "delete", "add", "withdraw"];

/// Words the shell can offer after a command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arguments {
    None,
    /// A fixed set of subcommands.
    Words(&'static [&'static str]),
    /// Dialog field keys, then palette colours after `color`.
    Fields,
    Routes,
    Colors,
    /// Subcommands, then preference keys after `set`.
    Config,
    /// Other command names.
    Commands,
}

impl Arguments {
    /// Candidates for the word at `position` (1 = first argument), given the
    /// words already typed after the command.
    fn candidates(&self, position: usize, typed: &[&str], commands: &[&'static str]) -> Vec<String> {
        match (self, position) {
            (Arguments::Words(words), 1) => owned(words.iter().copied()),
            (Arguments::Fields, 1) => owned([fields::NAME, fields::TARGET, fields::COLOR, fields::AMOUNT]),
            (Arguments::Fields, 2) if typed.first() == Some(&fields::COLOR) => color_words(),
            (Arguments::Routes, 1) => owned(Route::ALL.into_iter().map(|route| route.path())),
            (Arguments::Colors, 1) => color_words(),
            (Arguments::Config, 1) => owned(["show", "set"]),
            (Arguments::Config, 2) if typed.first() == Some(&"set") => owned(KEYS.iter().copied()),
            (Arguments::Commands, 1) => owned(commands.iter().copied()),
            _ => Vec::new(),
        }
    }
}

fn owned<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    words.into_iter().map(str::to_string).collect()
}

/// Palette names that pick exactly one colour, in lowercase. Codes are left
/// out since `#` needs quoting.
fn color_words() -> Vec<String> {
    let names: Vec<String> = palette::selectable()
        .map(|entry| entry.name.to_ascii_lowercase())
        .collect();
    let mut seen = HashSet::new();
    let repeated: HashSet<&String> = names.iter().filter(|name| !seen.insert(*name)).collect();
    names
        .iter()
        .filter(|name| !repeated.contains(name))
        .cloned()
        .collect()
}

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
    pub arguments: Arguments,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
            arguments: Arguments::None,
        }
    }

    pub fn with_arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = arguments;
        self
    }
}

/// Commands in display order. Lookup ignores case.
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    /// Sorts `entries` by their position in `order`; unlisted names go last.
    pub fn ordered(mut entries: Vec<CommandEntry>, order: &[&str]) -> Self {
        entries.sort_by_key(|entry| {
            order
                .iter()
                .position(|name| entry.name.eq_ignore_ascii_case(name))
                .unwrap_or(order.len())
        });
        entries.dedup_by(|a, b| a.name == b.name);
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Completions for the argument at `position` after `command`.
    pub fn argument_candidates(&self, command: &str, position: usize, typed: &[&str]) -> Vec<String> {
        let names: Vec<&'static str> = self.names().collect();
        self.get(command)
            .map(|entry| entry.arguments.candidates(position, typed, &names))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    fn registry() -> CommandRegistry {
        CommandRegistry::ordered(
            vec![
                CommandEntry::new("set", "", "", noop).with_arguments(Arguments::Fields),
                CommandEntry::new("pot", "", "", noop).with_arguments(Arguments::Words(POT_ACTIONS)),
                CommandEntry::new("nav", "", "", noop).with_arguments(Arguments::Routes),
                CommandEntry::new("config", "", "", noop).with_arguments(Arguments::Config),
                CommandEntry::new("help", "", "", noop).with_arguments(Arguments::Commands),
            ],
            &["pot", "set", "nav"],
        )
    }

    #[test]
    fn ordering_follows_the_given_list() {
        let names: Vec<&str> = registry().names().collect();
        assert_eq!(names, ["pot", "set", "nav", "config", "help"]);
        assert!(registry().get("POT").is_some());
    }

    #[test]
    fn arguments_complete_per_command() {
        let registry = registry();
        assert_eq!(registry.argument_candidates("pot", 1, &[]), POT_ACTIONS);
        assert_eq!(
            registry.argument_candidates("set", 1, &[]),
            ["name", "target", "color", "amount"]
        );
        assert!(registry
            .argument_candidates("set", 2, &["color"])
            .contains(&"green".to_string()));
        assert!(registry.argument_candidates("set", 2, &["name"]).is_empty());
        assert!(registry
            .argument_candidates("nav", 1, &[])
            .contains(&"/recurring-bills".to_string()));
        assert!(registry
            .argument_candidates("config", 2, &["set"])
            .contains(&"plain_output".to_string()));
        assert_eq!(registry.argument_candidates("help", 1, &[]).len(), 5);
        assert!(registry.argument_candidates("unknown", 1, &[]).is_empty());
    }
}
