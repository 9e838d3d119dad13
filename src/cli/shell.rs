use std::{
    borrow::Cow,
    fmt,
    io::{self, BufRead},
    path::PathBuf,
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;

use crate::cli::commands;
use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::output::{info as output_info, section as output_section};
use crate::cli::registry::CommandRegistry;
use crate::core::DialogState;

pub const SCRIPT_ENV: &str = "FINANCE_DASHBOARD_CLI_SCRIPT";

const HISTORY_FILE: &str = "history.txt";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match context.mode() {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn history_path(context: &ShellContext) -> PathBuf {
    context.config_manager.path().with_file_name(HISTORY_FILE)
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(commands::registry())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    let history = history_path(context);
    if editor.load_history(&history).is_err() {
        tracing::debug!(path = %history.display(), "No shell history yet");
    }

    output_section("Finance Dashboard");
    output_info("Type `help` to list commands. Tab completes commands, actions, fields and colours.");
    context.show_route()?;

    while context.running {
        let prompt = context.prompt();
        match editor.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();

                match handle_line(context, trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err)?,
                }
            }
            // Ctrl-C backs out of an open dialog before it offers to leave.
            Err(ReadlineError::Interrupted) => match context.pots.cancel() {
                DialogState::Closed => {
                    if context.confirm_exit()? {
                        break;
                    }
                }
                previous => output_info(format!("Closed the {} dialog.", previous.label())),
            },
            Err(ReadlineError::Eof) => {
                output_info("Leaving the dashboard.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Err(err) = editor.save_history(&history) {
        tracing::warn!(path = %history.display(), error = %err, "Could not save shell history");
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for (index, line) in stdin.lock().lines().enumerate() {
        if !context.running {
            break;
        }
        let line = line?;
        match execute(context, &line, Some(index + 1)) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

pub(crate) fn handle_line(
    context: &mut ShellContext,
    line: &str,
) -> Result<LoopControl, CommandError> {
    execute(context, line, None)
}

/// Runs one line; `line_number` prefixes parse warnings in script mode.
fn execute(
    context: &mut ShellContext,
    line: &str,
    line_number: Option<usize>,
) -> Result<LoopControl, CommandError> {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            let message = match line_number {
                Some(number) => format!("line {number}: {err}"),
                None => err.to_string(),
            };
            context.print_warning(&message);
            return Ok(LoopControl::Continue);
        }
    };

    if tokens.is_empty() {
        return Ok(LoopControl::Continue);
    }

    if drops_trailing_comment(line) {
        context.print_hint("Text after an unquoted `#` was ignored. Quote colour codes: color '#C94736'.");
    }

    let raw = &tokens[0];
    let command = raw.to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    context.last_command = Some(line.trim().to_string());
    tracing::debug!(command = %command, args = args.len(), line = ?line_number, "Dispatching");

    match context.dispatch(&command, raw, &args) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        other => other,
    }
}

/// True when an unquoted `#` opens a comment after the command word.
fn drops_trailing_comment(line: &str) -> bool {
    if line.trim_start().starts_with('#') {
        return false;
    }
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut word_start = true;
    for ch in line.chars() {
        if escaped {
            escaped = false;
            word_start = false;
            continue;
        }
        match (quote, ch) {
            (Some('\''), '\'') | (Some('"'), '"') => quote = None,
            (Some('"'), '\\') | (None, '\\') => escaped = true,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(ch),
            (None, '#') if word_start => return true,
            (None, ch) if ch.is_whitespace() => {
                word_start = true;
                continue;
            }
            (None, _) => {}
        }
        word_start = false;
    }
    false
}

/// Completes command names, then each command's arguments.
struct CommandHelper {
    registry: CommandRegistry,
}

impl CommandHelper {
    fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    /// Start of the word under the cursor and the matching candidates.
    fn candidates(&self, prefix: &str) -> (usize, Vec<String>) {
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let needle = prefix[start..].to_ascii_lowercase();
        let words: Vec<&str> = prefix[..start].split_whitespace().collect();

        let pool = match words.split_first() {
            None => self.registry.names().map(str::to_string).collect(),
            Some((command, typed)) => {
                self.registry
                    .argument_candidates(command, typed.len() + 1, typed)
            }
        };
        let matches = pool
            .into_iter()
            .filter(|candidate| candidate.to_ascii_lowercase().starts_with(&needle))
            .collect();
        (start, matches)
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(&line[..pos]);
        let pairs = matches
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::registry::POT_ACTIONS;

    fn helper() -> CommandHelper {
        CommandHelper::new(commands::registry())
    }

    #[test]
    fn first_word_completes_command_names() {
        let (start, matches) = helper().candidates("co");
        assert_eq!(start, 0);
        assert_eq!(matches, ["colors", "color", "config"]);
    }

    #[test]
    fn pot_completes_its_actions() {
        let (start, matches) = helper().candidates("pot ");
        assert_eq!(start, 4);
        assert_eq!(matches, POT_ACTIONS);
        assert_eq!(helper().candidates("pot w").1, ["withdraw"]);
    }

    #[test]
    fn set_completes_fields_then_colours() {
        assert_eq!(helper().candidates("set t").1, ["target"]);
        let (start, matches) = helper().candidates("set color gr");
        assert_eq!(start, 10);
        assert_eq!(matches, ["green"]);
        assert!(helper().candidates("set name ").1.is_empty());
    }

    #[test]
    fn nav_and_color_complete_routes_and_palette() {
        assert_eq!(helper().candidates("nav /re").1, ["/recurring-bills"]);
        assert_eq!(helper().candidates("color RE").1, ["red"]);
        assert_eq!(helper().candidates("config set pl").1, ["plain_output"]);
        assert!(helper().candidates("submit ").1.is_empty());
    }

    #[test]
    fn unquoted_hash_after_command_is_flagged() {
        assert!(drops_trailing_comment("color #C94736"));
        assert!(drops_trailing_comment("set color  #277C78"));
        assert!(!drops_trailing_comment("color '#C94736'"));
        assert!(!drops_trailing_comment("color \"#C94736\""));
        assert!(!drops_trailing_comment("color C94736"));
        assert!(!drops_trailing_comment("set name Pot#1"));
        assert!(!drops_trailing_comment("# a comment line"));
    }

    #[test]
    fn parse_errors_do_not_dispatch() {
        assert!(parse_command_line("set name \"Rainy").is_err());
        assert_eq!(
            parse_command_line("color #C94736").unwrap(),
            vec!["color".to_string()]
        );
    }
}
