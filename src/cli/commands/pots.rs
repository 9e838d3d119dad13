use uuid::Uuid;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::navigation::Route;
use crate::cli::registry::{Arguments, CommandEntry, POT_ACTIONS};
use crate::cli::ui::views;
use crate::core::{DialogState, SubmitOutcome};
use crate::currency::{format_currency, FormatOptions};
use crate::domain::palette;
use crate::forms::{fields, FormFlow};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "pot",
            "Open a pot dialog",
            POT_USAGE,
            cmd_pot,
        )
        .with_arguments(Arguments::Words(POT_ACTIONS)),
        CommandEntry::new(
            "set",
            "Fill a field of the open dialog",
            "set <name|target|color|amount> <value>",
            cmd_set,
        )
        .with_arguments(Arguments::Fields),
        CommandEntry::new(
            "colors",
            "Open the theme picker (or list the palette)",
            "colors [close]",
            cmd_colors,
        )
        .with_arguments(Arguments::Words(&["close"])),
        CommandEntry::new(
            "color",
            "Pick a theme for the open pot dialog",
            "color <position|code|name>",
            cmd_color,
        )
        .with_arguments(Arguments::Colors),
        CommandEntry::new("dialog", "Show the open dialog", "dialog", cmd_dialog),
        CommandEntry::new("submit", "Submit the open dialog", "submit", cmd_submit),
        CommandEntry::new("cancel", "Close the open dialog", "cancel", cmd_cancel),
    ]
}

const POT_USAGE: &str = "pot <new|edit|delete|add|withdraw> [position|name]";

fn cmd_pot(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let action = args
        .first()
        .map(|action| action.to_lowercase())
        .ok_or_else(|| CommandError::InvalidArguments(format!("usage: {POT_USAGE}")))?;
    let rest = &args[1..];

    if action == "new" {
        context.pots.open_create();
        return open_on_pots_page(context);
    }

    let usage = format!("pot {action} <position|name>");
    let Some(id) = context.pot_from_args(rest, &usage)? else {
        io::print_info("Operation cancelled.");
        return Ok(());
    };

    match action.as_str() {
        "edit" => context.pots.open_edit(id)?,
        "delete" => context.pots.open_delete(id)?,
        "add" | "deposit" => context.pots.open_deposit(id)?,
        "withdraw" => context.pots.open_withdraw(id)?,
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown pot action `{other}` (usage: {POT_USAGE})"
            )))
        }
    };
    open_on_pots_page(context)?;

    if matches!(context.pots.state(), DialogState::Deleting(_)) && context.can_prompt() {
        return confirm_delete(context, id);
    }
    Ok(())
}

fn open_on_pots_page(context: &mut ShellContext) -> CommandResult {
    if context.sidebar.active() != Route::Pots {
        context.sidebar.navigate(Route::Pots);
    }
    context.show_dialog()
}

fn confirm_delete(context: &mut ShellContext, id: Uuid) -> CommandResult {
    let name = context
        .pots
        .store()
        .get(id)
        .map(|pot| pot.name.clone())
        .unwrap_or_default();
    if io::confirm_action(&context.theme, &format!("Delete '{name}'?"), false)? {
        cmd_submit(context, &[])
    } else {
        cmd_cancel(context, &[])
    }
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(CommandError::InvalidArguments(
            "usage: set <name|target|color|amount> <value>".into(),
        ));
    }
    let field = args[0].to_lowercase();
    let mut value = args[1..].join(" ");
    if field == fields::COLOR && !value.trim_start().starts_with('#') {
        // Positions and names resolve to a code; raw codes go to validation as typed.
        value = palette::resolve(&value)
            .map_err(CommandError::InvalidArguments)?
            .code
            .to_string();
    }
    context.pots.dismiss_color_menu();
    context.pots.set_field(&field, &value)?;
    report_field(context, &field);
    Ok(())
}

/// Prints the field's error, or a short confirmation when it is valid.
fn report_field(context: &ShellContext, field: &str) {
    let Some(dialog) = context.pots.dialog() else {
        return;
    };
    if let Some(pot_dialog) = dialog.pot_dialog() {
        let form = pot_dialog.form();
        match form.state().visible_error(field) {
            Some(message) => io::print_warning(message),
            None => io::print_success(format!("{field} set.")),
        }
        if field == fields::NAME {
            io::print_info(format!("{} characters left", form.characters_left()));
        }
    } else if let Some(form) = dialog.amount_form() {
        match form.state().visible_error(field) {
            Some(message) => io::print_warning(message),
            None => {
                let preview = form.preview();
                io::print_success(format!(
                    "New amount: {}",
                    format_currency(preview.new_total, FormatOptions::default())
                ));
            }
        }
    }
}

fn cmd_colors(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let pot_dialog_open = context
        .pots
        .dialog()
        .is_some_and(|dialog| dialog.pot_dialog().is_some());

    if !pot_dialog_open {
        let lines = views::palette_listing(&context.formatter(), context.pots.store());
        context.print_lines(lines);
        return Ok(());
    }

    if args
        .first()
        .is_some_and(|arg| arg.eq_ignore_ascii_case("close"))
    {
        context.pots.dismiss_color_menu();
        return Ok(());
    }

    let menu_is_open = context
        .pots
        .dialog()
        .and_then(|dialog| dialog.pot_dialog())
        .is_some_and(|dialog| dialog.is_color_menu_open());
    if !menu_is_open {
        context.pots.toggle_color_menu()?;
    }
    let options = context.pots.color_options()?;
    let lines = views::color_menu(&context.formatter(), &options);
    context.print_lines(lines);
    Ok(())
}

fn cmd_color(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: color <position|code|name>".into(),
        ));
    }
    let entry = context.pots.select_color(&args.join(" "))?;
    io::print_success(format!("Theme set to {} ({}).", entry.name, entry.code));
    Ok(())
}

fn cmd_dialog(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.show_dialog()
}

fn cmd_submit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let outcome = context.pots.submit()?;
    let store = context.pots.store();
    let name_of = |id| {
        store
            .get(id)
            .map(|pot| pot.name.clone())
            .unwrap_or_default()
    };
    let cash = FormatOptions::default();
    let message = match &outcome {
        SubmitOutcome::Created(id) => format!("Created pot '{}'.", name_of(*id)),
        SubmitOutcome::Updated(id) => format!("Saved changes to '{}'.", name_of(*id)),
        SubmitOutcome::Deleted(pot) => format!("Deleted pot '{}'.", pot.name),
        SubmitOutcome::Deposited { id, total } => format!(
            "Added money to '{}'. Total saved: {}.",
            name_of(*id),
            format_currency(*total, cash)
        ),
        SubmitOutcome::Withdrew { id, total } => format!(
            "Withdrew from '{}'. Total saved: {}.",
            name_of(*id),
            format_currency(*total, cash)
        ),
    };
    io::print_success(message);
    context.show_route()
}

fn cmd_cancel(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.pots.cancel() {
        DialogState::Closed => io::print_info("No dialog is open."),
        previous => io::print_info(format!("Closed the {} dialog.", previous.label())),
    }
    Ok(())
}
