use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::navigation::Route;
use crate::cli::registry::{Arguments, CommandEntry};
use crate::cli::ui::views;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "overview",
            "Show balances, pots, transactions, budgets and bills",
            "overview",
            cmd_overview,
        ),
        CommandEntry::new("pots", "List savings pots", "pots", cmd_pots),
        CommandEntry::new(
            "nav",
            "Navigate to a route",
            "nav </overview|/transactions|/budgets|/pots|/recurring-bills>",
            cmd_nav,
        )
        .with_arguments(Arguments::Routes),
        CommandEntry::new(
            "sidebar",
            "Show the navigation menu or minimise it",
            "sidebar [toggle]",
            cmd_sidebar,
        )
        .with_arguments(Arguments::Words(&["toggle"])),
    ]
}

fn cmd_overview(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    go(context, Route::Overview)
}

fn cmd_pots(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    go(context, Route::Pots)
}

fn cmd_nav(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments("usage: nav <route>".into()))?;
    let route = Route::parse(raw).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "unknown route `{raw}` (expected one of: {})",
            Route::ALL
                .iter()
                .map(|route| route.path())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })?;
    go(context, route)
}

fn go(context: &mut ShellContext, route: Route) -> CommandResult {
    context.sidebar.navigate(route);
    context.show_route()
}

fn cmd_sidebar(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_lowercase()) {
        None => {}
        Some(action) if action == "toggle" => {
            let collapsed = context.sidebar.toggle();
            io::print_success(if collapsed {
                "Menu minimized."
            } else {
                "Menu expanded."
            });
        }
        Some(other) => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown sidebar action `{other}` (usage: sidebar [toggle])"
            )))
        }
    }
    let lines = views::sidebar(&context.formatter(), &context.sidebar);
    context.print_lines(lines);
    Ok(())
}
