//! Screen renderers. Each returns the lines to print so views can be
//! checked without a terminal.

use crate::cli::navigation::{Route, Sidebar};
use crate::core::services::Overview;
use crate::core::{ActiveDialog, PotDialog, PotStore, PotsManager, Progress};
use crate::currency::{format_currency, format_percentage, FormatOptions};
use crate::domain::{palette, ColorOption, Pot};
use crate::forms::{fields, AmountForm, FormFlow};

use super::formatting::Formatter;
use super::progress_bar::{render_preview, render_progress};

pub fn overview(formatter: &Formatter, overview: &Overview) -> Vec<String> {
    let cash = FormatOptions::default();
    let whole = FormatOptions::whole();
    let mut lines = vec![formatter.header_text("Overview")];
    let current = format_currency(overview.balance.current, cash);
    let income = format_currency(overview.balance.income, cash);
    let expenses = format_currency(overview.balance.expenses, cash);
    lines.extend(formatter.two_column_rows(&[
        ("Current Balance", current.as_str()),
        ("Income", income.as_str()),
        ("Expenses", expenses.as_str()),
    ]));

    lines.push(String::new());
    lines.push(section_title(formatter, "Pots", "See Details", Route::Pots));
    lines.push(format!(
        "  Total saved  {}",
        format_currency(overview.total_saved, whole)
    ));
    for pot in &overview.pots {
        lines.push(format!(
            "  {} {:<16} {}",
            formatter.swatch(&pot.theme),
            pot.name,
            format_currency(pot.total, whole)
        ));
    }

    lines.push(String::new());
    lines.push(section_title(formatter, "Transactions", "View All", Route::Transactions));
    let name_width = overview
        .transactions
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0);
    for row in &overview.transactions {
        let amount = format!("{:>10}", row.signed_amount);
        let amount = if row.is_income {
            formatter.positive_text(amount)
        } else {
            amount
        };
        lines.push(format!(
            "  {:<name_width$}  {amount}  {}",
            row.name,
            formatter.detail_text(&row.date)
        ));
    }

    lines.push(String::new());
    lines.push(section_title(formatter, "Budgets", "See Details", Route::Budgets));
    for budget in &overview.budgets {
        lines.push(format!(
            "  {} {:<16} {}",
            formatter.swatch(&budget.theme),
            budget.category,
            format_currency(budget.maximum, whole)
        ));
    }

    lines.push(String::new());
    lines.push(section_title(
        formatter,
        "Recurring Bills",
        "See Details",
        Route::RecurringBills,
    ));
    let bills = overview.recurring_bills;
    let paid = format_currency(bills.paid, cash);
    let upcoming = format_currency(bills.total_upcoming, cash);
    let due_soon = format_currency(bills.due_soon, cash);
    lines.extend(formatter.two_column_rows(&[
        ("Paid Bills", paid.as_str()),
        ("Total Upcoming", upcoming.as_str()),
        ("Due Soon", due_soon.as_str()),
    ]));
    lines
}

fn section_title(formatter: &Formatter, title: &str, link: &str, route: Route) -> String {
    format!(
        "{}  {}",
        formatter.header_text(title),
        formatter.detail_text(format!("{link}: nav {}", route.path()))
    )
}

pub fn pots_page(formatter: &Formatter, store: &PotStore, width: usize) -> Vec<String> {
    let mut lines = vec![
        formatter.header_text("Pots"),
        formatter.detail_text("+ Add New Pot: pot new"),
    ];
    if store.is_empty() {
        lines.push("No pots yet.".into());
        return lines;
    }
    for (index, pot) in store.iter().enumerate() {
        lines.push(String::new());
        lines.extend(pot_card(formatter, index + 1, pot, width));
    }
    lines
}

/// One card on the pots page; `position` is 1-based.
pub fn pot_card(formatter: &Formatter, position: usize, pot: &Pot, width: usize) -> Vec<String> {
    let progress = Progress::for_pot(pot);
    vec![
        format!("{position}. {} {}", formatter.swatch(&pot.theme), pot.name),
        format!(
            "   Total Saved  {}",
            format_currency(pot.total, FormatOptions::default())
        ),
        format!("   {}", render_progress(formatter, &progress, &pot.theme, width)),
        format!(
            "   {}  Target of {}",
            format_percentage(progress.percent),
            format_currency(pot.target, FormatOptions::whole())
        ),
        formatter.detail_text(format!(
            "   + Add Money: pot add {position}   Withdraw: pot withdraw {position}"
        )),
    ]
}

pub fn dialog(formatter: &Formatter, manager: &PotsManager, width: usize) -> Vec<String> {
    let Some(active) = manager.dialog() else {
        return vec!["No dialog is open.".into()];
    };
    let store = manager.store();
    let pot_name = |id| {
        store
            .get(id)
            .map(|pot: &Pot| pot.name.clone())
            .unwrap_or_default()
    };

    match active {
        ActiveDialog::Creating(dialog) => pot_dialog(
            formatter,
            "Add New Pot",
            "Create a pot to set savings targets. These can help keep you on track as you save for special purchases.",
            dialog,
            manager,
            "Add Pot",
        ),
        ActiveDialog::Editing(id, dialog) => pot_dialog(
            formatter,
            &format!("Edit '{}'", pot_name(*id)),
            "If your saving targets change, feel free to update your pots.",
            dialog,
            manager,
            "Save Changes",
        ),
        ActiveDialog::Deleting(id) => vec![
            formatter.header_text(format!("Delete '{}'?", pot_name(*id))),
            "Are you sure you want to delete this pot? This action cannot be reversed, and all the data inside it will be removed.".into(),
            formatter.detail_text("submit: Yes, Confirm Deletion   cancel: No, Go Back"),
        ],
        ActiveDialog::Depositing(id, form) => amount_dialog(
            formatter,
            &format!("Add to '{}'", pot_name(*id)),
            "Amount to Add",
            "Confirm Addition",
            form,
            store.get(*id).map(|pot| pot.theme.as_str()).unwrap_or_default(),
            width,
        ),
        ActiveDialog::Withdrawing(id, form) => amount_dialog(
            formatter,
            &format!("Withdraw from '{}'", pot_name(*id)),
            "Amount to Withdraw",
            "Confirm Withdrawal",
            form,
            store.get(*id).map(|pot| pot.theme.as_str()).unwrap_or_default(),
            width,
        ),
    }
}

fn field_lines(formatter: &Formatter, label: &str, value: &str, error: Option<&str>) -> Vec<String> {
    let mut lines = vec![format!("  {label}: {value}")];
    if let Some(message) = error {
        lines.push(format!("    {}", formatter.error_text(message)));
    }
    lines
}

fn pot_dialog(
    formatter: &Formatter,
    title: &str,
    description: &str,
    dialog: &PotDialog,
    manager: &PotsManager,
    action: &str,
) -> Vec<String> {
    let form = dialog.form();
    let state = form.state();
    let mut lines = vec![formatter.header_text(title), description.to_string()];

    lines.extend(field_lines(
        formatter,
        "Pot Name",
        state.value(fields::NAME),
        state.visible_error(fields::NAME),
    ));
    lines.push(formatter.detail_text(format!(
        "    {} characters left",
        form.characters_left()
    )));

    let target = state.value(fields::TARGET);
    lines.extend(field_lines(
        formatter,
        "Target",
        &format!("$ {target}"),
        state.visible_error(fields::TARGET),
    ));

    let color = form.selected_color();
    lines.extend(field_lines(
        formatter,
        "Theme",
        &format!("{} {}", formatter.swatch(color.code), color.name),
        state.visible_error(fields::COLOR),
    ));

    if dialog.is_color_menu_open() {
        if let Ok(options) = manager.color_options() {
            lines.extend(color_menu(formatter, &options));
        }
    }
    lines.push(formatter.detail_text(format!("submit: {action}   cancel: close")));
    lines
}

fn amount_dialog(
    formatter: &Formatter,
    title: &str,
    label: &str,
    action: &str,
    form: &AmountForm,
    theme: &str,
    width: usize,
) -> Vec<String> {
    let preview = form.preview();
    let state = form.state();
    let mut lines = vec![
        formatter.header_text(title),
        format!(
            "  New Amount  {}",
            format_currency(preview.new_total, FormatOptions::default())
        ),
        format!("  {}", render_preview(formatter, &preview, theme, width)),
        format!(
            "  {}  Target of {}",
            format_percentage(preview.new_percent),
            format_currency(form.target(), FormatOptions::whole())
        ),
    ];
    lines.extend(field_lines(
        formatter,
        label,
        &format!("$ {}", state.value(fields::AMOUNT)),
        state.visible_error(fields::AMOUNT),
    ));
    lines.push(formatter.detail_text(format!("submit: {action}   cancel: close")));
    lines
}

/// Theme picker rows, numbered for `color <n>`.
pub fn color_menu(formatter: &Formatter, options: &[ColorOption]) -> Vec<String> {
    options
        .iter()
        .map(|option| {
            let marker = if option.selected { ">" } else { " " };
            let mut row = format!(
                "  {marker} {:>2}. {} {:<11} {}",
                option.position,
                formatter.swatch(option.entry.code),
                option.entry.name,
                option.entry.code
            );
            if option.is_disabled() {
                row = formatter.detail_text(format!("{row}  Already Used"));
            }
            row
        })
        .collect()
}

/// Full palette listing when no dialog is open.
pub fn palette_listing(formatter: &Formatter, store: &PotStore) -> Vec<String> {
    let options = palette::color_menu(store.iter(), None, None);
    let mut lines = vec![formatter.header_text("Colors")];
    lines.extend(color_menu(formatter, &options));
    lines
}

pub fn sidebar(formatter: &Formatter, sidebar: &Sidebar) -> Vec<String> {
    let items = sidebar.items();
    if sidebar.is_collapsed() {
        let compact: Vec<String> = items
            .iter()
            .map(|item| {
                let initial = &item.route.label()[..1];
                if item.active {
                    format!("[{initial}]")
                } else {
                    initial.to_string()
                }
            })
            .collect();
        return vec![
            compact.join(" "),
            formatter.detail_text("Expand Menu: sidebar toggle"),
        ];
    }
    let mut lines = vec![formatter.header_text("finance")];
    for item in items {
        let marker = if item.active { ">" } else { " " };
        lines.push(format!(
            "  {marker} {:<16} {}",
            item.route.label(),
            formatter.detail_text(item.route.path())
        ));
    }
    lines.push(formatter.detail_text("Minimize Menu: sidebar toggle"));
    lines
}

/// Placeholder for routes without a view.
pub fn coming_soon(formatter: &Formatter, route: Route) -> Vec<String> {
    vec![
        formatter.header_text(route.label()),
        "This page is coming soon.".into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::OutputPreferences;
    use crate::domain::PotInput;

    fn plain() -> Formatter {
        Formatter::with_preferences(OutputPreferences { plain_mode: true })
    }

    #[test]
    fn pot_card_shows_uncapped_label() {
        let mut pot = Pot::new(PotInput::new("Gift", 60.0, "#82C9D7"));
        pot.total = 90.0;
        let lines = pot_card(&plain(), 3, &pot, 10);
        assert_eq!(lines[0], "3. * Gift");
        assert_eq!(lines[1], "   Total Saved  $90.00");
        assert_eq!(lines[2], "   [##########]");
        assert_eq!(lines[3], "   150.00%  Target of $60");
    }

    #[test]
    fn closed_dialog_renders_notice() {
        let manager = PotsManager::default();
        assert_eq!(dialog(&plain(), &manager, 10), vec!["No dialog is open."]);
    }

    #[test]
    fn create_dialog_shows_errors_after_touch() {
        let mut manager = PotsManager::default();
        manager.open_create();
        manager.set_field(fields::NAME, &"x".repeat(31)).unwrap();
        let lines = dialog(&plain(), &manager, 10);
        assert!(lines.contains(&"    ! Too Long!".to_string()));
        assert!(lines.contains(&"    0 characters left".to_string()));
        assert!(!lines.iter().any(|line| line.contains("Target is required")));
    }

    #[test]
    fn collapsed_sidebar_is_compact() {
        let mut nav = Sidebar::new(Route::Pots, true);
        assert_eq!(sidebar(&plain(), &nav)[0], "O T B [P] R");
        nav.toggle();
        assert!(sidebar(&plain(), &nav)
            .iter()
            .any(|line| line.starts_with("  > Pots")));
    }
}
