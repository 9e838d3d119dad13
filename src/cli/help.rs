use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::ui::formatting::Formatter;

pub fn print_overview(registry: &CommandRegistry) {
    output_section("Available commands");
    let rows: Vec<(&str, &str)> = registry
        .entries()
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    Formatter::new().print_two_column(&rows);
    io::print_info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    io::print_info(format!("  Description: {}", entry.description));
    io::print_info(format!("  Usage: {}", entry.usage));
}
