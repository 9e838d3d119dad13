use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::navigation::Route;
use crate::cli::registry::{Arguments, CommandEntry};
use crate::config::KEYS;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change saved preferences",
        "config [show|set <key> <value>]",
        cmd_config,
    )
    .with_arguments(Arguments::Config)]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        return show_config(context);
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    KEYS.join("|")
                )));
            }
            let key = args[1].to_lowercase();
            let value = args[2..].join(" ");
            set_config_value(context, &key, value.trim())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}` (usage: config [show|set <key> <value>])"
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    let formatter = context.formatter();
    formatter.print_header("Configuration");
    let entries = context.config.entries();
    let rows: Vec<(&str, &str)> = entries
        .iter()
        .map(|(key, value)| (*key, value.as_str()))
        .collect();
    formatter.print_two_column(&rows);
    io::print_info(format!(
        "  Stored at {}",
        context.config_manager.path().display()
    ));
    Ok(())
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    if key == "start_route" {
        let route = Route::parse(value).ok_or_else(|| {
            CommandError::InvalidArguments(format!("unknown route `{value}`"))
        })?;
        updated.set(key, route.path())?;
    } else {
        updated.set(key, value)?;
    }

    context.apply_config(updated);
    context.persist_config()?;
    if key == "sidebar_collapsed" && context.sidebar.is_collapsed() != context.config.sidebar_collapsed {
        context.sidebar.toggle();
    }
    io::print_success(format!("Saved {key}."));
    if key == "fixture_path" {
        io::print_info("The fixture is read at startup; restart the shell to load it.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::core::process_script;
    use crate::config::ConfigManager;
    use tempfile::TempDir;

    #[test]
    fn set_persists_to_disk() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let context = process_script(
            manager,
            &["config set start_route pots", "config set sidebar_collapsed true"],
        )
        .unwrap();
        assert!(context.sidebar.is_collapsed());

        let reloaded = ConfigManager::with_base_dir(dir.path().to_path_buf())
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(reloaded.start_route, "/pots");
        assert!(reloaded.sidebar_collapsed);
    }

    #[test]
    fn invalid_route_is_not_saved() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let context = process_script(manager, &["config set start_route /login"]).unwrap();
        assert_eq!(context.config.start_route, "/overview");
        assert!(!context.config_manager.path().exists());
    }
}
