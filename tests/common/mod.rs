#![allow(dead_code)]

use std::sync::Mutex;

use assert_cmd::Command;
use finance_dashboard::core::PotsManager;
use finance_dashboard::domain::{DashboardData, Pot, PotInput};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated data directory for one test.
pub fn temp_home() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// CLI command in script mode with its own data directory.
pub fn script_cli(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("finance_dashboard_cli").expect("binary built");
    cmd.env("FINANCE_DASHBOARD_CLI_SCRIPT", "1")
        .env("FINANCE_DASHBOARD_HOME", home)
        .env_remove("RUST_LOG");
    cmd
}

pub fn pot(name: &str, target: f64, total: f64, theme: &str) -> Pot {
    let mut pot = Pot::new(PotInput::new(name, target, theme));
    pot.total = total;
    pot
}

/// Manager seeded from the bundled fixture.
pub fn fixture_manager() -> PotsManager {
    let data = DashboardData::bundled().expect("bundled fixture");
    PotsManager::from_pots(data.pots)
}
