use finance_dashboard::cli::output::OutputPreferences;
use finance_dashboard::cli::ui::formatting::Formatter;
use finance_dashboard::cli::ui::views;
use finance_dashboard::core::services::OverviewService;
use finance_dashboard::core::PotStore;
use finance_dashboard::domain::DashboardData;

fn plain() -> Formatter {
    Formatter::with_preferences(OutputPreferences { plain_mode: true })
}

fn fixture() -> (DashboardData, PotStore) {
    let data = DashboardData::bundled().expect("bundled fixture");
    let store = PotStore::from_pots(data.pots.clone());
    (data, store)
}

#[test]
fn overview_lists_the_latest_activity() {
    let (data, store) = fixture();
    let overview = OverviewService::summarize(&data, &store);
    let lines = views::overview(&plain(), &overview);

    assert_eq!(lines[0], "=== Overview ===");
    assert!(lines.iter().any(|line| line.contains("Current Balance") && line.contains("$4,836.00")));
    assert!(lines.contains(&"  Total saved  $850".to_string()));
    assert!(lines.iter().any(|line| line.contains("Emma Richardson") && line.contains("+$75.50")));
    assert!(lines.iter().any(|line| line.contains("19 Aug 2024")));
    assert!(!lines.iter().any(|line| line.contains("Holiday")));
}

#[test]
fn overview_tracks_pot_mutations() {
    let (data, mut store) = fixture();
    let savings = store.id_at(0).unwrap();
    store.deposit(savings, 50.0).unwrap();
    let overview = OverviewService::summarize(&data, &store);
    assert_eq!(overview.total_saved, 900.0);
    assert_eq!(overview.pots[0].total, 209.0);
}

#[test]
fn pots_page_in_plain_mode() {
    let (data, _) = fixture();
    let store = PotStore::from_pots(data.pots.into_iter().take(4));
    let rendered = views::pots_page(&plain(), &store, 10).join("\n");

    insta::assert_snapshot!(rendered, @r"
    === Pots ===
    + Add New Pot: pot new

    1. * Savings
       Total Saved  $159.00
       [#.........]
       7.95%  Target of $2,000
       + Add Money: pot add 1   Withdraw: pot withdraw 1

    2. * Concert Ticket
       Total Saved  $110.00
       [#######...]
       73.33%  Target of $150
       + Add Money: pot add 2   Withdraw: pot withdraw 2

    3. * Gift
       Total Saved  $40.00
       [#######...]
       66.67%  Target of $60
       + Add Money: pot add 3   Withdraw: pot withdraw 3

    4. * New Laptop
       Total Saved  $10.00
       [..........]
       1.00%  Target of $1,000
       + Add Money: pot add 4   Withdraw: pot withdraw 4
    ");
}
