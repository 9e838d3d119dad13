mod common;

use common::{fixture_manager, pot};
use finance_dashboard::core::progress::{clamped_percentage, percentage};
use finance_dashboard::core::{DialogState, PotsManager, Progress, SubmitOutcome};
use finance_dashboard::forms::{fields, messages};
use finance_dashboard::DashboardError;

fn validation_message(err: DashboardError, field: &str) -> String {
    match err {
        DashboardError::Validation(errors) => errors.get(field).unwrap_or_default().to_string(),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn deposit_scenario_updates_total_and_bar() {
    let savings = pot("Savings", 2000.0, 159.0, "#277C78");
    let id = savings.id;
    let mut manager = PotsManager::from_pots([savings]);

    manager.open_deposit(id).unwrap();
    manager.set_field(fields::AMOUNT, "50").unwrap();
    assert_eq!(
        manager.submit().unwrap(),
        SubmitOutcome::Deposited { id, total: 209.0 }
    );

    let progress = Progress::for_pot(manager.store().get(id).unwrap());
    assert!((progress.bar_percent - 10.45).abs() < 1e-9);
}

#[test]
fn withdraw_scenario_is_strictly_below_total() {
    let gift = pot("Gift", 500.0, 100.0, "#82C9D7");
    let id = gift.id;
    let mut manager = PotsManager::from_pots([gift]);

    manager.open_withdraw(id).unwrap();
    manager.set_field(fields::AMOUNT, "100").unwrap();
    let err = manager.submit().unwrap_err();
    assert_eq!(
        validation_message(err, fields::AMOUNT),
        messages::AMOUNT_OVER_TOTAL
    );
    assert_eq!(manager.store().get(id).unwrap().total, 100.0);

    manager.set_field(fields::AMOUNT, "99").unwrap();
    assert_eq!(
        manager.submit().unwrap(),
        SubmitOutcome::Withdrew { id, total: 1.0 }
    );
}

#[test]
fn long_name_is_rejected_before_mutation() {
    let mut manager = fixture_manager();
    manager.open_create();
    manager
        .set_field(fields::NAME, "A name that is thirty-one chars")
        .unwrap();
    manager.set_field(fields::TARGET, "100").unwrap();
    manager.select_color("Red").unwrap();

    let err = manager.submit().unwrap_err();
    assert_eq!(validation_message(err, fields::NAME), messages::NAME_TOO_LONG);
    assert_eq!(manager.store().len(), 5);
    assert_eq!(manager.state(), DialogState::Creating);
}

#[test]
fn duplicate_theme_rules() {
    let mut manager = fixture_manager();
    let savings = manager.store().id_at(0).unwrap();

    manager.open_create();
    manager.set_field(fields::NAME, "Duplicate").unwrap();
    manager.set_field(fields::TARGET, "10").unwrap();
    manager.set_field(fields::COLOR, "#277C78").unwrap();
    let err = manager.submit().unwrap_err();
    assert_eq!(validation_message(err, fields::COLOR), messages::COLOR_REQUIRED);

    manager.open_edit(savings).unwrap();
    manager.set_field(fields::COLOR, "#277C78").unwrap();
    assert_eq!(manager.submit().unwrap(), SubmitOutcome::Updated(savings));
}

#[test]
fn delete_shifts_positions_and_stale_ids_fail() {
    let mut manager = fixture_manager();
    let store = manager.store();
    let (first, second, third) = (
        store.id_at(0).unwrap(),
        store.id_at(1).unwrap(),
        store.id_at(2).unwrap(),
    );

    manager.open_delete(second).unwrap();
    let SubmitOutcome::Deleted(removed) = manager.submit().unwrap() else {
        panic!("expected deletion");
    };
    assert_eq!(removed.name, "Concert Ticket");
    assert_eq!(manager.store().len(), 4);
    assert_eq!(manager.store().id_at(0), Some(first));
    assert_eq!(manager.store().id_at(1), Some(third));

    assert!(matches!(
        manager.open_deposit(second),
        Err(DashboardError::PotNotFound(_))
    ));
    assert_eq!(manager.state(), DialogState::Closed);
}

#[test]
fn bar_width_is_always_clamped() {
    for (total, target) in [(0.0, 100.0), (50.0, 100.0), (300.0, 150.0), (10.0, 0.0)] {
        let bar = clamped_percentage(total, target);
        assert!((0.0..=100.0).contains(&bar), "{total}/{target} gave {bar}");
    }
    assert_eq!(percentage(300.0, 150.0), 200.0);
}

#[test]
fn deposits_accumulate_without_cap() {
    let mut manager = fixture_manager();
    let gift = manager.store().id_at(2).unwrap();
    for amount in ["15", "30", "$1,000"] {
        manager.open_deposit(gift).unwrap();
        manager.set_field(fields::AMOUNT, amount).unwrap();
        manager.submit().unwrap();
    }
    let pot = manager.store().get(gift).unwrap();
    assert_eq!(pot.total, 1085.0);
    assert_eq!(Progress::for_pot(pot).bar_percent, 100.0);
}
