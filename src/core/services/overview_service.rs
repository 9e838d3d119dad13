use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::store::PotStore;
use crate::currency::{format_signed_currency, FormatOptions};
use crate::domain::{Balance, Budget, DashboardData, RecurringBills, Transaction};

/// Number of pots shown on the overview.
pub const OVERVIEW_POTS: usize = 4;
pub const OVERVIEW_TRANSACTIONS: usize = 5;
pub const OVERVIEW_BUDGETS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct PotTile {
    pub id: Uuid,
    pub name: String,
    pub theme: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub avatar: String,
    pub name: String,
    pub amount: f64,
    /// `+$75.50` for income, `-$55.50` for spending.
    pub signed_amount: String,
    /// `19 Aug 2024`.
    pub date: String,
    pub is_income: bool,
}

impl TransactionRow {
    fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            avatar: transaction.avatar.clone(),
            name: transaction.name.clone(),
            amount: transaction.amount,
            signed_amount: format_signed_currency(transaction.amount, FormatOptions::default()),
            date: format_short_date(transaction.date),
            is_income: transaction.is_income(),
        }
    }
}

/// Everything the overview screen renders, computed in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub balance: Balance,
    pub total_saved: f64,
    pub pots: Vec<PotTile>,
    pub transactions: Vec<TransactionRow>,
    pub budgets: Vec<Budget>,
    pub recurring_bills: RecurringBills,
}

pub struct OverviewService;

impl OverviewService {
    /// Pot figures come from the live store so overview totals reflect
    /// deposits and withdrawals made on the pots page.
    pub fn summarize(data: &DashboardData, store: &PotStore) -> Overview {
        let pots = store
            .iter()
            .take(OVERVIEW_POTS)
            .map(|pot| PotTile {
                id: pot.id,
                name: pot.name.clone(),
                theme: pot.theme.clone(),
                total: pot.total,
            })
            .collect();
        let transactions = data
            .transactions
            .iter()
            .take(OVERVIEW_TRANSACTIONS)
            .map(TransactionRow::from_transaction)
            .collect();

        Overview {
            balance: data.balance,
            total_saved: store.total_saved(),
            pots,
            transactions,
            budgets: data.budgets.iter().take(OVERVIEW_BUDGETS).cloned().collect(),
            recurring_bills: data.recurring_bills,
        }
    }
}

/// Day without padding, abbreviated month, full year.
pub fn format_short_date(date: DateTime<Utc>) -> String {
    date.format("%-d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixture() -> (DashboardData, PotStore) {
        let data = DashboardData::bundled().expect("bundled fixture");
        let store = PotStore::from_pots(data.pots.clone());
        (data, store)
    }

    #[test]
    fn summarize_limits_sections() {
        let (data, store) = fixture();
        let overview = OverviewService::summarize(&data, &store);
        assert_eq!(overview.pots.len(), 4);
        assert_eq!(overview.pots[0].name, "Savings");
        assert_eq!(overview.transactions.len(), 5);
        assert_eq!(overview.budgets.len(), data.budgets.len().min(5));
        assert_eq!(overview.total_saved, 850.0);
        assert_eq!(overview.recurring_bills, RecurringBills::default());
    }

    #[test]
    fn transactions_are_signed_and_dated() {
        let (data, store) = fixture();
        let overview = OverviewService::summarize(&data, &store);
        let first = &overview.transactions[0];
        assert_eq!(first.name, "Emma Richardson");
        assert_eq!(first.signed_amount, "+$75.50");
        assert_eq!(first.date, "19 Aug 2024");
        assert!(first.is_income);
        let spending = overview
            .transactions
            .iter()
            .find(|row| !row.is_income)
            .expect("fixture has spending");
        assert!(spending.signed_amount.starts_with("-$"));
    }

    #[test]
    fn total_saved_tracks_live_store() {
        let (data, mut store) = fixture();
        let savings = store.id_at(0).unwrap();
        store.deposit(savings, 50.0).unwrap();
        let overview = OverviewService::summarize(&data, &store);
        assert_eq!(overview.total_saved, 900.0);
        assert_eq!(overview.pots[0].total, 209.0);
    }

    #[test]
    fn short_date_has_no_padding() {
        let date = Utc.with_ymd_and_hms(2024, 8, 3, 9, 0, 0).unwrap();
        assert_eq!(format_short_date(date), "3 Aug 2024");
    }
}
