//! Routes and the sidebar model.

use std::fmt;

/// A screen reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Overview,
    Transactions,
    Budgets,
    Pots,
    RecurringBills,
}

impl Route {
    /// Sidebar order.
    pub const ALL: [Route; 5] = [
        Route::Overview,
        Route::Transactions,
        Route::Budgets,
        Route::Pots,
        Route::RecurringBills,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Overview => "/overview",
            Route::Transactions => "/transactions",
            Route::Budgets => "/budgets",
            Route::Pots => "/pots",
            Route::RecurringBills => "/recurring-bills",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Overview => "Overview",
            Route::Transactions => "Transactions",
            Route::Budgets => "Budgets",
            Route::Pots => "Pots",
            Route::RecurringBills => "Recurring Bills",
        }
    }

    /// Accepts `/pots`, `pots` or the label, case-insensitively.
    pub fn parse(input: &str) -> Option<Route> {
        let needle = input.trim().trim_start_matches('/').to_ascii_lowercase();
        Route::ALL.into_iter().find(|route| {
            route.path().trim_start_matches('/') == needle
                || route.label().eq_ignore_ascii_case(&needle)
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// One rendered sidebar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    active: Route,
    collapsed: bool,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new(Route::Overview, false)
    }
}

impl Sidebar {
    pub fn new(active: Route, collapsed: bool) -> Self {
        Self { active, collapsed }
    }

    pub fn active(&self) -> Route {
        self.active
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = %self.active, to = %route, "Navigate");
        self.active = route;
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// "Minimize Menu". Returns the new collapsed state.
    pub fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    pub fn items(&self) -> Vec<NavItem> {
        Route::ALL
            .into_iter()
            .map(|route| NavItem {
                route,
                active: route == self.active,
            })
            .collect()
    }
}
