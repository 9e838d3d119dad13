#![doc(test(attr(deny(warnings))))]

//! Finance Dashboard provides the savings-pot engine, form validation and
//! dialog orchestration behind a personal-finance dashboard, together with
//! the overview aggregation and a terminal front end.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod forms;
pub mod utils;

pub use crate::core::errors::{CliError, DashboardError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Dashboard tracing initialized.");
    });
}
