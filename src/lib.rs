#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records expenses under free-text categories for a single
//! terminal session and reports itemized and per-category totals.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing, preferring `filter` over the built-in default
/// directive when provided. Only the first call has any effect.
pub fn init_with_filter(filter: Option<&str>) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(filter);
        tracing::debug!("Expense tracker tracing initialized.");
    });
}
