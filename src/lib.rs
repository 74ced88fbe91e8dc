#![doc(test(attr(deny(warnings))))]

//! Tracker Core holds the in-memory transaction list behind a personal
//! income/expense screen and derives every view the screen shows from it:
//! balance totals, pie-chart slices, the category-filtered list and the
//! validated records produced by the entry form.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

pub use crate::core::{
    EntryForm, FormState, Notification, NotificationCenter, Submission, TransactionStore,
    Tracker,
};
pub use crate::domain::{
    Category, CategoryFilter, ChartSlice, Summary, TransactionInput, TransactionKind,
    TransactionRecord,
};
pub use crate::errors::{TrackerError, ValidationError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tracker Core tracing initialized.");
    });
}
