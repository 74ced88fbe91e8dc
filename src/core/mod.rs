//! Owned transaction state, the derivation services and the facade the
//! presentation layer talks to.

pub mod form;
pub mod format;
pub mod notifications;
pub mod services;
pub mod store;
pub mod time;
pub mod tracker;

pub use form::{EntryForm, FormState};
pub use format::{AmountFormatter, CurrencyFormatter};
pub use notifications::{Notification, NotificationCenter};
pub use services::Submission;
pub use store::TransactionStore;
pub use time::{Clock, SystemClock};
pub use tracker::Tracker;
