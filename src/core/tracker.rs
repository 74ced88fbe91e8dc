//! Facade consumed by the presentation layer. Owns the store and recomputes
//! every derived view from it on demand.

use uuid::Uuid;

use crate::config::TrackerConfig;
use crate::core::format::AmountFormatter;
use crate::core::notifications::{Notification, NotificationCenter};
use crate::core::services::{
    ChartService, FilterService, Submission, SubmissionService, SummaryService,
    TransactionService,
};
use crate::core::store::TransactionStore;
use crate::core::time::{Clock, SystemClock};
use crate::domain::{CategoryFilter, ChartSlice, Summary, TransactionInput, TransactionRecord};
use crate::errors::TrackerError;

pub const ADDED_MESSAGE: &str = "Transaction added";
pub const DELETED_MESSAGE: &str = "Transaction deleted";

pub struct Tracker {
    store: TransactionStore,
    filter: CategoryFilter,
    notifications: NotificationCenter,
    config: TrackerConfig,
    clock: Box<dyn Clock>,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: TrackerConfig, clock: Box<dyn Clock>) -> Self {
        let store = if config.seed_sample_data {
            TransactionStore::with_sample_data()
        } else {
            TransactionStore::new()
        };
        Self::from_store(store, config, clock)
    }

    pub fn from_store(
        store: TransactionStore,
        config: TrackerConfig,
        clock: Box<dyn Clock>,
    ) -> Self {
        tracing::info!(records = store.len(), "tracker ready");
        Self {
            store,
            filter: CategoryFilter::All,
            notifications: NotificationCenter::new(config.dismiss_after()),
            config,
            clock,
        }
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn summary(&self) -> Summary {
        SummaryService::summarize(self.store.all())
    }

    pub fn chart_slices(&self) -> Vec<ChartSlice> {
        ChartService::slices(self.store.all(), self.config.palette.len())
    }

    pub fn chart_color(&self, slice: &ChartSlice) -> Option<&str> {
        ChartService::color_for(slice, &self.config.palette)
    }

    pub fn visible_transactions(&self) -> Vec<&TransactionRecord> {
        FilterService::visible(self.store.all(), self.filter)
    }

    pub fn selected_filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        tracing::debug!(filter = %filter, "category filter selected");
        self.filter = filter;
    }

    /// Applies a filter-bar selection. Unknown ids keep the current filter.
    pub fn select_category(&mut self, category_id: &str) -> Result<(), TrackerError> {
        let filter = CategoryFilter::parse(category_id)
            .ok_or_else(|| TrackerError::UnknownCategory(category_id.to_string()))?;
        self.set_filter(filter);
        Ok(())
    }

    /// Validates `input` and, when accepted, stores the new record at the head.
    pub fn submit_transaction(&mut self, input: &TransactionInput) -> Submission {
        let submission = Submission::from(SubmissionService::build(input));
        match &submission {
            Submission::Committed(record) => {
                TransactionService::add(&mut self.store, record.clone());
                let now = self.clock.now();
                self.notifications.show(ADDED_MESSAGE, now);
            }
            Submission::Rejected(err) => {
                tracing::info!(error = %err, "submission rejected");
            }
        }
        submission
    }

    /// Deletes the record with `id`; unknown ids are silently ignored.
    pub fn delete_transaction(&mut self, id: Uuid) {
        if TransactionService::remove(&mut self.store, id).is_some() {
            let now = self.clock.now();
            self.notifications.show(DELETED_MESSAGE, now);
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// Clears the notification if its display window has elapsed.
    pub fn tick(&mut self) -> Option<Notification> {
        let now = self.clock.now();
        self.notifications.tick(now)
    }

    pub fn dismiss_notification(&mut self) -> Option<Notification> {
        self.notifications.dismiss()
    }

    pub fn formatter(&self) -> AmountFormatter {
        AmountFormatter::from_config(&self.config)
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
