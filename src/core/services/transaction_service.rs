//! Store mutations with logging.

use uuid::Uuid;

use crate::core::store::TransactionStore;
use crate::domain::{Displayable, TransactionRecord};

/// Provides the write surface of the transaction store.
pub struct TransactionService;

impl TransactionService {
    /// Adds a new record at the head and returns its identifier.
    pub fn add(store: &mut TransactionStore, record: TransactionRecord) -> Uuid {
        tracing::debug!(id = %record.id, kind = %record.kind, amount = record.amount, "adding transaction");
        store.insert(record)
    }

    /// Removes the record identified by `id`. Unknown ids are ignored.
    pub fn remove(store: &mut TransactionStore, id: Uuid) -> Option<TransactionRecord> {
        let removed = store.remove_by_id(id);
        match &removed {
            Some(record) => {
                tracing::debug!(id = %id, record = %record.display_label(), "removed transaction")
            }
            None => tracing::debug!(id = %id, "delete ignored, transaction not found"),
        }
        removed
    }
}
