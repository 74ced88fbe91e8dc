pub mod category;
pub mod common;
pub mod summary;
pub mod transaction;

pub use category::{Category, CategoryFilter};
pub use common::{Displayable, Identifiable};
pub use summary::{ChartSlice, Summary};
pub use transaction::{TransactionInput, TransactionKind, TransactionRecord};
