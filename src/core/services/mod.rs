pub mod chart_service;
pub mod filter_service;
pub mod submission_service;
pub mod summary_service;
pub mod transaction_service;

pub use chart_service::ChartService;
pub use filter_service::FilterService;
pub use submission_service::{Submission, SubmissionService};
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;
