//! Validation of add-transaction form input and construction of records.

use crate::domain::{Category, TransactionInput, TransactionKind, TransactionRecord};
use crate::errors::{TrackerError, ValidationError};

/// Outcome of submitting the entry form.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Committed(TransactionRecord),
    Rejected(ValidationError),
}

impl Submission {
    pub fn is_committed(&self) -> bool {
        matches!(self, Submission::Committed(_))
    }

    pub fn record(&self) -> Option<&TransactionRecord> {
        match self {
            Submission::Committed(record) => Some(record),
            Submission::Rejected(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Submission::Committed(_) => None,
            Submission::Rejected(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<TransactionRecord, TrackerError> {
        match self {
            Submission::Committed(record) => Ok(record),
            Submission::Rejected(err) => Err(err.into()),
        }
    }
}

impl From<Result<TransactionRecord, ValidationError>> for Submission {
    fn from(result: Result<TransactionRecord, ValidationError>) -> Self {
        match result {
            Ok(record) => Submission::Committed(record),
            Err(err) => Submission::Rejected(err),
        }
    }
}

pub struct SubmissionService;

impl SubmissionService {
    /// Checks the raw fields and returns the trimmed description and parsed amount.
    pub fn validate(input: &TransactionInput) -> Result<(String, f64), ValidationError> {
        let description = input.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let amount = Self::parse_amount(&input.amount_text)?;
        Ok((description.to_string(), amount))
    }

    /// Validates `input` and builds a record with a fresh id.
    pub fn build(input: &TransactionInput) -> Result<TransactionRecord, ValidationError> {
        let (description, amount) = Self::validate(input)?;
        let category = match input.kind {
            TransactionKind::Income => None,
            TransactionKind::Expense => Some(Self::resolve_category(input.category_id.as_deref())),
        };
        Ok(TransactionRecord::new(description, amount, input.kind, category))
    }

    /// Unknown or missing ids fall back to [`Category::Other`].
    pub fn resolve_category(category_id: Option<&str>) -> Category {
        match category_id {
            None => Category::default(),
            Some(raw) => Category::resolve(raw).unwrap_or_else(|| {
                tracing::warn!(category_id = raw, "unknown category, using default");
                Category::default()
            }),
        }
    }

    fn parse_amount(text: &str) -> Result<f64, ValidationError> {
        let trimmed = text.trim();
        let amount: f64 = trimmed
            .parse()
            .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;
        if !amount.is_finite() {
            return Err(ValidationError::InvalidAmount(trimmed.to_string()));
        }
        if amount < 0.0 {
            return Err(ValidationError::NegativeAmount);
        }
        // -0.0 parses as non-negative; store it as a plain zero.
        Ok(if amount == 0.0 { 0.0 } else { amount })
    }
}
