use crate::domain::{Summary, TransactionKind, TransactionRecord};

pub struct SummaryService;

impl SummaryService {
    /// Totals income and expense over `records`; `total = income - expense`.
    pub fn summarize(records: &[TransactionRecord]) -> Summary {
        let income = Self::total_for(records, TransactionKind::Income);
        let expense = Self::total_for(records, TransactionKind::Expense);
        Summary {
            total: income - expense,
            income,
            expense,
        }
    }

    /// Sum of the unsigned amounts of every record of `kind`.
    pub fn total_for(records: &[TransactionRecord], kind: TransactionKind) -> f64 {
        records
            .iter()
            .filter(|record| record.kind == kind)
            .map(|record| record.amount)
            .sum()
    }
}
