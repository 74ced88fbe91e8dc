use crate::domain::{CategoryFilter, TransactionRecord};

pub struct FilterService;

impl FilterService {
    /// Records visible under `filter`, in store order.
    pub fn visible<'a>(
        records: &'a [TransactionRecord],
        filter: CategoryFilter,
    ) -> Vec<&'a TransactionRecord> {
        match filter {
            CategoryFilter::All => records.iter().collect(),
            CategoryFilter::Only(category) => records
                .iter()
                .filter(|record| record.effective_category() == Some(category))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn all_returns_everything_in_order() {
        let records = vec![
            TransactionRecord::income("A", 100.0),
            TransactionRecord::expense("B", 40.0, Category::Food),
        ];
        let visible = FilterService::visible(&records, CategoryFilter::All);
        assert_eq!(visible, records.iter().collect::<Vec<_>>());
    }

    #[test]
    fn category_filter_never_matches_income() {
        let mut income = TransactionRecord::income("Refund", 10.0);
        income.category = Some(Category::Food);
        let records = vec![income, TransactionRecord::expense("Lunch", 12.0, Category::Food)];

        let visible = FilterService::visible(&records, CategoryFilter::Only(Category::Food));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].description, "Lunch");
    }

    #[test]
    fn uncategorised_expense_is_listed_under_other() {
        let mut record = TransactionRecord::expense("Gift", 25.0, Category::Other);
        record.category = None;
        let records = vec![record];
        let visible = FilterService::visible(&records, CategoryFilter::Only(Category::Other));
        assert_eq!(visible.len(), 1);
    }
}
