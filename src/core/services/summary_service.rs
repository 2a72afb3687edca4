use crate::domain::ExpenseStore;

/// Total spent under one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Per-category totals in category insertion order plus the grand total.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseSummary {
    pub categories: Vec<CategoryTotal>,
    pub grand_total: f64,
}

impl ExpenseSummary {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn summarize(store: &ExpenseStore) -> ExpenseSummary {
        let mut summary = ExpenseSummary::default();
        for ledger in store.ledgers() {
            let total = ledger.total();
            summary.grand_total += total;
            summary.categories.push(CategoryTotal {
                category: ledger.name().to_string(),
                total,
            });
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::ExpenseService;

    fn store_with(entries: &[(&str, &str, f64)]) -> ExpenseStore {
        let mut store = ExpenseStore::new();
        for (description, category, amount) in entries {
            ExpenseService::record(&mut store, description, category, *amount).unwrap();
        }
        store
    }

    #[test]
    fn summarize_empty_store() {
        let summary = SummaryService::summarize(&ExpenseStore::new());
        assert!(summary.is_empty());
        assert_eq!(summary.grand_total, 0.0);
    }

    #[test]
    fn summarize_groups_by_exact_category() {
        let store = store_with(&[
            ("Coffee", "Food", 3.5),
            ("Bus", "Transport", 2.0),
            ("Lunch", "Food", 8.0),
            ("Snack", "food", 1.25),
        ]);
        let summary = SummaryService::summarize(&store);

        assert_eq!(
            summary.categories,
            vec![
                CategoryTotal {
                    category: "Food".into(),
                    total: 11.5
                },
                CategoryTotal {
                    category: "Transport".into(),
                    total: 2.0
                },
                CategoryTotal {
                    category: "food".into(),
                    total: 1.25
                },
            ]
        );
        assert_eq!(summary.grand_total, 14.75);
    }

    #[test]
    fn grand_total_matches_sum_of_recorded_amounts() {
        let amounts = [0.1, 0.2, 0.3, 12.75, 0.0, 99.99];
        let mut store = ExpenseStore::new();
        let mut expected = 0.0;
        for (index, amount) in amounts.iter().enumerate() {
            let category = if index % 2 == 0 { "Even" } else { "Odd" };
            ExpenseService::record(&mut store, "item", category, *amount).unwrap();
            expected += amount;
        }

        let summary = SummaryService::summarize(&store);
        let subtotal_sum: f64 = summary.categories.iter().map(|entry| entry.total).sum();
        assert!((summary.grand_total - expected).abs() < 1e-9);
        assert!((subtotal_sum - summary.grand_total).abs() < 1e-9);
    }
}
