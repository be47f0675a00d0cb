mod common;

use common::{date, march_snapshot};
use expense_core::{
    aggregation, currency, taxonomy, Category, CategoryBreakdown, Expense,
};

#[test]
fn march_snapshot_statistics() {
    let expenses = march_snapshot();

    assert_eq!(aggregation::total(&expenses), 100_000.0);
    assert_eq!(
        aggregation::breakdown_by_category(&expenses),
        vec![
            CategoryBreakdown {
                category: Category::FoodAndDining,
                total_amount: 80_000.0,
            },
            CategoryBreakdown {
                category: Category::Transportation,
                total_amount: 20_000.0,
            },
        ]
    );
    assert_eq!(
        aggregation::most_frequent_category_by_amount(&expenses),
        "Food & Dining"
    );
    assert!((aggregation::average(&expenses) - 100_000.0 / 3.0).abs() < 1e-9);
    assert_eq!(aggregation::maximum(&expenses), 50_000.0);
}

#[test]
fn total_of_two_is_their_sum() {
    let expenses = vec![
        Expense::new(1_250.0, "a", "Other", date(2024, 1, 1)),
        Expense::new(4_000.0, "b", "Shopping", date(2024, 1, 2)),
    ];
    assert_eq!(aggregation::total(&expenses), 5_250.0);
}

#[test]
fn breakdown_never_exceeds_total() {
    let known: Vec<Expense> = taxonomy::labels()
        .enumerate()
        .map(|(i, label)| Expense::new((i as f64 + 1.0) * 1_000.0, "x", label, date(2024, 6, 1)))
        .collect();
    let breakdown_sum = |list: &[Expense]| -> f64 {
        aggregation::breakdown_by_category(list)
            .iter()
            .map(|entry| entry.total_amount)
            .sum()
    };
    assert_eq!(breakdown_sum(&known), aggregation::total(&known));

    let mut mixed = known.clone();
    mixed.push(Expense::new(999.0, "y", "Pets", date(2024, 6, 2)));
    assert!(breakdown_sum(&mixed) < aggregation::total(&mixed));
}

#[test]
fn breakdown_follows_taxonomy_order() {
    let expenses = vec![
        Expense::new(10.0, "late", "Other", date(2024, 6, 1)),
        Expense::new(10.0, "early", "Transportation", date(2024, 6, 1)),
        Expense::new(10.0, "middle", "Healthcare", date(2024, 6, 1)),
    ];
    let order: Vec<_> = aggregation::breakdown_by_category(&expenses)
        .into_iter()
        .map(|entry| entry.category)
        .collect();
    assert_eq!(
        order,
        vec![Category::Transportation, Category::Healthcare, Category::Other]
    );
}

#[test]
fn average_is_defined_for_any_size() {
    assert_eq!(aggregation::average(&[]), 0.0);
    let one = vec![Expense::new(42.0, "x", "Other", date(2024, 6, 1))];
    assert_eq!(aggregation::average(&one), 42.0);
}

#[test]
fn formatted_totals_round_trip() {
    let expenses = march_snapshot();
    let rendered = currency::format_amount(aggregation::total(&expenses));
    assert_eq!(rendered, "100,000₫");
    assert_eq!(currency::parse_amount(&rendered), 100_000.0);
    assert_eq!(currency::parse_amount(&currency::format_amount(50_000.0)), 50_000.0);
}
