//! Aggregate views over a transaction snapshot.
//!
//! Every function here is pure: it takes the result of a
//! [`Storage::transactions`] call plus a reference date and derives a
//! report from it. Nothing in this module touches the store.
//!
//! [`Storage::transactions`]: crate::Storage::transactions

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::transactions::{Transaction, TransactionKind};

/// Fixed palette the category breakdown cycles through, assigned in
/// order of first appearance of each category.
pub const PALETTE: [&str; 8] = [
    "hsl(var(--chart-1))",
    "hsl(var(--chart-2))",
    "hsl(var(--chart-3))",
    "hsl(var(--chart-4))",
    "hsl(var(--chart-5))",
    "hsl(var(--primary))",
    "hsl(var(--destructive))",
    "hsl(var(--warning))",
];

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub transaction_count: usize,
    pub average_transaction: Decimal,
    /// Expense sums keyed by category name.
    pub category_breakdown: BTreeMap<String, Decimal>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// `YYYY-MM` month key.
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub name: String,
    pub amount: Decimal,
    pub color: String,
}

fn in_month(transaction: &Transaction, year: i32, month: u32) -> bool {
    transaction.date.year() == year && transaction.date.month() == month
}

/// Calendar month `back` steps before the reference date's month.
fn month_back(reference: NaiveDate, back: i32) -> (i32, u32) {
    let total = reference.year() * 12 + reference.month0() as i32 - back;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

fn month_key(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

/// Income/expense totals and the expense-by-category map for the
/// reference date's calendar month.
///
/// An empty snapshot yields zeros across the board; averages never
/// divide by zero.
pub fn monthly_summary(transactions: &[Transaction], reference: NaiveDate) -> MonthlySummary {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    let mut transaction_count = 0usize;
    let mut category_breakdown: BTreeMap<String, Decimal> = BTreeMap::new();

    for transaction in transactions
        .iter()
        .filter(|t| in_month(t, reference.year(), reference.month()))
    {
        transaction_count += 1;
        match transaction.kind {
            TransactionKind::Income => total_income += transaction.amount,
            TransactionKind::Expense => {
                total_expenses += transaction.amount;
                *category_breakdown
                    .entry(transaction.category.clone())
                    .or_insert(Decimal::ZERO) += transaction.amount;
            }
        }
    }

    let average_transaction = if transaction_count == 0 {
        Decimal::ZERO
    } else {
        (total_income + total_expenses) / Decimal::from(transaction_count as u64)
    };

    MonthlySummary {
        balance: total_income - total_expenses,
        total_income,
        total_expenses,
        transaction_count,
        average_transaction,
        category_breakdown,
    }
}

/// Per-month income, expenses and net for the trailing six calendar
/// months (the reference month and the five before it), oldest first.
pub fn trend_series(transactions: &[Transaction], reference: NaiveDate) -> Vec<TrendPoint> {
    (0..6)
        .rev()
        .map(|back| {
            let (year, month) = month_back(reference, back);
            let mut income = Decimal::ZERO;
            let mut expenses = Decimal::ZERO;
            for transaction in transactions.iter().filter(|t| in_month(t, year, month)) {
                match transaction.kind {
                    TransactionKind::Income => income += transaction.amount,
                    TransactionKind::Expense => expenses += transaction.amount,
                }
            }
            TrendPoint {
                month: month_key(year, month),
                net: income - expenses,
                income,
                expenses,
            }
        })
        .collect()
}

/// Expense totals per category for the reference date's month, each
/// paired with a palette color by order of first appearance.
pub fn category_breakdown(transactions: &[Transaction], reference: NaiveDate) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();

    for transaction in transactions.iter().filter(|t| {
        t.kind == TransactionKind::Expense && in_month(t, reference.year(), reference.month())
    }) {
        match slices
            .iter_mut()
            .find(|slice| slice.name == transaction.category)
        {
            Some(slice) => slice.amount += transaction.amount,
            None => slices.push(CategorySlice {
                name: transaction.category.clone(),
                amount: transaction.amount,
                color: PALETTE[slices.len() % PALETTE.len()].to_string(),
            }),
        }
    }

    slices
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn tx(kind: TransactionKind, amount: i64, category: &str, on: &str) -> Transaction {
        Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            amount: Decimal::from(amount),
            category: category.to_string(),
            date: date(on),
            description: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_snapshot_yields_zeros() {
        let summary = monthly_summary(&[], date("2026-08-07"));

        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.total_expenses, Decimal::ZERO);
        assert_eq!(summary.balance, Decimal::ZERO);
        assert_eq!(summary.transaction_count, 0);
        assert_eq!(summary.average_transaction, Decimal::ZERO);
        assert!(summary.category_breakdown.is_empty());
    }

    #[test]
    fn summary_only_counts_the_reference_month() {
        let transactions = vec![
            tx(TransactionKind::Income, 30_000, "เงินเดือน", "2026-08-01"),
            tx(TransactionKind::Expense, 1_200, "อาหาร", "2026-08-03"),
            tx(TransactionKind::Expense, 800, "อาหาร", "2026-08-15"),
            tx(TransactionKind::Expense, 5_000, "ที่อยู่อาศัย", "2026-07-31"),
        ];

        let summary = monthly_summary(&transactions, date("2026-08-20"));

        assert_eq!(summary.total_income, Decimal::from(30_000));
        assert_eq!(summary.total_expenses, Decimal::from(2_000));
        assert_eq!(summary.balance, Decimal::from(28_000));
        assert_eq!(summary.transaction_count, 3);
        assert_eq!(
            summary.category_breakdown.get("อาหาร"),
            Some(&Decimal::from(2_000))
        );
        assert!(!summary.category_breakdown.contains_key("ที่อยู่อาศัย"));
    }

    #[test]
    fn trend_covers_six_months_oldest_first_across_year_boundary() {
        let transactions = vec![
            tx(TransactionKind::Income, 100, "เงินเดือน", "2025-09-10"),
            tx(TransactionKind::Expense, 40, "อาหาร", "2026-02-05"),
        ];

        let points = trend_series(&transactions, date("2026-02-14"));

        let months: Vec<&str> = points.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(
            months,
            ["2025-09", "2025-10", "2025-11", "2025-12", "2026-01", "2026-02"]
        );
        assert_eq!(points[0].income, Decimal::from(100));
        assert_eq!(points[0].net, Decimal::from(100));
        assert_eq!(points[5].expenses, Decimal::from(40));
        assert_eq!(points[5].net, Decimal::from(-40));
    }

    #[test]
    fn breakdown_assigns_palette_colors_in_first_seen_order() {
        let mut transactions = Vec::new();
        for i in 0..(PALETTE.len() + 1) {
            transactions.push(tx(
                TransactionKind::Expense,
                10,
                &format!("category-{i}"),
                "2026-08-02",
            ));
        }
        // A repeat of the first category must merge, not consume a color.
        transactions.push(tx(TransactionKind::Expense, 5, "category-0", "2026-08-04"));

        let slices = category_breakdown(&transactions, date("2026-08-07"));

        assert_eq!(slices.len(), PALETTE.len() + 1);
        assert_eq!(slices[0].color, PALETTE[0]);
        assert_eq!(slices[0].amount, Decimal::from(15));
        assert_eq!(slices[PALETTE.len()].color, PALETTE[0]);
    }

    #[test]
    fn breakdown_ignores_income_and_other_months() {
        let transactions = vec![
            tx(TransactionKind::Income, 100, "เงินเดือน", "2026-08-01"),
            tx(TransactionKind::Expense, 40, "อาหาร", "2026-07-20"),
        ];

        assert!(category_breakdown(&transactions, date("2026-08-07")).is_empty());
    }
}
