//! Aggregation over dated, amount-bearing records.
//!
//! Flat record lists are reduced into grouped totals: per category, per
//! month, per day. Month keys are zero-padded `YYYY-MM`, so lexicographic
//! order equals chronological order. Empty input always yields an empty
//! result, never an error.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::clock;
use crate::entities::{expense, income};

/// Reduces records into grouped sums. The grouping key doubles as the
/// tie-break, so every key appears exactly once; values conserve the grand
/// total of the input.
pub fn totals_by<T, K, KF, AF>(records: &[T], key_of: KF, amount_of: AF) -> BTreeMap<K, f64>
where
    K: Ord,
    KF: Fn(&T) -> K,
    AF: Fn(&T) -> f64,
{
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(key_of(record)).or_insert(0.0) += amount_of(record);
    }
    totals
}

/// One month of money movement with independent income/expense sub-totals.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyFlow {
    /// `YYYY-MM` month key
    pub month: String,
    /// Total received this month
    pub income: f64,
    /// Total spent this month
    pub expense: f64,
}

/// Merges expenses and income sharing a month key into one row per month,
/// ascending. A month that only appears in one input still gets a row, with
/// the other sub-total at zero.
#[must_use]
pub fn monthly_flows(expenses: &[expense::Model], income: &[income::Model]) -> Vec<MonthlyFlow> {
    let mut months: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for record in expenses {
        let entry = months.entry(clock::month_key(record.date)).or_insert((0.0, 0.0));
        entry.1 += record.amount;
    }
    for record in income {
        let entry = months.entry(clock::month_key(record.date)).or_insert((0.0, 0.0));
        entry.0 += record.amount;
    }
    months
        .into_iter()
        .map(|(month, (income, expense))| MonthlyFlow {
            month,
            income,
            expense,
        })
        .collect()
}

/// Total spent on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub day: NaiveDate,
    pub amount: f64,
}

/// Per-day spending for `window_days` consecutive days ending at `today`,
/// oldest first. Days without expenses appear with a zero amount; the
/// window is anchored to today, not to the latest record.
#[must_use]
pub fn daily_expense_series(
    expenses: &[expense::Model],
    window_days: usize,
    today: NaiveDate,
) -> Vec<DailyTotal> {
    let by_day = totals_by(expenses, |e| e.date, |e| e.amount);
    window(window_days, today)
        .map(|day| DailyTotal {
            day,
            amount: by_day.get(&day).copied().unwrap_or(0.0),
        })
        .collect()
}

/// `window_days` consecutive calendar days ending at `today`, oldest first.
pub(crate) fn window(window_days: usize, today: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..window_days)
        .rev()
        .map(move |back| today - Duration::days(back as i64))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{day, expense_on, income_on};

    #[test]
    fn test_totals_by_conserves_grand_total() {
        let expenses = vec![
            expense_on(10.0, "Food", day(2024, 1, 5)),
            expense_on(2.5, "Food", day(2024, 1, 6)),
            expense_on(7.5, "Transport", day(2024, 1, 6)),
        ];

        let by_category = totals_by(&expenses, |e| e.category.clone(), |e| e.amount);
        let grand_total: f64 = expenses.iter().map(|e| e.amount).sum();
        let grouped_total: f64 = by_category.values().sum();

        assert_eq!(grouped_total, grand_total);
        assert_eq!(by_category["Food"], 12.5);
        assert_eq!(by_category["Transport"], 7.5);
    }

    #[test]
    fn test_totals_by_empty_input() {
        let by_category = totals_by(&[] as &[expense::Model], |e| e.category.clone(), |e| e.amount);
        assert!(by_category.is_empty());
    }

    #[test]
    fn test_monthly_flows_merges_income_and_expenses() {
        let expenses = vec![
            expense_on(10.0, "Food", day(2024, 1, 5)),
            expense_on(5.0, "Food", day(2024, 2, 1)),
        ];
        let income = vec![income_on(100.0, day(2024, 1, 20))];

        let flows = monthly_flows(&expenses, &income);

        assert_eq!(
            flows,
            vec![
                MonthlyFlow {
                    month: "2024-01".to_string(),
                    income: 100.0,
                    expense: 10.0,
                },
                MonthlyFlow {
                    month: "2024-02".to_string(),
                    income: 0.0,
                    expense: 5.0,
                },
            ]
        );
    }

    #[test]
    fn test_monthly_flows_empty_inputs() {
        assert!(monthly_flows(&[], &[]).is_empty());
    }

    #[test]
    fn test_monthly_flows_orders_across_years() {
        let expenses = vec![
            expense_on(1.0, "Food", day(2024, 1, 1)),
            expense_on(2.0, "Food", day(2023, 12, 31)),
        ];
        let flows = monthly_flows(&expenses, &[]);
        let months: Vec<&str> = flows.iter().map(|f| f.month.as_str()).collect();
        assert_eq!(months, vec!["2023-12", "2024-01"]);
    }

    #[test]
    fn test_daily_series_is_zero_filled_and_anchored_to_today() {
        let today = day(2024, 3, 10);
        let expenses = vec![
            expense_on(4.0, "Food", day(2024, 3, 9)),
            expense_on(6.0, "Food", day(2024, 3, 9)),
            // Outside the window; must not appear.
            expense_on(99.0, "Food", day(2024, 3, 1)),
        ];

        let series = daily_expense_series(&expenses, 3, today);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].day, day(2024, 3, 8));
        assert_eq!(series[0].amount, 0.0);
        assert_eq!(series[1].day, day(2024, 3, 9));
        assert_eq!(series[1].amount, 10.0);
        assert_eq!(series[2].day, today);
        assert_eq!(series[2].amount, 0.0);
    }
}
