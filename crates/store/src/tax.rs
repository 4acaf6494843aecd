//! Progressive income-tax estimate.
//!
//! The schedule ships with the Thai personal income tax parameters
//! (2024 tax year) but everything is carried in [`TaxSchedule`], so a
//! different bracket table or deduction set is a constructor away.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::transactions::{Transaction, TransactionKind};

/// One contiguous income range with its marginal rate.
#[derive(Clone, Debug)]
pub struct TaxBracket {
    pub lower: Decimal,
    /// `None` marks the unbounded top bracket.
    pub upper: Option<Decimal>,
    /// Marginal rate as a percentage (5 means 5%).
    pub rate: Decimal,
}

impl TaxBracket {
    fn new(lower: i64, upper: Option<i64>, rate: i64) -> Self {
        Self {
            lower: Decimal::from(lower),
            upper: upper.map(Decimal::from),
            rate: Decimal::from(rate),
        }
    }
}

/// Deduction parameters plus the ordered, contiguous bracket table.
///
/// Brackets must be sorted ascending and non-overlapping, with rates
/// monotonically non-decreasing and only the last bracket unbounded.
#[derive(Clone, Debug)]
pub struct TaxSchedule {
    pub personal_deduction: Decimal,
    pub social_security_rate: Decimal,
    pub social_security_cap: Decimal,
    pub provident_fund_rate: Decimal,
    pub provident_fund_cap: Decimal,
    pub brackets: Vec<TaxBracket>,
}

impl Default for TaxSchedule {
    /// Thai personal income tax, 2024 tax year.
    fn default() -> Self {
        Self {
            personal_deduction: Decimal::from(60_000),
            social_security_rate: Decimal::new(5, 2),
            social_security_cap: Decimal::from(15_000),
            provident_fund_rate: Decimal::new(3, 2),
            provident_fund_cap: Decimal::from(500_000),
            brackets: vec![
                TaxBracket::new(0, Some(150_000), 0),
                TaxBracket::new(150_000, Some(300_000), 5),
                TaxBracket::new(300_000, Some(500_000), 10),
                TaxBracket::new(500_000, Some(750_000), 15),
                TaxBracket::new(750_000, Some(1_000_000), 20),
                TaxBracket::new(1_000_000, Some(2_000_000), 25),
                TaxBracket::new(2_000_000, Some(5_000_000), 30),
                TaxBracket::new(5_000_000, None, 35),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketContribution {
    pub lower: Decimal,
    pub upper: Option<Decimal>,
    pub rate: Decimal,
    pub amount: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAverage {
    pub gross_income: Decimal,
    pub net_income: Decimal,
    pub tax: Decimal,
    pub social_security: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxEstimate {
    pub taxable_income: Decimal,
    pub tax: Decimal,
    pub net_income: Decimal,
    pub social_security: Decimal,
    pub provident_fund: Decimal,
    /// Only brackets that contributed a nonzero amount.
    pub brackets: Vec<BracketContribution>,
    pub monthly_average: MonthlyAverage,
}

/// Sum of income transactions dated in the given calendar year.
pub fn annual_income(transactions: &[Transaction], year: i32) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income && t.date.year() == year)
        .map(|t| t.amount)
        .sum()
}

/// Progressive estimate for one annual income figure.
pub fn estimate(annual_income: Decimal, schedule: &TaxSchedule) -> TaxEstimate {
    let social_security =
        (annual_income * schedule.social_security_rate).min(schedule.social_security_cap);
    let provident_fund =
        (annual_income * schedule.provident_fund_rate).min(schedule.provident_fund_cap);
    let taxable_income = (annual_income
        - schedule.personal_deduction
        - social_security
        - provident_fund)
        .max(Decimal::ZERO);

    let mut tax = Decimal::ZERO;
    let mut brackets = Vec::new();
    for bracket in &schedule.brackets {
        if taxable_income <= bracket.lower {
            continue;
        }
        let reached = match bracket.upper {
            Some(upper) => taxable_income.min(upper),
            None => taxable_income,
        };
        let amount = (reached - bracket.lower) * bracket.rate / Decimal::ONE_HUNDRED;
        tax += amount;
        if !amount.is_zero() {
            brackets.push(BracketContribution {
                lower: bracket.lower,
                upper: bracket.upper,
                rate: bracket.rate,
                amount,
            });
        }
    }

    let net_income = annual_income - tax - social_security;
    let twelve = Decimal::from(12);
    TaxEstimate {
        monthly_average: MonthlyAverage {
            gross_income: annual_income / twelve,
            net_income: net_income / twelve,
            tax: tax / twelve,
            social_security: social_security / twelve,
        },
        taxable_income,
        tax,
        net_income,
        social_security,
        provident_fund,
        brackets,
    }
}
