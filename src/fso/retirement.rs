//! Retirement drawdown checks
//!
//! For retired users the monthly pension or drawdown stands in for income.
//! The withdrawal rate compares a year of drawdowns with the remaining corpus.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Annual withdrawal rate at or below which a drawdown is considered safe
pub const SAFE_WITHDRAWAL_RATE: f64 = 0.04;

/// Annual withdrawal rate at or below which a drawdown needs watching
pub const CAUTION_WITHDRAWAL_RATE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithdrawalRating {
    Safe,
    Caution,
    Unsafe,
}

impl fmt::Display for WithdrawalRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WithdrawalRating::Safe => write!(f, "Safe"),
            WithdrawalRating::Caution => write!(f, "Caution"),
            WithdrawalRating::Unsafe => write!(f, "Unsafe"),
        }
    }
}

/// Withdrawal rate of a retiree's drawdown against their corpus
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalRateSafety {
    pub annual_drawdown: f64,
    /// Fraction of the corpus drawn per year (0.04 = 4%)
    pub withdrawal_rate: f64,
    pub rating: WithdrawalRating,
}

/// Rate a monthly drawdown against the corpus it comes from
///
/// Returns `None` when the corpus is not positive, since no rate can be
/// computed against it.
pub fn assess_withdrawal_rate(monthly_drawdown: f64, corpus: f64) -> Option<WithdrawalRateSafety> {
    if corpus.is_nan() || corpus <= 0.0 {
        return None;
    }

    let annual_drawdown = monthly_drawdown * 12.0;
    let withdrawal_rate = annual_drawdown / corpus;
    let rating = if withdrawal_rate <= SAFE_WITHDRAWAL_RATE {
        WithdrawalRating::Safe
    } else if withdrawal_rate <= CAUTION_WITHDRAWAL_RATE {
        WithdrawalRating::Caution
    } else {
        WithdrawalRating::Unsafe
    };

    Some(WithdrawalRateSafety {
        annual_drawdown,
        withdrawal_rate,
        rating,
    })
}

/// Months of expenses an emergency fund covers
pub fn emergency_fund_months(fund: f64, monthly_expenses: f64) -> Option<f64> {
    if monthly_expenses > 0.0 {
        Some(fund / monthly_expenses)
    } else {
        None
    }
}
