//! Running balance state for a projection in progress

use super::engine::ProjectionConfig;

/// State of the balance at a point in time during projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current year (1-indexed; 0 before the first year starts)
    pub year: u32,

    /// Current balance including interest and contributions to date
    pub balance: f64,

    /// Interest accrued since projection start
    pub cumulative_interest: f64,

    /// Contributions added since projection start
    pub total_contributions: f64,

    /// Balance at the start of the current year
    pub year_start_balance: f64,

    /// Interest accrued in the current year
    pub year_interest: f64,

    /// Contributions added in the current year
    pub year_contributions: f64,
}

impl ProjectionState {
    /// Initialize state from a config at projection start
    pub fn for_config(config: &ProjectionConfig) -> Self {
        Self {
            year: 0,
            balance: config.principal,
            cumulative_interest: 0.0,
            total_contributions: 0.0,
            year_start_balance: config.principal,
            year_interest: 0.0,
            year_contributions: 0.0,
        }
    }

    /// Advance to the next year and reset the year-to-date accumulators
    pub fn start_year(&mut self) {
        self.year += 1;
        self.year_start_balance = self.balance;
        self.year_interest = 0.0;
        self.year_contributions = 0.0;
    }

    /// Accrue one compounding period of interest on the current balance
    pub fn accrue(&mut self, period_rate: f64) {
        let interest = self.balance * period_rate;
        self.balance += interest;
        self.year_interest += interest;
        self.cumulative_interest += interest;
    }

    /// Add a contribution at the end of a compounding period
    pub fn contribute(&mut self, amount: f64) {
        self.balance += amount;
        self.year_contributions += amount;
        self.total_contributions += amount;
    }

    /// Year-over-year growth from interest alone, as a percentage.
    /// 0 when the year started from an empty balance.
    pub fn ytd_growth_pct(&self) -> f64 {
        if self.year_start_balance > 0.0 {
            self.year_interest / self.year_start_balance * 100.0
        } else {
            0.0
        }
    }
}
