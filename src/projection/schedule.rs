//! Output structures for projections

use serde::{Deserialize, Serialize};

/// A single row of projection output for one year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlySnapshot {
    /// Year index (1-based)
    pub year: u32,

    /// End-of-year balance, rounded to cents
    pub balance: f64,

    /// Interest earned during the year
    pub interest_earned: f64,

    /// Contributions added during the year
    pub contributions_ytd: f64,

    /// Growth from interest over the year, as a percentage of the
    /// year's starting balance
    pub ytd_growth_pct: f64,

    /// Interest earned since projection start
    pub cumulative_interest: f64,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    // Inputs
    pub principal: f64,
    pub rate: f64,
    pub years: u32,
    pub compound_freq: u32,
    pub contribution: f64,
    pub contribution_freq: u32,

    // Outputs
    pub final_amount: f64,
    pub total_interest: f64,
    pub total_contributions: f64,
    pub effective_apy: f64,
    /// Years for the balance to double; infinite for non-positive rates
    pub doubling_time: f64,

    /// One row per simulated year, ordered ascending
    pub yearly_breakdown: Vec<YearlySnapshot>,
}

impl ProjectionResult {
    /// Summary view of the projection outputs
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            principal: self.principal,
            final_amount: self.final_amount,
            total_interest: self.total_interest,
            total_contributions: self.total_contributions,
            effective_apy: self.effective_apy,
            doubling_time_years: self.doubling_time,
        }
    }

    /// The inputs the projection was run with
    pub fn parameters(&self) -> ProjectionParameters {
        ProjectionParameters {
            rate: self.rate,
            years: self.years,
            compound_frequency: self.compound_freq,
            contribution: self.contribution,
            contribution_frequency: self.contribution_freq,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub principal: f64,
    pub final_amount: f64,
    pub total_interest: f64,
    pub total_contributions: f64,
    pub effective_apy: f64,
    pub doubling_time_years: f64,
}

/// Input parameters echoed back alongside results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionParameters {
    pub rate: f64,
    pub years: u32,
    pub compound_frequency: u32,
    pub contribution: f64,
    pub contribution_frequency: u32,
}
