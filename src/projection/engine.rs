//! Core projection engine for year-by-year balance growth

use super::metrics;
use super::schedule::{ProjectionResult, YearlySnapshot};
use super::state::ProjectionState;

/// Configuration for a projection run
///
/// Callers validate before construction: principal and contribution
/// non-negative, years and frequencies at least 1. The engine assumes
/// valid inputs and does not re-check them.
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Starting amount
    pub principal: f64,

    /// Annual interest rate as a decimal fraction (0.07 for 7%)
    pub rate: f64,

    /// Number of whole years to project
    pub years: u32,

    /// Compounding periods per year (1 = annually)
    pub compound_freq: u32,

    /// Regular contribution amount
    pub contribution: f64,

    /// Contribution periods per year (12 = monthly)
    pub contribution_freq: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            principal: 0.0,
            rate: 0.07,
            years: 10,
            compound_freq: 12,
            contribution: 0.0,
            contribution_freq: 12,
        }
    }
}

/// Main projection engine
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run the projection
    ///
    /// Simulates each compounding period of each year: interest accrues
    /// on the running balance, then any contribution due that period is
    /// added. One `YearlySnapshot` is recorded per year.
    pub fn project(&self) -> ProjectionResult {
        let cfg = &self.config;
        let period_rate = cfg.rate / cfg.compound_freq as f64;

        // Contributions land on every period whose 1-based index is
        // divisible by this. Integer division floors to 0 when the
        // contribution frequency exceeds the compounding frequency;
        // the clamp to 1 then puts a contribution in every period,
        // over-contributing relative to the nominal frequency.
        let periods_per_contribution = (cfg.compound_freq / cfg.contribution_freq).max(1);

        let mut state = ProjectionState::for_config(cfg);
        let mut yearly_breakdown = Vec::with_capacity(cfg.years as usize);

        for _year in 1..=cfg.years {
            state.start_year();

            for period in 1..=cfg.compound_freq {
                state.accrue(period_rate);

                if cfg.contribution > 0.0 && period % periods_per_contribution == 0 {
                    state.contribute(cfg.contribution);
                }
            }

            yearly_breakdown.push(YearlySnapshot {
                year: state.year,
                balance: round_cents(state.balance),
                interest_earned: round_cents(state.year_interest),
                contributions_ytd: round_cents(state.year_contributions),
                ytd_growth_pct: round_cents(state.ytd_growth_pct()),
                cumulative_interest: round_cents(state.cumulative_interest),
            });
        }

        ProjectionResult {
            principal: cfg.principal,
            rate: cfg.rate,
            years: cfg.years,
            compound_freq: cfg.compound_freq,
            contribution: cfg.contribution,
            contribution_freq: cfg.contribution_freq,
            final_amount: round_cents(state.balance),
            total_interest: round_cents(state.cumulative_interest),
            total_contributions: round_cents(state.total_contributions),
            effective_apy: metrics::effective_annual_yield(cfg.rate, cfg.compound_freq),
            doubling_time: metrics::doubling_time(cfg.rate, cfg.compound_freq),
            yearly_breakdown,
        }
    }
}

/// Round to 2 decimal places, half away from zero
pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
