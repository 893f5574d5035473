//! Derived yield metrics
//!
//! Closed-form effective annual yield and doubling time; both depend
//! only on the rate and compounding frequency.

/// Effective annual percentage yield for a nominal rate compounded
/// `compound_freq` times per year.
///
/// APY = (1 + r/n)^n - 1
pub fn effective_annual_yield(rate: f64, compound_freq: u32) -> f64 {
    let n = compound_freq as f64;
    (1.0 + rate / n).powi(compound_freq as i32) - 1.0
}

/// Years required for the balance to double at the given rate and
/// compounding frequency, ignoring contributions.
///
/// t = ln(2) / (n * ln(1 + r/n)), rounded to 1 decimal place.
///
/// Non-positive rates never double and return infinity. When the
/// logarithmic form degenerates (1 + r/n <= 0 for extreme negative
/// rate/frequency combinations), the Rule of 72 approximation
/// 72 / (r * 100) is used instead.
pub fn doubling_time(rate: f64, compound_freq: u32) -> f64 {
    if rate <= 0.0 {
        return f64::INFINITY;
    }

    let n = compound_freq as f64;
    let period_growth = (1.0 + rate / n).ln();
    let denominator = n * period_growth;

    if denominator.is_finite() && denominator > 0.0 {
        round_tenth(std::f64::consts::LN_2 / denominator)
    } else {
        round_tenth(72.0 / (rate * 100.0))
    }
}

/// Round to 1 decimal place, half away from zero
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
