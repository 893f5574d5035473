//! Rendering of projection results into textual output formats

mod chart;
mod csv;
mod json;
mod plain;
mod rich;

use crate::projection::{ProjectionResult, YearlySnapshot};
use clap::ValueEnum;
use thiserror::Error;

pub use chart::spark_chart;

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Decorated terminal output
    Rich,
    /// Plain ASCII output
    Plain,
    /// Machine-readable JSON
    Json,
    /// Spreadsheet-friendly CSV
    Csv,
}

/// Options controlling output rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include the sparkline growth chart
    pub show_chart: bool,

    /// Include the year-by-year table
    pub show_table: bool,

    /// Show only the final amount
    pub quiet: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_chart: true,
            show_table: true,
            quiet: false,
        }
    }
}

/// Errors from the rendering layer
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("CSV rendering failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV output was not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Render a projection result in the requested format
pub fn render(
    result: &ProjectionResult,
    format: Format,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    match format {
        Format::Rich => Ok(rich::render(result, options)),
        Format::Plain => Ok(plain::render(result, options)),
        Format::Json => json::render(result, options),
        Format::Csv => csv::render(result, options),
    }
}

/// Format a number as currency with commas and 2 decimal places
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };
    format!("${}{}.{}", sign, group_digits(int_part), frac_part)
}

/// Format a decimal rate as a percentage with 2 decimal places
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Insert thousands separators into a run of digits
fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Human label for a compounding frequency
pub(crate) fn compounding_label(freq: u32) -> String {
    match freq {
        1 => "annually".to_string(),
        4 => "quarterly".to_string(),
        12 => "monthly".to_string(),
        365 => "daily".to_string(),
        n => format!("{}x/yr", n),
    }
}

/// Short suffix for a contribution frequency ("$500/mo")
pub(crate) fn contribution_suffix(freq: u32) -> &'static str {
    match freq {
        1 => "yr",
        12 => "mo",
        26 => "2wk",
        52 => "wk",
        _ => "",
    }
}

/// Pick the table rows to display.
///
/// Short projections show every year; longer ones show year 1, every
/// fifth year up to 50, and the final year.
pub(crate) fn sampled_rows(result: &ProjectionResult) -> Vec<&YearlySnapshot> {
    let breakdown = &result.yearly_breakdown;
    if breakdown.len() <= 10 {
        return breakdown.iter().collect();
    }

    let mut indices = vec![0usize];
    for year in (5..=50).step_by(5) {
        if year <= breakdown.len() {
            indices.push(year - 1);
        }
    }
    let last = breakdown.len() - 1;
    if !indices.contains(&last) {
        indices.push(last);
    }
    indices.sort_unstable();
    indices.dedup();

    indices.into_iter().map(|i| &breakdown[i]).collect()
}

/// Overall growth percentage from principal to final amount, when the
/// projection started from a non-empty balance
pub(crate) fn total_growth_pct(result: &ProjectionResult) -> Option<f64> {
    if result.principal > 0.0 {
        Some((result.final_amount - result.principal) / result.principal * 100.0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{ProjectionConfig, ProjectionEngine};

    fn sample_result(years: u32) -> ProjectionResult {
        ProjectionEngine::new(ProjectionConfig {
            principal: 10_000.0,
            years,
            ..Default::default()
        })
        .project()
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.99), "$999.99");
        assert_eq!(format_currency(1_000.0), "$1,000.00");
        assert_eq!(format_currency(20_096.61), "$20,096.61");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-1_234.5), "$-1,234.50");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.07), "7.00%");
        assert_eq!(format_percent(0.0723), "7.23%");
        assert_eq!(format_percent(-0.025), "-2.50%");
    }

    #[test]
    fn test_compounding_labels() {
        assert_eq!(compounding_label(1), "annually");
        assert_eq!(compounding_label(12), "monthly");
        assert_eq!(compounding_label(365), "daily");
        assert_eq!(compounding_label(6), "6x/yr");
    }

    #[test]
    fn test_short_projection_shows_every_year() {
        let result = sample_result(10);
        let rows = sampled_rows(&result);
        assert_eq!(rows.len(), 10);
    }

    #[test]
    fn test_long_projection_samples_milestone_years() {
        let result = sample_result(30);
        let years: Vec<u32> = sampled_rows(&result).iter().map(|s| s.year).collect();
        assert_eq!(years, vec![1, 5, 10, 15, 20, 25, 30]);
    }

    #[test]
    fn test_long_projection_always_includes_final_year() {
        let result = sample_result(23);
        let years: Vec<u32> = sampled_rows(&result).iter().map(|s| s.year).collect();
        assert_eq!(years, vec![1, 5, 10, 15, 20, 23]);
    }

    #[test]
    fn test_every_format_renders_quiet_final_amount_only() {
        let result = sample_result(10);
        let options = RenderOptions {
            quiet: true,
            ..Default::default()
        };

        for format in [Format::Rich, Format::Plain, Format::Json, Format::Csv] {
            let output = render(&result, format, &options).unwrap();
            assert!(
                output.contains("20,096.61") || output.contains("20096.61"),
                "{:?} quiet output missing final amount: {}",
                format,
                output
            );
            assert!(
                !output.contains("Year") && !output.contains("year,balance"),
                "{:?} quiet output leaked breakdown: {}",
                format,
                output
            );
        }
    }
}
