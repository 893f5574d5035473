//! JSON renderer for machine-readable output

use serde::Serialize;

use super::{RenderError, RenderOptions};
use crate::projection::{ProjectionParameters, ProjectionResult, ProjectionSummary, YearlySnapshot};

/// Full JSON report shape
#[derive(Serialize)]
struct JsonReport<'a> {
    summary: ProjectionSummary,
    parameters: ProjectionParameters,
    yearly_breakdown: &'a [YearlySnapshot],
}

/// Render a projection as JSON.
///
/// Numbers serialize as native floats. An infinite doubling time has
/// no JSON representation and serializes as `null`.
pub(super) fn render(
    result: &ProjectionResult,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    if options.quiet {
        let quiet = serde_json::json!({ "final_amount": result.final_amount });
        return Ok(quiet.to_string());
    }

    let report = JsonReport {
        summary: result.summary(),
        parameters: result.parameters(),
        yearly_breakdown: &result.yearly_breakdown,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{ProjectionConfig, ProjectionEngine};
    use serde_json::Value;

    fn sample_result() -> ProjectionResult {
        ProjectionEngine::new(ProjectionConfig {
            principal: 10_000.0,
            contribution: 100.0,
            ..Default::default()
        })
        .project()
    }

    fn parse(output: &str) -> Value {
        serde_json::from_str(output).expect("renderer produced valid JSON")
    }

    #[test]
    fn test_report_nests_summary_parameters_and_breakdown() {
        let output = render(&sample_result(), &RenderOptions::default()).unwrap();
        let value = parse(&output);

        assert!(value["summary"]["final_amount"].is_f64());
        assert!(value["summary"]["effective_apy"].is_f64());
        assert_eq!(value["parameters"]["years"], 10);
        assert_eq!(value["parameters"]["compound_frequency"], 12);

        let breakdown = value["yearly_breakdown"].as_array().unwrap();
        assert_eq!(breakdown.len(), 10);
        for (i, row) in breakdown.iter().enumerate() {
            assert_eq!(row["year"], i as u64 + 1);
            for field in [
                "balance",
                "interest_earned",
                "contributions_ytd",
                "ytd_growth_pct",
                "cumulative_interest",
            ] {
                assert!(row[field].is_f64(), "missing numeric field {}", field);
            }
        }
    }

    #[test]
    fn test_quiet_mode_has_only_final_amount() {
        let result = sample_result();
        let output = render(&result, &RenderOptions {
            quiet: true,
            ..Default::default()
        })
        .unwrap();

        let value = parse(&output);
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(
            object["final_amount"].as_f64().unwrap(),
            result.final_amount
        );
    }

    #[test]
    fn test_infinite_doubling_time_serializes_as_null() {
        let result = ProjectionEngine::new(ProjectionConfig {
            principal: 1_000.0,
            rate: 0.0,
            ..Default::default()
        })
        .project();

        let output = render(&result, &RenderOptions::default()).unwrap();
        let value = parse(&output);
        assert!(value["summary"]["doubling_time_years"].is_null());
    }
}
