//! CSV renderer for spreadsheet export

use super::{RenderError, RenderOptions};
use crate::projection::ProjectionResult;

/// Render a projection as CSV.
///
/// Quiet mode emits a single `final_amount` column; otherwise a header
/// row is followed by one row per simulated year.
pub(super) fn render(
    result: &ProjectionResult,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());

    if options.quiet {
        writer.write_record(["final_amount"])?;
        writer.write_record([result.final_amount.to_string()])?;
    } else {
        writer.write_record([
            "year",
            "balance",
            "interest_earned",
            "contributions_ytd",
            "ytd_growth_pct",
            "cumulative_interest",
        ])?;

        for snapshot in &result.yearly_breakdown {
            writer.write_record([
                snapshot.year.to_string(),
                snapshot.balance.to_string(),
                snapshot.interest_earned.to_string(),
                snapshot.contributions_ytd.to_string(),
                snapshot.ytd_growth_pct.to_string(),
                snapshot.cumulative_interest.to_string(),
            ])?;
        }
    }

    let data = writer
        .into_inner()
        .map_err(|e| ::csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(data)?)
}
