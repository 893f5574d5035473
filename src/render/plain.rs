//! Plain ASCII renderer

use super::{
    compounding_label, contribution_suffix, format_currency, format_percent, sampled_rows,
    spark_chart, total_growth_pct, RenderOptions,
};
use crate::projection::ProjectionResult;

/// Render a projection as plain ASCII text
pub(super) fn render(result: &ProjectionResult, options: &RenderOptions) -> String {
    if options.quiet {
        return format_currency(result.final_amount);
    }

    let mut lines = Vec::new();

    lines.push(render_header(result));
    lines.push(String::new());
    lines.push(render_metrics(result));
    lines.push(String::new());

    if options.show_chart && !result.yearly_breakdown.is_empty() {
        let balances: Vec<f64> = result.yearly_breakdown.iter().map(|s| s.balance).collect();
        let spark = spark_chart(&balances, None);
        match total_growth_pct(result) {
            Some(pct) => lines.push(format!("Growth: {}  +{:.1}%", spark, pct)),
            None => lines.push(format!("Growth: {}", spark)),
        }
        lines.push(String::new());
    }

    if options.show_table && !result.yearly_breakdown.is_empty() {
        lines.push(render_table(result));
    }

    lines.join("\n")
}

/// Summary header box
fn render_header(result: &ProjectionResult) -> String {
    let principal = format_currency(result.principal);
    let final_amount = format_currency(result.final_amount);
    let rate = format_percent(result.rate);
    let freq = compounding_label(result.compound_freq);

    let summary = if result.contribution > 0.0 {
        format!(
            "{} + {}/{} -> {} over {} years @ {} ({})",
            principal,
            format_currency(result.contribution),
            contribution_suffix(result.contribution_freq),
            final_amount,
            result.years,
            rate,
            freq,
        )
    } else {
        format!(
            "{} -> {} over {} years @ {} ({})",
            principal, final_amount, result.years, rate, freq,
        )
    };

    let width = (summary.len() + 4).max(50);
    let border = format!("+{}+", "-".repeat(width - 2));
    let title_line = format!("|  {:<pad$}|", "COMPOUND INTEREST PROJECTION", pad = width - 4);
    let summary_line = format!("|  {:<pad$}|", summary, pad = width - 4);

    [border.clone(), title_line, summary_line, border].join("\n")
}

/// Key metrics panel
fn render_metrics(result: &ProjectionResult) -> String {
    let mut metrics = vec![
        ("Total Interest", format_currency(result.total_interest)),
        ("Effective APY", format_percent(result.effective_apy)),
        ("Doubling Time", format!("{} years", result.doubling_time)),
    ];

    if result.total_contributions > 0.0 {
        metrics.insert(
            1,
            (
                "Total Contributions",
                format_currency(result.total_contributions),
            ),
        );
    }

    let label_width = metrics.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = metrics.iter().map(|(_, value)| value.len()).max().unwrap_or(0);
    let total_width = label_width + value_width + 7;

    let border = format!("+{}+", "-".repeat(total_width - 2));
    let mut lines = vec![border.clone()];
    for (label, value) in &metrics {
        lines.push(format!(
            "| {:<label_width$} | {:>value_width$} |",
            label, value,
        ));
    }
    lines.push(border);

    lines.join("\n")
}

/// Year-by-year breakdown table
fn render_table(result: &ProjectionResult) -> String {
    let rows = sampled_rows(result);
    let has_contributions = result.contribution > 0.0;

    let (header, separator) = if has_contributions {
        (
            "Year |    Balance    |   Interest   | Contributions | Cumulative",
            "-----|---------------|--------------|---------------|------------",
        )
    } else {
        (
            "Year |    Balance    |   Interest   |  Growth  | Cumulative",
            "-----|---------------|--------------|----------|------------",
        )
    };

    let mut lines = vec![header.to_string(), separator.to_string()];

    for snapshot in rows {
        let line = if has_contributions {
            format!(
                "{:>4} | {:>13} | {:>12} | {:>13} | {:>10}",
                snapshot.year,
                format_currency(snapshot.balance),
                format_currency(snapshot.interest_earned),
                format_currency(snapshot.contributions_ytd),
                format_currency(snapshot.cumulative_interest),
            )
        } else {
            format!(
                "{:>4} | {:>13} | {:>12} | {:>7.2}% | {:>10}",
                snapshot.year,
                format_currency(snapshot.balance),
                format_currency(snapshot.interest_earned),
                snapshot.ytd_growth_pct,
                format_currency(snapshot.cumulative_interest),
            )
        };
        lines.push(line);
    }

    lines.join("\n")
}
