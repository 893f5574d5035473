//! Decorated terminal renderer
//!
//! Same structure as the plain renderer with Unicode panels and ANSI
//! color. `colored` drops the escape codes itself when stdout is not a
//! terminal or NO_COLOR is set.

use colored::Colorize;

use super::{
    compounding_label, contribution_suffix, format_currency, format_percent, sampled_rows,
    spark_chart, total_growth_pct, RenderOptions,
};
use crate::projection::ProjectionResult;

const TITLE: &str = "COMPOUND INTEREST PROJECTION";

/// Render a projection with terminal decoration
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
        let mut line = format!("{}{}", "Growth: ".bold(), spark.as_str().green());
        if let Some(pct) = total_growth_pct(result) {
            let pct_text = format!("  +{:.1}%", pct);
            line.push_str(&pct_text.as_str().green().bold().to_string());
        }
        lines.push(line);
        lines.push(String::new());
    }

    if options.show_table && !result.yearly_breakdown.is_empty() {
        lines.push(render_table(result));
    }

    lines.join("\n")
}

/// Header panel with the one-line projection summary
fn render_header(result: &ProjectionResult) -> String {
    let principal = format_currency(result.principal);
    let final_amount = format_currency(result.final_amount);
    let rate = format_percent(result.rate);
    let freq = compounding_label(result.compound_freq);
    let years = result.years.to_string();

    let (summary_plain, summary_colored) = if result.contribution > 0.0 {
        let contribution = format!(
            "{}/{}",
            format_currency(result.contribution),
            contribution_suffix(result.contribution_freq),
        );
        (
            format!(
                "{} + {} → {} over {} years @ {} ({})",
                principal, contribution, final_amount, years, rate, freq,
            ),
            format!(
                "{} + {} {} {} over {} years @ {} ({})",
                principal.as_str().cyan().bold(),
                contribution.as_str().cyan(),
                "→".dimmed(),
                final_amount.as_str().green().bold(),
                years.as_str().bold(),
                rate.as_str().bold(),
                freq.as_str().dimmed(),
            ),
        )
    } else {
        (
            format!(
                "{} → {} over {} years @ {} ({})",
                principal, final_amount, years, rate, freq,
            ),
            format!(
                "{} {} {} over {} years @ {} ({})",
                principal.as_str().cyan().bold(),
                "→".dimmed(),
                final_amount.as_str().green().bold(),
                years.as_str().bold(),
                rate.as_str().bold(),
                freq.as_str().dimmed(),
            ),
        )
    };

    let summary_width = summary_plain.chars().count();
    let inner = (summary_width + 2).max(TITLE.len() + 4);

    let top = format!(
        "╭─ {} {}╮",
        TITLE.bold(),
        "─".repeat(inner - TITLE.len() - 3),
    );
    let middle = format!(
        "│ {}{} │",
        summary_colored,
        " ".repeat(inner - summary_width - 2),
    );
    let bottom = format!("╰{}╯", "─".repeat(inner));

    [top, middle, bottom].join("\n")
}

/// Key metrics block
fn render_metrics(result: &ProjectionResult) -> String {
    let mut rows: Vec<(&'static str, String)> = Vec::new();

    if result.total_contributions > 0.0 {
        rows.push(("Starting Principal", format_currency(result.principal)));
        rows.push((
            "Total Contributions",
            format_currency(result.total_contributions),
        ));
    }
    rows.push(("Total Interest", format_currency(result.total_interest)));
    rows.push(("Effective APY", format_percent(result.effective_apy)));
    rows.push(("Doubling Time", format!("{} years", result.doubling_time)));

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    rows.iter()
        .map(|(label, value)| {
            let padded_label = format!("{:<label_width$}", label);
            let padded_value = format!("{:>value_width$}", value);
            let styled_value = match *label {
                "Total Interest" => padded_value.as_str().green().bold().to_string(),
                "Starting Principal" | "Total Contributions" => {
                    padded_value.as_str().cyan().to_string()
                }
                _ => padded_value.as_str().bold().to_string(),
            };
            format!("  {}  {}", padded_label.as_str().dimmed(), styled_value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Year-by-year breakdown table
fn render_table(result: &ProjectionResult) -> String {
    let rows = sampled_rows(result);
    let has_contributions = result.contribution > 0.0;
    let fourth_header = if has_contributions { "Contributions" } else { "Growth" };

    let header = format!(
        "{:>4}  {:>13}  {:>12}  {:>13}  {:>12}",
        "Year", "Balance", "Interest", fourth_header, "Cumulative",
    );

    let separator = "─".repeat(header.chars().count());
    let mut lines = vec![
        "Year-by-Year Breakdown".bold().to_string(),
        header.as_str().dimmed().to_string(),
        separator.as_str().dimmed().to_string(),
    ];

    for snapshot in rows {
        let year = format!("{:>4}", snapshot.year);
        let balance = format!("{:>13}", format_currency(snapshot.balance));
        let interest = format!("{:>12}", format_currency(snapshot.interest_earned));
        let cumulative = format!("{:>12}", format_currency(snapshot.cumulative_interest));

        let fourth = if has_contributions {
            let cell = format!("{:>13}", format_currency(snapshot.contributions_ytd));
            cell.as_str().yellow().to_string()
        } else {
            format!("{:>13}", format!("+{:.2}%", snapshot.ytd_growth_pct))
        };

        lines.push(format!(
            "{}  {}  {}  {}  {}",
            year.as_str().dimmed(),
            balance.as_str().green(),
            interest.as_str().cyan(),
            fourth,
            cumulative.as_str().bold(),
        ));
    }

    lines.join("\n")
}
