// 📝 Output - script-loadable JS assignment
// Renders the timeline as the data.js artifact the visualization loads:
// the full ordered sequence plus a second binding aliasing the most recent
// year. Printed to stdout by the CLI; redirecting into data.js is the
// caller's pipeline step.

use anyhow::{bail, Result};

use crate::model::YearRecord;

/// Render the complete data.js artifact for a non-empty timeline
pub fn render_script(timeline: &[YearRecord]) -> Result<String> {
    let (first, last) = match (timeline.first(), timeline.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => bail!("Cannot render an empty timeline (the current-year binding needs at least one record)"),
    };

    let json = serde_json::to_string_pretty(timeline)?;

    let mut out = String::new();
    out.push_str(&format!(
        "// ACTUAL DATA from World Gold Council ({}-{})\n",
        first.year, last.year
    ));
    out.push_str("// Source: above-ground-gold-stocks.xlsx\n");
    out.push_str("// Metals Focus, Refinitiv GFMS, World Gold Council\n");
    out.push_str(&format!("window.goldDistributionTimeline = {};\n", json));
    out.push('\n');
    out.push_str("// Set current data to most recent year\n");
    out.push_str(
        "window.goldDistributionData = window.goldDistributionTimeline[window.goldDistributionTimeline.length - 1];\n",
    );

    Ok(out)
}

// ============================================================================
// TESTS
// ============================================================================
