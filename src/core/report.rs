use crate::core::{Grade, RatingBreakdown};
use crate::utils::error::{RatingError, Result};

pub fn render(breakdown: &RatingBreakdown, format: &str, explain: bool) -> Result<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(breakdown)?),
        "text" => Ok(render_text(breakdown, explain)),
        other => Err(RatingError::invalid_input(
            "format",
            other,
            "Unsupported output format",
        )),
    }
}

fn render_text(breakdown: &RatingBreakdown, explain: bool) -> String {
    let mut lines = vec![format!("Grade: {}", breakdown.grade)];

    if explain {
        lines.push(format!("  Variant: {}", breakdown.variant));
        lines.push(format!("  Voyage risk: {}", breakdown.voyage_risk));
        lines.push(format!(
            "  Captain history risk: {}",
            breakdown.captain_history_risk
        ));
        lines.push(format!(
            "  Voyage profit factor: {} (length factor {})",
            breakdown.voyage_profit_factor, breakdown.length_factor
        ));
        lines.push(format!(
            "  {} * 3 {} {} + {} * 2",
            breakdown.voyage_profit_factor,
            if breakdown.grade == Grade::A { ">" } else { "<=" },
            breakdown.voyage_risk,
            breakdown.captain_history_risk
        ));
    }

    lines.join("\n")
}
