use anyhow::Result;

use crate::models::ExpressionReport;

/// Render reports as a pretty-printed JSON array.
pub fn render(reports: &[ExpressionReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
