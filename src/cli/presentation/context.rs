//! Context show presentation: text and json formatters.

use crate::context::temporal::weekday_name;
use crate::context::{MoodContext, TemporalContext};
use crate::error::ApiError;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Everything `context show` reports.
#[derive(Debug, Clone, Serialize)]
pub struct ContextReport {
    pub summary: String,
    pub temporal: TemporalContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<MoodContext>,
}

impl ContextReport {
    pub fn new(temporal: TemporalContext, mood: Option<MoodContext>) -> Self {
        let summary = match mood {
            Some(ref m) => format!("{}, feeling {}", temporal.describe(), m.mood()),
            None => temporal.describe(),
        };
        Self {
            summary,
            temporal,
            mood,
        }
    }
}

pub fn format_context_text_output(report: &ContextReport, color: bool) -> String {
    let header = "Listening context";
    let mut output = if color {
        format!("{}\n", header.bold())
    } else {
        format!("{}\n", header)
    };

    let temporal = &report.temporal;
    output.push_str(&format!(
        "  Time:    {} ({})\n",
        temporal.timestamp().format("%Y-%m-%d %H:%M"),
        weekday_name(temporal.weekday())
    ));
    output.push_str(&format!("  Period:  {}\n", temporal.time_of_day()));
    output.push_str(&format!("  Day:     {}\n", temporal.day_kind()));
    output.push_str(&format!("  Season:  {}\n", temporal.season()));
    match report.mood {
        Some(ref mood) => output.push_str(&format!("  Mood:    {}", mood.describe())),
        None => output.push_str("  Mood:    (none)"),
    }
    output
}

pub fn format_context_json_output(report: &ContextReport) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(report)?)
}
