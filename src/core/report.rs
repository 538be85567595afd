use chrono::NaiveTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::model::{Minutes, PeakResult};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `H:MM-H:MM;N`
    #[default]
    Text,
    /// One JSON object per run
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeStyle {
    /// Hours and minutes without padding: `9:5`, `10:0`
    #[default]
    Legacy,
    /// Zero padded `09:05`
    Padded,
}

#[derive(Debug, Serialize)]
struct JsonReport {
    start: String,
    end: String,
    start_minutes: Minutes,
    end_minutes: Minutes,
    peak: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    format: ReportFormat,
    style: TimeStyle,
}

impl Reporter {
    pub fn new(format: ReportFormat, style: TimeStyle) -> Self {
        Self { format, style }
    }

    pub fn render(&self, result: &PeakResult) -> Result<String> {
        let start = format_clock(result.window_start, self.style);
        let end = format_clock(result.window_end, self.style);

        match self.format {
            ReportFormat::Text => Ok(format!("{}-{};{}", start, end, result.peak_count)),
            ReportFormat::Json => {
                let report = JsonReport {
                    start,
                    end,
                    start_minutes: result.window_start,
                    end_minutes: result.window_end,
                    peak: result.peak_count,
                };
                Ok(serde_json::to_string(&report)?)
            }
        }
    }
}

pub fn format_clock(minutes: Minutes, style: TimeStyle) -> String {
    match style {
        TimeStyle::Legacy => format!("{}:{}", minutes / 60, minutes % 60),
        TimeStyle::Padded => u32::try_from(minutes)
            .ok()
            .and_then(|m| m.checked_mul(60))
            .and_then(|secs| NaiveTime::from_num_seconds_from_midnight_opt(secs, 0))
            .map(|t| t.format("%H:%M").to_string())
            // lenient input may fall outside a single day
            .unwrap_or_else(|| format!("{:02}:{:02}", minutes / 60, minutes % 60)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(start: Minutes, end: Minutes, peak: usize) -> PeakResult {
        PeakResult {
            window_start: start,
            window_end: end,
            peak_count: peak,
        }
    }

    #[test]
    fn test_legacy_text_has_no_padding() {
        let reporter = Reporter::default();
        assert_eq!(reporter.render(&result(570, 585, 2)).unwrap(), "9:30-9:45;2");
        assert_eq!(reporter.render(&result(600, 600, 2)).unwrap(), "10:0-10:0;2");
        assert_eq!(reporter.render(&result(480, 510, 1)).unwrap(), "8:0-8:30;1");
        assert_eq!(format_clock(545, TimeStyle::Legacy), "9:5");
    }

    #[test]
    fn test_padded_style() {
        assert_eq!(format_clock(545, TimeStyle::Padded), "09:05");
        assert_eq!(format_clock(0, TimeStyle::Padded), "00:00");
        assert_eq!(format_clock(1500, TimeStyle::Padded), "25:00");
    }

    #[test]
    fn test_out_of_range_legacy_values_render_arithmetically() {
        assert_eq!(format_clock(1599, TimeStyle::Legacy), "26:39");
        assert_eq!(format_clock(-60, TimeStyle::Legacy), "-1:0");
    }

    #[test]
    fn test_json_report() {
        let reporter = Reporter::new(ReportFormat::Json, TimeStyle::Legacy);
        let json = reporter.render(&result(570, 585, 2)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["start"], "9:30");
        assert_eq!(value["end"], "9:45");
        assert_eq!(value["start_minutes"], 570);
        assert_eq!(value["peak"], 2);
    }
}
