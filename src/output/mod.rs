mod json;
mod text;

use chrono::Utc;

pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

use crate::diagnostics::DiagnosticReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub trait Formatter {
    fn format(&self, report: &DiagnosticReport) -> String;
}

pub fn create_formatter(format: ReportFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        ReportFormat::Text => Box::new(TextFormatter::new(verbose)),
        ReportFormat::Json => Box::new(JsonFormatter),
    }
}

pub fn iso8601_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Human-readable resistance: `2.20 M Ohms`, `4.70 k Ohms`, `220 Ohms`
pub fn format_resistance(ohms: f64) -> String {
    if ohms >= 1_000_000.0 {
        format!("{:.2} M Ohms", ohms / 1_000_000.0)
    } else if ohms >= 1000.0 {
        format!("{:.2} k Ohms", ohms / 1000.0)
    } else {
        format!("{:.0} Ohms", ohms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_resistance() {
        assert_eq!(format_resistance(220.0), "220 Ohms");
        assert_eq!(format_resistance(0.0), "0 Ohms");
        assert_eq!(format_resistance(1000.0), "1.00 k Ohms");
        assert_eq!(format_resistance(4700.0), "4.70 k Ohms");
        assert_eq!(format_resistance(2_200_000.0), "2.20 M Ohms");
        assert_eq!(format_resistance(99e9), "99000.00 M Ohms");
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = iso8601_timestamp();
        assert_eq!(ts.len(), 24);
        assert!(ts.ends_with('Z'));
    }
}
