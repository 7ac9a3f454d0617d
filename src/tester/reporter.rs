use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::tester::Failure;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub failed: usize,
    pub fatal: usize,
}

impl Summary {
    pub fn of(failures: &[Failure]) -> Self {
        Self {
            failed: failures.len(),
            fatal: failures.iter().filter(|f| f.fatal).count(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub report_format: &'static str,
    pub tool: Tool,
    pub summary: Summary,
    pub failures: &'a [Failure],
}

pub trait OutputFormatter {
    fn format(&self, failures: &[Failure]) -> Result<String>;
}

pub fn formatter_for(config: &Config) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter {
            color: config.color.enabled(),
            show_location: config.show_location,
        }),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, failures: &[Failure]) -> Result<String> {
        let report = Report {
            report_format: "verity",
            tool: Tool {
                name: env!("CARGO_PKG_NAME"),
                version: Some(env!("CARGO_PKG_VERSION")),
            },
            summary: Summary::of(failures),
            failures,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

pub struct TextFormatter {
    pub color: bool,
    pub show_location: bool,
}

impl TextFormatter {
    fn format_failure(&self, failure: &Failure) -> String {
        let tag = if failure.fatal { "FATAL" } else { "FAIL" };
        let mut line = if self.color {
            tag.red().to_string()
        } else {
            tag.to_string()
        };

        if self.show_location {
            let location = failure.location();
            line.push(' ');
            if self.color {
                line.push_str(&location.dimmed().to_string());
            } else {
                line.push_str(&location);
            }
        }

        line.push(' ');
        line.push_str(&failure.message);
        line
    }

    fn format_summary(&self, summary: &Summary) -> String {
        let checks_text = if summary.failed == 1 { "check" } else { "checks" };
        let mark = if self.color {
            "✗".red().to_string()
        } else {
            "✗".to_string()
        };
        if summary.fatal > 0 {
            format!(
                "{} {} {} failed ({} fatal)",
                mark, summary.failed, checks_text, summary.fatal
            )
        } else {
            format!("{} {} {} failed", mark, summary.failed, checks_text)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, failures: &[Failure]) -> Result<String> {
        let mut result = String::new();
        for failure in failures {
            result.push_str(&self.format_failure(failure));
            result.push('\n');
        }
        result.push_str(&self.format_summary(&Summary::of(failures)));
        Ok(result)
    }
}

/// Renders `failures` with the configured formatter, falling back to plain
/// text if rendering fails.
pub fn render(config: &Config, failures: &[Failure]) -> String {
    formatter_for(config).format(failures).unwrap_or_else(|e| {
        tracing::warn!("Failed to render failure report: {}", e);
        failures
            .iter()
            .map(|failure| failure.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    })
}
