use clap::ValueEnum;
use serde::Deserialize;

/// Output format of the cli host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }
}

/// Report settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSection {
    pub format: ReportFormat,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawReportSection {
    pub format: Option<ReportFormat>,
}

pub fn parse_report_section(raw: Option<RawReportSection>) -> ReportSection {
    ReportSection {
        format: raw.and_then(|raw| raw.format).unwrap_or_default(),
    }
}
