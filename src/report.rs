/*!
 * Reporting functionality for promptclip
 *
 * Summarizes an assembled prompt per file, either as a console table
 * rendered with tabled or as JSON.
 */

use clap::ValueEnum;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::error::Result;
use crate::tokenizer::{estimate_tokens, Tokenizer};
use crate::types::PromptText;

/// Information about one block in the report
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Root-relative path
    pub path: String,
    /// Number of lines in the file
    pub lines: usize,
    /// Number of characters in the file
    pub chars: usize,
    /// Number of tokens in the file
    pub tokens: usize,
}

/// Statistics for an assembled prompt
#[derive(Debug, Clone, Serialize)]
pub struct PromptReport {
    /// Where the prompt was published
    pub sink: String,
    /// Per-file details, in prompt order
    pub files: Vec<FileReport>,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Tokens in the whole prompt, fences included
    pub total_tokens: usize,
    /// Whether token counts are chars/4 estimates
    pub tokens_estimated: bool,
}

impl PromptReport {
    /// Build a report for `prompt` published to `sink`
    pub fn from_prompt(prompt: &PromptText, sink: &str) -> Self {
        let tokenizer = match Tokenizer::new() {
            Ok(t) => Some(t),
            Err(e) => {
                log::warn!("Falling back to estimated token counts: {}", e);
                None
            }
        };

        let count = |text: &str| match &tokenizer {
            Some(t) => t.count_tokens(text),
            None => estimate_tokens(text.chars().count()),
        };

        let files: Vec<FileReport> = prompt
            .blocks()
            .iter()
            .map(|block| FileReport {
                path: block.display_path.clone(),
                lines: block.lines(),
                chars: block.chars(),
                tokens: count(&block.content),
            })
            .collect();

        Self {
            sink: sink.to_string(),
            total_lines: files.iter().map(|f| f.lines).sum(),
            total_chars: files.iter().map(|f| f.chars).sum(),
            total_tokens: count(prompt.as_str()),
            tokens_estimated: tokenizer.is_none(),
            files,
        }
    }
}

/// Format of the report output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Console table output
    Table,
    /// JSON document
    Json,
}

/// Report generator for assembled prompts
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string
    pub fn generate_report(&self, report: &PromptReport) -> Result<String> {
        match self.format {
            ReportFormat::Table => Ok(self.generate_console_report(report)),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }

    /// Print the report to stderr so stdout stays reserved for the prompt
    pub fn print_report(&self, report: &PromptReport) -> Result<()> {
        eprintln!("\n{}", self.generate_report(report)?);
        Ok(())
    }

    fn create_files_table(&self, report: &PromptReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Chars")]
            chars: String,

            #[tabled(rename = "Tokens")]
            tokens: String,
        }

        let rows: Vec<FileRow> = report
            .files
            .iter()
            .map(|info| FileRow {
                path: info.path.clone(),
                lines: self.format_number(info.lines),
                chars: self.format_number(info.chars),
                tokens: self.format_number(info.tokens),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_summary_table(&self, report: &PromptReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let token_text = if report.tokens_estimated {
            format!("{} tokens (estimated)", self.format_number(report.total_tokens))
        } else {
            format!("{} tokens (counted)", self.format_number(report.total_tokens))
        };

        let rows = vec![
            SummaryRow {
                key: "📋 Copied To".to_string(),
                value: report.sink.clone(),
            },
            SummaryRow {
                key: "📄 Files".to_string(),
                value: report.files.len().to_string(),
            },
            SummaryRow {
                key: "📝 Total Lines".to_string(),
                value: self.format_number(report.total_lines),
            },
            SummaryRow {
                key: "📦 LLM Tokens".to_string(),
                value: token_text,
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &PromptReport) -> String {
        format!(
            "📋  ASSEMBLED FILES\n{}\n\n✅  PROMPT READY\n{}",
            self.create_files_table(report),
            self.create_summary_table(report)
        )
    }
}
