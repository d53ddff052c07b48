//! Output rendering for list- and event-style command results
//!
//! Three formats: pipe-separated aligned text (the default), pretty JSON,
//! and CSV with a header row. CSV quoting is done locally: fields holding a
//! comma, quote or newline are wrapped in double quotes with embedded
//! quotes doubled.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

/// Output format selector for `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        write!(f, "{name}")
    }
}

/// A mark joined with the live window it points at; one `list` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkedWindow {
    pub mark: String,
    pub window_id: i64,
    pub app_name: String,
    pub window_title: String,
    pub workspace: String,
    pub app_bundle_id: String,
}

/// The result of a window-moving command; one `summon` outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputEvent {
    pub command: String,
    pub action: String,
    pub window_id: i64,
    pub workspace: String,
    pub target_workspace: String,
    pub result: String,
    pub message: String,
}

const LIST_HEADERS: [&str; 6] = [
    "mark",
    "window_id",
    "app_name",
    "window_title",
    "workspace",
    "app_bundle_id",
];

const EVENT_HEADERS: [&str; 7] = [
    "command",
    "action",
    "window_id",
    "workspace",
    "target_workspace",
    "result",
    "message",
];

/// Formats a list of marked windows.
pub struct ListFormatter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> ListFormatter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Render the rows in the selected format.
    pub fn format(&mut self, windows: &[MarkedWindow]) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => self.format_text(windows),
            OutputFormat::Json => self.format_json(windows),
            OutputFormat::Csv => self.format_csv(windows),
        }
    }

    /// Render an empty result: `message` for text, `[]` for JSON, a
    /// header-only document for CSV.
    pub fn format_empty(&mut self, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{message}"),
            OutputFormat::Json => writeln!(self.writer, "[]"),
            OutputFormat::Csv => self.format_csv(&[]),
        }
    }

    fn format_text(&mut self, windows: &[MarkedWindow]) -> io::Result<()> {
        let rows: Vec<[String; 6]> = windows
            .iter()
            .map(|w| {
                [
                    w.mark.clone(),
                    w.window_id.to_string(),
                    empty_to_underscore(&w.app_name),
                    empty_to_underscore(&w.window_title),
                    empty_to_underscore(&w.workspace),
                    empty_to_underscore(&w.app_bundle_id),
                ]
            })
            .collect();

        let mut widths = [0usize; 6];
        for row in &rows {
            for (width, field) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(field.len());
            }
        }

        for row in &rows {
            let line = row
                .iter()
                .enumerate()
                .map(|(i, field)| {
                    if i == row.len() - 1 {
                        field.clone()
                    } else {
                        format!("{field:<width$}", width = widths[i])
                    }
                })
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(self.writer, "{line}")?;
        }

        Ok(())
    }

    fn format_json(&mut self, windows: &[MarkedWindow]) -> io::Result<()> {
        let rendered = serde_json::to_string_pretty(windows)?;
        writeln!(self.writer, "{rendered}")
    }

    fn format_csv(&mut self, windows: &[MarkedWindow]) -> io::Result<()> {
        writeln!(self.writer, "{}", LIST_HEADERS.join(","))?;
        for w in windows {
            let row = [
                csv_field(&w.mark),
                Cow::Owned(w.window_id.to_string()),
                csv_field(&w.app_name),
                csv_field(&w.window_title),
                csv_field(&w.workspace),
                csv_field(&w.app_bundle_id),
            ];
            writeln!(self.writer, "{}", row.join(","))?;
        }
        Ok(())
    }
}

/// Formats a single command-outcome event.
pub struct EventFormatter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> EventFormatter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn format(&mut self, event: &OutputEvent) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{}", event.message),
            OutputFormat::Json => {
                let rendered = serde_json::to_string_pretty(event)?;
                writeln!(self.writer, "{rendered}")
            }
            OutputFormat::Csv => {
                writeln!(self.writer, "{}", EVENT_HEADERS.join(","))?;
                let row = [
                    csv_field(&event.command),
                    csv_field(&event.action),
                    Cow::Owned(event.window_id.to_string()),
                    csv_field(&event.workspace),
                    csv_field(&event.target_workspace),
                    csv_field(&event.result),
                    csv_field(&event.message),
                ];
                writeln!(self.writer, "{}", row.join(","))
            }
        }
    }
}

fn empty_to_underscore(field: &str) -> String {
    if field.is_empty() {
        "_".to_string()
    } else {
        field.to_string()
    }
}

fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
