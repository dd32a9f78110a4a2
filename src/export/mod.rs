//! Expense export for the expense exporter.
//!
//! An [`Exporter`] validates a batch, hands the accepted expenses to an
//! [`ExpenseSerializer`] and writes the result to its destination in a
//! single overwrite. Only the encoding step differs between formats.
//!
//! # Example
//!
//! ```no_run
//! use expense_exporter::export::select_exporter;
//! # let employees = vec![];
//! # let expenses = vec![];
//!
//! let (exporter, default_file_name) = select_exporter("csv");
//! let result = exporter.export(&employees, &expenses, default_file_name)?;
//! for error in result.errors() {
//!     eprintln!("{error}");
//! }
//! # Ok::<(), expense_exporter::error::ExporterError>(())
//! ```

mod csv_format;
mod json_format;
mod pipeline;
mod record;
mod xml_format;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExporterResult;

pub use csv_format::{CSV_HEADER, CsvSerializer};
pub use json_format::JsonSerializer;
pub use pipeline::{Exporter, RenderedExport, ValidationReport, validate_batch};
pub use record::ExportRecord;
pub use xml_format::XmlSerializer;

/// Default file name used when the format key is not recognized.
pub const FALLBACK_FILE_NAME: &str = "expenses.txt";

/// The output encodings an export can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-delimited text with a header row.
    Csv,
    /// An `<expenses>` document with one `<expense>` per record.
    Xml,
    /// A pretty-printed array of objects.
    Json,
}

impl ExportFormat {
    /// Parses a format key case-insensitively. Returns `None` for unknown keys.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_uppercase().as_str() {
            "CSV" => Some(Self::Csv),
            "XML" => Some(Self::Xml),
            "JSON" => Some(Self::Json),
            _ => None,
        }
    }

    /// The file name suggested for exports in this format.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Csv => "expenses.csv",
            Self::Xml => "expenses.xml",
            Self::Json => "expenses.json",
        }
    }

    /// The upper-case key of this format.
    pub fn key(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Xml => "XML",
            Self::Json => "JSON",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("Unknown export format: {s}"))
    }
}

/// How the JSON format writes the expense date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonDateStyle {
    /// `2025-03-14`, the same as the CSV and XML formats.
    #[default]
    CalendarDate,
    /// `2025-03-14T00:00:00`, for consumers of the older JSON layout.
    DateTime,
}

/// The encoding step of an export.
///
/// Implementations must be pure: the same records always produce the same
/// text, and nothing is written anywhere.
pub trait ExpenseSerializer {
    /// The format this serializer produces.
    fn format(&self) -> ExportFormat;

    /// Encodes the accepted records as one complete document.
    fn serialize(&self, records: &[ExportRecord<'_>]) -> ExporterResult<String>;
}

/// Returns the exporter for a format key along with its default file name.
///
/// Keys are case-insensitive. Unknown keys fall back to the JSON exporter
/// and [`FALLBACK_FILE_NAME`].
pub fn select_exporter(key: &str) -> (Exporter, &'static str) {
    select_exporter_with(key, JsonDateStyle::default())
}

/// Like [`select_exporter`], with an explicit JSON date style.
pub fn select_exporter_with(key: &str, json_date_style: JsonDateStyle) -> (Exporter, &'static str) {
    match ExportFormat::from_key(key) {
        Some(format) => (
            Exporter::for_format(format, json_date_style),
            format.default_file_name(),
        ),
        None => (
            Exporter::for_format(ExportFormat::Json, json_date_style),
            FALLBACK_FILE_NAME,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_select_matching_format() {
        for (key, format, file_name) in [
            ("XML", ExportFormat::Xml, "expenses.xml"),
            ("json", ExportFormat::Json, "expenses.json"),
            ("Csv", ExportFormat::Csv, "expenses.csv"),
        ] {
            let (exporter, default_file_name) = select_exporter(key);
            assert_eq!(exporter.format(), format);
            assert_eq!(default_file_name, file_name);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_json_and_txt() {
        let (exporter, default_file_name) = select_exporter("yaml");
        assert_eq!(exporter.format(), ExportFormat::Json);
        assert_eq!(default_file_name, "expenses.txt");

        let (exporter, default_file_name) = select_exporter("");
        assert_eq!(exporter.format(), ExportFormat::Json);
        assert_eq!(default_file_name, FALLBACK_FILE_NAME);
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("xml".parse::<ExportFormat>(), Ok(ExportFormat::Xml));
        assert!("txt".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_display_is_upper_case_key() {
        assert_eq!(ExportFormat::Csv.to_string(), "CSV");
        assert_eq!(ExportFormat::Json.to_string(), "JSON");
    }

    #[test]
    fn test_json_date_style_defaults_to_calendar_date() {
        assert_eq!(JsonDateStyle::default(), JsonDateStyle::CalendarDate);
        assert_eq!(
            serde_json::to_string(&JsonDateStyle::DateTime).unwrap(),
            "\"date_time\""
        );
    }
}
