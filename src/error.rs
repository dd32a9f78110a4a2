//! Error types for the expense exporter.
//!
//! Record-level problems (unknown employee, limit exceeded, unsupported
//! formula) are not errors in this sense: they are collected as messages in
//! [`ExportResult`](crate::models::ExportResult). The types here cover the
//! faults that abort an operation: configuration loading, serialization and
//! the final write.

use thiserror::Error;

/// The main error type for the expense exporter.
///
/// # Example
///
/// ```
/// use expense_exporter::error::ExporterError;
///
/// let error = ExporterError::ConfigNotFound {
///     path: "/missing/export.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/export.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ExporterError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee record failed data-entry validation.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A serializer was handed an expense whose employee is not in the directory.
    #[error("No employee with Id={employee_id} for expense {expense_id}")]
    MissingEmployee {
        /// The employee id the expense refers to.
        employee_id: u32,
        /// The expense being serialized.
        expense_id: u32,
    },

    /// The output encoder failed.
    #[error("Failed to serialize {format} export: {message}")]
    Serialization {
        /// The export format being produced.
        format: String,
        /// A description of the encoder failure.
        message: String,
    },

    /// The export destination could not be written.
    #[error("Failed to write export to '{path}': {source}")]
    WriteFailed {
        /// The destination path.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A type alias for Results that return ExporterError.
pub type ExporterResult<T> = Result<T, ExporterError>;
