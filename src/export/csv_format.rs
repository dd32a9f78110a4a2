//! Comma-delimited export.

use crate::error::{ExporterError, ExporterResult};

use super::{ExpenseSerializer, ExportFormat, ExportRecord};

/// Column names written as the first line of every CSV export.
pub const CSV_HEADER: [&str; 6] = [
    "ExpenseId",
    "EmployeeName",
    "Position",
    "Description",
    "Amount",
    "Date",
];

/// Writes a header line and one `\n`-terminated line per record.
///
/// Fields are quoted only when they need it, e.g. a description that
/// contains a comma.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSerializer;

impl ExpenseSerializer for CsvSerializer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn serialize(&self, records: &[ExportRecord<'_>]) -> ExporterResult<String> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADER).map_err(csv_error)?;
        for record in records {
            writer
                .write_record([
                    record.expense_id.to_string(),
                    record.employee_name.to_string(),
                    record.position.to_string(),
                    record.description.to_string(),
                    record.amount.to_string(),
                    record.calendar_date(),
                ])
                .map_err(csv_error)?;
        }

        let bytes = writer.into_inner().map_err(csv_error)?;
        String::from_utf8(bytes).map_err(csv_error)
    }
}

fn csv_error(err: impl std::fmt::Display) -> ExporterError {
    ExporterError::Serialization {
        format: ExportFormat::Csv.to_string(),
        message: err.to_string(),
    }
}
