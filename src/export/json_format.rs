//! JSON export.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{ExporterError, ExporterResult};

use super::{ExpenseSerializer, ExportFormat, ExportRecord, JsonDateStyle};

/// Writes a pretty-printed array with one object per record.
///
/// Amounts are exact JSON numbers. The date follows the configured
/// [`JsonDateStyle`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    date_style: JsonDateStyle,
}

impl JsonSerializer {
    /// Creates a serializer with the given date style.
    pub fn new(date_style: JsonDateStyle) -> Self {
        Self { date_style }
    }

    /// The date style this serializer writes.
    pub fn date_style(&self) -> JsonDateStyle {
        self.date_style
    }

    fn date(&self, record: &ExportRecord<'_>) -> String {
        match self.date_style {
            JsonDateStyle::CalendarDate => record.calendar_date(),
            JsonDateStyle::DateTime => record
                .date
                .and_time(NaiveTime::MIN)
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExpense<'a> {
    expense_id: u32,
    employee_id: u32,
    employee_name: &'a str,
    position: &'a str,
    description: &'a str,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    amount: Decimal,
    date: String,
}

impl ExpenseSerializer for JsonSerializer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn serialize(&self, records: &[ExportRecord<'_>]) -> ExporterResult<String> {
        let objects: Vec<JsonExpense<'_>> = records
            .iter()
            .map(|record| JsonExpense {
                expense_id: record.expense_id,
                employee_id: record.employee_id,
                employee_name: record.employee_name,
                position: record.position,
                description: record.description,
                amount: record.amount,
                date: self.date(record),
            })
            .collect();

        serde_json::to_string_pretty(&objects).map_err(|e| ExporterError::Serialization {
            format: ExportFormat::Json.to_string(),
            message: e.to_string(),
        })
    }
}
