//! The validate → serialize → write export pipeline.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::error::{ExporterError, ExporterResult};
use crate::models::{Employee, EmployeeDirectory, ExportResult, Expense};
use crate::rules::{RuleOutcome, select_rule};

use super::{
    CsvSerializer, ExpenseSerializer, ExportFormat, ExportRecord, JsonDateStyle, JsonSerializer,
    XmlSerializer,
};

/// The accepted expenses and error messages of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport<'a> {
    /// Accepted expenses, in input order.
    pub accepted: Vec<&'a Expense>,
    /// One message per rejected or unresolvable expense, in input order.
    pub errors: Vec<String>,
}

/// Validates every expense against its owner's rule.
///
/// An expense whose employee id is unknown is reported and skipped; the
/// rest of the batch is still processed. Nothing is mutated.
pub fn validate_batch<'a>(
    employees: &'a [Employee],
    expenses: &'a [Expense],
) -> ValidationReport<'a> {
    let directory = EmployeeDirectory::new(employees);
    validate_with(&directory, expenses)
}

fn validate_with<'a>(
    directory: &EmployeeDirectory<'a>,
    expenses: &'a [Expense],
) -> ValidationReport<'a> {
    let mut accepted = Vec::with_capacity(expenses.len());
    let mut errors = Vec::new();

    for expense in expenses {
        let Some(employee) = directory.get(expense.employee_id) else {
            let message = format!(
                "No employee with Id={} for expense {}.",
                expense.employee_id, expense.id
            );
            warn!(expense_id = expense.id, error = %message, "Expense has no owner");
            errors.push(message);
            continue;
        };

        match select_rule(employee).evaluate(employee, expense) {
            RuleOutcome::Accepted { limit } => {
                debug!(
                    expense_id = expense.id,
                    employee_id = employee.id,
                    limit = %limit,
                    "Expense accepted"
                );
                accepted.push(expense);
            }
            RuleOutcome::Rejected(rejection) => {
                let message = rejection.to_string();
                warn!(
                    expense_id = expense.id,
                    employee_id = employee.id,
                    error = %message,
                    "Expense rejected"
                );
                errors.push(message);
            }
        }
    }

    ValidationReport { accepted, errors }
}

/// A serialized export that has not been written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedExport {
    /// The run this output belongs to.
    pub run_id: Uuid,
    /// The complete document.
    pub content: String,
    /// How many expenses the document contains.
    pub accepted: usize,
    /// Messages for the expenses left out.
    pub errors: Vec<String>,
}

/// Runs exports in one format.
///
/// # Example
///
/// ```
/// use expense_exporter::export::{ExportFormat, Exporter, JsonDateStyle};
///
/// let exporter = Exporter::for_format(ExportFormat::Csv, JsonDateStyle::default());
/// let rendered = exporter.render(&[], &[]).unwrap();
/// assert_eq!(rendered.content, "ExpenseId,EmployeeName,Position,Description,Amount,Date\n");
/// assert!(rendered.errors.is_empty());
/// ```
pub struct Exporter {
    serializer: Box<dyn ExpenseSerializer + Send + Sync>,
}

impl Exporter {
    /// Creates an exporter around any serializer.
    pub fn new<S>(serializer: S) -> Self
    where
        S: ExpenseSerializer + Send + Sync + 'static,
    {
        Self {
            serializer: Box::new(serializer),
        }
    }

    /// Creates an exporter for one of the built-in formats.
    pub fn for_format(format: ExportFormat, json_date_style: JsonDateStyle) -> Self {
        match format {
            ExportFormat::Csv => Self::new(CsvSerializer),
            ExportFormat::Xml => Self::new(XmlSerializer),
            ExportFormat::Json => Self::new(JsonSerializer::new(json_date_style)),
        }
    }

    /// The format this exporter produces.
    pub fn format(&self) -> ExportFormat {
        self.serializer.format()
    }

    /// Validates and serializes without touching the filesystem.
    ///
    /// Always produces a complete document, even when every expense is
    /// rejected.
    pub fn render(
        &self,
        employees: &[Employee],
        expenses: &[Expense],
    ) -> ExporterResult<RenderedExport> {
        self.render_run(Uuid::new_v4(), employees, expenses)
    }

    /// Validates, serializes and writes the export to `destination`.
    ///
    /// The destination is overwritten in full. Record-level problems end up
    /// in [`ExportResult::errors`]; only a serializer fault or a failed write
    /// returns `Err`, and the write happens after every expense has been
    /// validated.
    pub fn export(
        &self,
        employees: &[Employee],
        expenses: &[Expense],
        destination: impl AsRef<Path>,
    ) -> ExporterResult<ExportResult> {
        let destination = destination.as_ref();
        let rendered = self.render_run(Uuid::new_v4(), employees, expenses)?;

        fs::write(destination, &rendered.content).map_err(|source| {
            ExporterError::WriteFailed {
                path: destination.display().to_string(),
                source,
            }
        })?;

        info!(
            run_id = %rendered.run_id,
            destination = %destination.display(),
            bytes = rendered.content.len(),
            "Export written"
        );

        Ok(ExportResult::new(
            rendered.run_id,
            destination,
            rendered.accepted,
            rendered.errors,
        ))
    }

    fn render_run(
        &self,
        run_id: Uuid,
        employees: &[Employee],
        expenses: &[Expense],
    ) -> ExporterResult<RenderedExport> {
        let _span = info_span!("export", run_id = %run_id, format = %self.format()).entered();
        info!(
            employees = employees.len(),
            expenses = expenses.len(),
            "Starting export"
        );

        let directory = EmployeeDirectory::new(employees);
        let report = validate_with(&directory, expenses);
        let records = ExportRecord::shape(&report.accepted, &directory)?;
        let content = self.serializer.serialize(&records)?;

        info!(
            accepted = records.len(),
            rejected = report.errors.len(),
            "Export rendered"
        );

        Ok(RenderedExport {
            run_id,
            content,
            accepted: records.len(),
            errors: report.errors,
        })
    }
}

impl fmt::Debug for Exporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exporter")
            .field("format", &self.format())
            .finish()
    }
}
