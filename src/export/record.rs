//! The per-record shape shared by every export format.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{ExporterError, ExporterResult};
use crate::models::{EmployeeDirectory, Expense};

/// One accepted expense joined with its owner's name and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord<'a> {
    /// The expense id.
    pub expense_id: u32,
    /// The owning employee's id.
    pub employee_id: u32,
    /// The owning employee's display name.
    pub employee_name: &'a str,
    /// The owning employee's position.
    pub position: &'a str,
    /// The expense description.
    pub description: &'a str,
    /// The amount, with the scale it was entered with.
    pub amount: Decimal,
    /// The expense date.
    pub date: NaiveDate,
}

impl<'a> ExportRecord<'a> {
    /// Joins each expense with its employee, keeping input order.
    ///
    /// Every expense must resolve; the pipeline filters orphans before
    /// serializing, so a miss here is reported as
    /// [`ExporterError::MissingEmployee`].
    pub fn shape(
        expenses: &[&'a Expense],
        directory: &EmployeeDirectory<'a>,
    ) -> ExporterResult<Vec<Self>> {
        expenses
            .iter()
            .map(|&expense| {
                let employee = directory.get(expense.employee_id).ok_or(
                    ExporterError::MissingEmployee {
                        employee_id: expense.employee_id,
                        expense_id: expense.id,
                    },
                )?;

                Ok(Self {
                    expense_id: expense.id,
                    employee_id: employee.id,
                    employee_name: &employee.full_name,
                    position: &employee.position,
                    description: &expense.description,
                    amount: expense.amount,
                    date: expense.date,
                })
            })
            .collect()
    }

    /// The date as `YYYY-MM-DD`.
    pub fn calendar_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
