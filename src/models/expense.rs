//! Expense model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single expense claimed by an employee.
///
/// The exporter never mutates an expense; a rejected expense only produces
/// an error message.
///
/// # Example
///
/// ```
/// use expense_exporter::models::Expense;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let expense = Expense {
///     id: 10,
///     employee_id: 1,
///     description: "Taxi to client".to_string(),
///     amount: Decimal::new(4550, 2),
///     date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
/// };
/// assert_eq!(expense.amount.to_string(), "45.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Caller-assigned identifier; uniqueness is not checked.
    pub id: u32,
    /// The owning employee. May refer to no known employee.
    pub employee_id: u32,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// The claimed amount.
    pub amount: Decimal,
    /// The calendar date of the expense.
    pub date: NaiveDate,
}
