//! Percent-of-salary rule.
//!
//! The limit is the employee's salary multiplied by a configured factor,
//! so 0.3 allows expenses up to 30% of salary.

use rust_decimal::Decimal;

use crate::models::{Employee, Expense};

use super::{Rejection, RuleOutcome, scale};

/// Checks an expense against a share of the employee's salary.
///
/// `factor` is a fraction (0.3 means 30%); the rejection message shows it as
/// a percentage.
pub fn check_percent_of_salary(
    factor: Decimal,
    employee: &Employee,
    expense: &Expense,
) -> RuleOutcome {
    let limit = scale(employee.salary, factor);
    if expense.amount <= limit {
        return RuleOutcome::Accepted { limit };
    }

    RuleOutcome::Rejected(Rejection::SalaryShareExceeded {
        amount: expense.amount,
        percent: scale(factor, Decimal::ONE_HUNDRED).normalize(),
        limit,
        employee: employee.full_name.clone(),
    })
}
