//! Custom formula rule.
//!
//! The limit comes from a formula such as `AMOUNT <= 0.4 * SALARY`, resolved
//! against the employee's salary. A formula that cannot be parsed rejects
//! the expense instead of failing the run.

use crate::models::{Employee, Expense};

use super::{Formula, Rejection, RuleOutcome};

/// Checks an expense against the limit computed from `formula`.
pub fn check_custom_formula(
    formula: &str,
    employee: &Employee,
    expense: &Expense,
) -> RuleOutcome {
    let parsed = match Formula::parse(formula) {
        Ok(parsed) => parsed,
        Err(err) => return RuleOutcome::Rejected(err.into()),
    };

    let limit = parsed.limit_for(employee.salary);
    if expense.amount <= limit {
        return RuleOutcome::Accepted { limit };
    }

    RuleOutcome::Rejected(Rejection::FormulaLimitExceeded {
        amount: expense.amount,
        limit,
        formula: parsed.source().to_string(),
        employee: employee.full_name.clone(),
    })
}
