//! Rule selection.
//!
//! Maps an employee's configured mode to the rule that judges their
//! expenses. Misconfigured employees get [`ValidationRule::fail_closed`].

use crate::models::{Employee, Expense, ValidationMode};

use super::{RuleOutcome, ValidationRule};

/// Returns the rule for `employee`.
///
/// | mode | rule |
/// |---|---|
/// | `FixedAmount` | fixed limit of `max_allowed_amount` |
/// | `PercentOfSalary` | `max_percent_of_salary` of salary |
/// | `CustomFormula` with a non-blank formula | that formula |
/// | `CustomFormula` without a formula, `Unrecognized` | zero fixed limit |
///
/// # Examples
///
/// ```
/// use expense_exporter::models::{Employee, ValidationMode};
/// use expense_exporter::rules::{select_rule, ValidationRule};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 3,
///     full_name: "Maria Georgieva".to_string(),
///     position: "Intern".to_string(),
///     salary: Decimal::new(1200, 0),
///     validation_mode: ValidationMode::CustomFormula,
///     max_allowed_amount: Decimal::ZERO,
///     max_percent_of_salary: Decimal::ZERO,
///     custom_formula: None,
/// };
/// assert_eq!(select_rule(&employee), ValidationRule::fail_closed());
/// ```
pub fn select_rule(employee: &Employee) -> ValidationRule {
    match employee.validation_mode {
        ValidationMode::FixedAmount => ValidationRule::FixedAmount {
            limit: employee.max_allowed_amount,
        },
        ValidationMode::PercentOfSalary => ValidationRule::PercentOfSalary {
            factor: employee.max_percent_of_salary,
        },
        ValidationMode::CustomFormula => match employee.formula() {
            Some(formula) => ValidationRule::CustomFormula {
                formula: formula.to_string(),
            },
            None => ValidationRule::fail_closed(),
        },
        ValidationMode::Unrecognized => ValidationRule::fail_closed(),
    }
}

/// Selects the employee's rule and checks a single expense with it.
///
/// Useful for vetting a new or edited expense before it joins a batch.
pub fn check_expense(employee: &Employee, expense: &Expense) -> RuleOutcome {
    select_rule(employee).evaluate(employee, expense)
}
