//! Fixed amount rule.
//!
//! The expense is accepted when its amount does not exceed a fixed limit
//! configured on the employee.

use rust_decimal::Decimal;

use crate::models::{Employee, Expense};

use super::{Rejection, RuleOutcome};

/// Checks an expense against a fixed limit.
///
/// # Examples
///
/// ```
/// use expense_exporter::models::{Employee, Expense, ValidationMode};
/// use expense_exporter::rules::check_fixed_amount;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 2,
///     full_name: "Petar Petrov".to_string(),
///     position: "Developer".to_string(),
///     salary: Decimal::new(2500, 0),
///     validation_mode: ValidationMode::FixedAmount,
///     max_allowed_amount: Decimal::new(300, 0),
///     max_percent_of_salary: Decimal::ZERO,
///     custom_formula: None,
/// };
/// let expense = Expense {
///     id: 10,
///     employee_id: 2,
///     description: "Software license".to_string(),
///     amount: Decimal::new(300, 0),
///     date: NaiveDate::from_ymd_opt(2025, 3, 13).unwrap(),
/// };
///
/// assert!(check_fixed_amount(Decimal::new(300, 0), &employee, &expense).is_accepted());
/// ```
pub fn check_fixed_amount(limit: Decimal, employee: &Employee, expense: &Expense) -> RuleOutcome {
    if expense.amount <= limit {
        return RuleOutcome::Accepted { limit };
    }

    RuleOutcome::Rejected(Rejection::FixedLimitExceeded {
        amount: expense.amount,
        limit,
        employee: employee.full_name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationMode;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee() -> Employee {
        Employee {
            id: 2,
            full_name: "Petar Petrov".to_string(),
            position: "Developer".to_string(),
            salary: dec("2500"),
            validation_mode: ValidationMode::FixedAmount,
            max_allowed_amount: dec("300"),
            max_percent_of_salary: Decimal::ZERO,
            custom_formula: None,
        }
    }

    fn create_test_expense(amount: Decimal) -> Expense {
        Expense {
            id: 10,
            employee_id: 2,
            description: "Software license".to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2025, 3, 13).unwrap(),
        }
    }

    #[test]
    fn test_amount_below_limit_accepted() {
        let outcome = check_fixed_amount(
            dec("300"),
            &create_test_employee(),
            &create_test_expense(dec("250")),
        );
        assert_eq!(outcome, RuleOutcome::Accepted { limit: dec("300") });
    }

    #[test]
    fn test_amount_equal_to_limit_accepted() {
        let outcome = check_fixed_amount(
            dec("300"),
            &create_test_employee(),
            &create_test_expense(dec("300.00")),
        );
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_amount_one_cent_over_rejected() {
        let outcome = check_fixed_amount(
            dec("300"),
            &create_test_employee(),
            &create_test_expense(dec("300.01")),
        );
        let message = outcome.rejection().unwrap().to_string();

        assert_eq!(
            message,
            "Expense 300.01 exceeds fixed limit 300.00 for Petar Petrov."
        );
    }

    #[test]
    fn test_zero_limit_rejects_positive_amount() {
        let outcome = check_fixed_amount(
            Decimal::ZERO,
            &create_test_employee(),
            &create_test_expense(dec("0.01")),
        );
        assert!(!outcome.is_accepted());
    }

    #[test]
    fn test_zero_limit_accepts_zero_amount() {
        let outcome = check_fixed_amount(
            Decimal::ZERO,
            &create_test_employee(),
            &create_test_expense(Decimal::ZERO),
        );
        assert!(outcome.is_accepted());
    }

    proptest! {
        #[test]
        fn prop_limit_boundary_is_inclusive(cents in 0i64..100_000_000i64) {
            let limit = Decimal::new(cents, 2);
            let employee = create_test_employee();

            let at_limit = check_fixed_amount(limit, &employee, &create_test_expense(limit));
            prop_assert!(at_limit.is_accepted());

            let over = check_fixed_amount(limit, &employee, &create_test_expense(limit + dec("0.01")));
            prop_assert!(!over.is_accepted());
        }
    }
}
