//! Spending rules for the expense exporter.
//!
//! Every employee carries one [`ValidationRule`], chosen by [`select_rule`]
//! from the employee's [`ValidationMode`](crate::models::ValidationMode).
//! A rule decides whether a single expense is acceptable and, when it is
//! not, always says why through a [`Rejection`].
//!
//! Limits are compared inclusively with exact decimal arithmetic: an amount
//! equal to the limit is accepted.

mod custom_formula;
mod fixed_amount;
mod formula;
mod percent_of_salary;
mod selector;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Employee, Expense};

pub use custom_formula::check_custom_formula;
pub use fixed_amount::check_fixed_amount;
pub use formula::{Formula, FormulaError, FormulaLimit, resolve_limit};
pub use percent_of_salary::check_percent_of_salary;
pub use selector::{check_expense, select_rule};

/// Why an expense was not accepted.
///
/// The `Display` text is the message shown to the user. Limit breaches always
/// mention the amount and the computed limit; formula problems always start
/// with `Unsupported formula`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The amount is above a fixed limit.
    #[error("Expense {amount:.2} exceeds fixed limit {limit:.2} for {employee}.")]
    FixedLimitExceeded {
        /// The claimed amount.
        amount: Decimal,
        /// The configured limit.
        limit: Decimal,
        /// The employee's display name.
        employee: String,
    },

    /// The amount is above the allowed share of salary.
    #[error("Expense {amount:.2} exceeds {percent}% of salary ({limit:.2}) for {employee}.")]
    SalaryShareExceeded {
        /// The claimed amount.
        amount: Decimal,
        /// The allowed share as a percentage (30 for a factor of 0.3).
        percent: Decimal,
        /// The computed limit.
        limit: Decimal,
        /// The employee's display name.
        employee: String,
    },

    /// The amount is above the limit computed from a custom formula.
    #[error("Expense {amount:.2} exceeds formula \"{formula}\" (limit {limit:.2}) for {employee}.")]
    FormulaLimitExceeded {
        /// The claimed amount.
        amount: Decimal,
        /// The computed limit.
        limit: Decimal,
        /// The formula as configured.
        formula: String,
        /// The employee's display name.
        employee: String,
    },

    /// The custom formula could not be parsed.
    #[error(transparent)]
    Formula(#[from] FormulaError),
}

/// The decision a rule makes about one expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The expense is within the limit.
    Accepted {
        /// The limit the expense was checked against.
        limit: Decimal,
    },
    /// The expense is not acceptable.
    Rejected(Rejection),
}

impl RuleOutcome {
    /// Returns true if the expense was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns the rejection, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

/// A spending rule bound to its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationRule {
    /// `amount <= limit`
    FixedAmount {
        /// The maximum allowed amount.
        limit: Decimal,
    },
    /// `amount <= salary * factor`
    PercentOfSalary {
        /// Share of salary, 0.3 meaning 30%.
        factor: Decimal,
    },
    /// `amount <=` the limit computed from the formula.
    CustomFormula {
        /// Formula text such as `AMOUNT <= 0.4 * SALARY`.
        formula: String,
    },
}

impl ValidationRule {
    /// A rule that accepts nothing above zero. Used for misconfigured employees.
    pub fn fail_closed() -> Self {
        Self::FixedAmount {
            limit: Decimal::ZERO,
        }
    }

    /// Checks one expense of `employee` against this rule.
    pub fn evaluate(&self, employee: &Employee, expense: &Expense) -> RuleOutcome {
        match self {
            Self::FixedAmount { limit } => check_fixed_amount(*limit, employee, expense),
            Self::PercentOfSalary { factor } => {
                check_percent_of_salary(*factor, employee, expense)
            }
            Self::CustomFormula { formula } => check_custom_formula(formula, employee, expense),
        }
    }
}

/// Multiplies salary by a factor, saturating instead of overflowing.
pub(crate) fn scale(salary: Decimal, factor: Decimal) -> Decimal {
    salary.checked_mul(factor).unwrap_or_else(|| {
        if salary.is_sign_negative() == factor.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}
