//! Employee model and related types.
//!
//! This module defines the Employee struct, the ValidationMode enum that
//! picks the spending rule, and the id-keyed [`EmployeeDirectory`] used to
//! resolve the owner of each expense.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ExporterError, ExporterResult};

/// The spending rule configured on an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Expenses must not exceed a fixed amount.
    FixedAmount,
    /// Expenses must not exceed a share of the employee's salary.
    PercentOfSalary,
    /// Expenses are checked against a free-text formula such as `AMOUNT <= 0.4 * SALARY`.
    CustomFormula,
    /// A mode this version does not know. Selects the zero-limit rule.
    #[serde(other)]
    Unrecognized,
}

/// Represents an employee whose expenses are validated and exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Caller-assigned identifier, unique within a collection.
    pub id: u32,
    /// The display name used in exports and messages.
    pub full_name: String,
    /// The employee's position title.
    pub position: String,
    /// Monthly salary.
    pub salary: Decimal,
    /// The spending rule applied to this employee's expenses.
    pub validation_mode: ValidationMode,
    /// Limit for [`ValidationMode::FixedAmount`].
    #[serde(default)]
    pub max_allowed_amount: Decimal,
    /// Salary factor for [`ValidationMode::PercentOfSalary`] (0.3 means 30%).
    #[serde(default)]
    pub max_percent_of_salary: Decimal,
    /// Formula for [`ValidationMode::CustomFormula`].
    #[serde(default)]
    pub custom_formula: Option<String>,
}

impl Employee {
    /// Checks the record the way a data-entry form would before saving it.
    ///
    /// The export pipeline does not call this: an employee that fails here is
    /// still exported, and a misconfigured rule simply rejects every expense.
    ///
    /// # Examples
    ///
    /// ```
    /// use expense_exporter::models::{Employee, ValidationMode};
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
    /// assert!(employee.validate().is_ok());
    /// ```
    pub fn validate(&self) -> ExporterResult<()> {
        if self.full_name.trim().is_empty() {
            return Err(invalid("full_name", "full name is required"));
        }
        if self.position.trim().is_empty() {
            return Err(invalid("position", "position is required"));
        }
        if self.salary <= Decimal::ZERO {
            return Err(invalid("salary", "salary must be a positive number"));
        }

        match self.validation_mode {
            ValidationMode::FixedAmount if self.max_allowed_amount < Decimal::ZERO => Err(invalid(
                "max_allowed_amount",
                "fixed amount must be a non-negative number",
            )),
            ValidationMode::PercentOfSalary
                if self.max_percent_of_salary <= Decimal::ZERO
                    || self.max_percent_of_salary > Decimal::ONE =>
            {
                Err(invalid(
                    "max_percent_of_salary",
                    "percent must be between 0 and 1 (e.g. 0.3 for 30%)",
                ))
            }
            ValidationMode::CustomFormula if self.formula().is_none() => Err(invalid(
                "custom_formula",
                "formula is required, e.g. AMOUNT <= 0.4 * SALARY",
            )),
            _ => Ok(()),
        }
    }

    /// Returns the custom formula when it is present and not blank.
    pub fn formula(&self) -> Option<&str> {
        self.custom_formula
            .as_deref()
            .filter(|formula| !formula.trim().is_empty())
    }
}

fn invalid(field: &str, message: &str) -> ExporterError {
    ExporterError::InvalidEmployee {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Read-only lookup of employees by id.
///
/// When a collection carries duplicate ids the first occurrence wins.
#[derive(Debug, Clone)]
pub struct EmployeeDirectory<'a> {
    by_id: HashMap<u32, &'a Employee>,
}

impl<'a> EmployeeDirectory<'a> {
    /// Indexes a borrowed employee collection.
    pub fn new(employees: &'a [Employee]) -> Self {
        let mut by_id = HashMap::with_capacity(employees.len());
        for employee in employees {
            by_id.entry(employee.id).or_insert(employee);
        }
        Self { by_id }
    }

    /// Returns the employee with the given id, if any.
    pub fn get(&self, id: u32) -> Option<&'a Employee> {
        self.by_id.get(&id).copied()
    }

    /// Number of distinct employee ids.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if the directory holds no employees.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
