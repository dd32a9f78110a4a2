//! Configuration types for expense exports.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML files of a configuration directory.

use std::path::PathBuf;

use serde::Deserialize;

use crate::export::{Exporter, JsonDateStyle, select_exporter_with};
use crate::models::{Employee, Expense};

/// Export settings from `export.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportSettings {
    /// Format key (`XML`, `JSON`, `CSV`, case-insensitive).
    pub format: String,
    /// Directory the export file is written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Date layout used by the JSON format.
    #[serde(default)]
    pub json_date_style: JsonDateStyle,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl ExportSettings {
    /// Returns the exporter for these settings and the file it should write.
    ///
    /// An unrecognized format key yields the JSON exporter writing
    /// `expenses.txt`.
    pub fn exporter(&self) -> (Exporter, PathBuf) {
        let (exporter, file_name) = select_exporter_with(&self.format, self.json_date_style);
        (exporter, self.output_dir.join(file_name))
    }

    /// The file the export will be written to.
    pub fn destination(&self) -> PathBuf {
        self.exporter().1
    }
}

/// `employees.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesFile {
    /// The employee records.
    pub employees: Vec<Employee>,
}

/// `expenses.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpensesFile {
    /// The expense records.
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

/// The employee and expense collections loaded from a directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    employees: Vec<Employee>,
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Creates a ledger from its two collections.
    pub fn new(employees: Vec<Employee>, expenses: Vec<Expense>) -> Self {
        Self {
            employees,
            expenses,
        }
    }

    /// Returns all employees, in file order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns all expenses, in file order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFormat;
    use std::path::Path;

    #[test]
    fn test_settings_defaults() {
        let settings: ExportSettings = serde_yaml::from_str("format: csv").unwrap();

        assert_eq!(settings.output_dir, PathBuf::from("."));
        assert_eq!(settings.json_date_style, JsonDateStyle::CalendarDate);
        assert_eq!(settings.destination(), Path::new(".").join("expenses.csv"));
    }

    #[test]
    fn test_settings_select_exporter() {
        let settings: ExportSettings = serde_yaml::from_str(
            "format: XML\noutput_dir: /var/exports\njson_date_style: date_time\n",
        )
        .unwrap();

        let (exporter, destination) = settings.exporter();
        assert_eq!(exporter.format(), ExportFormat::Xml);
        assert_eq!(destination, PathBuf::from("/var/exports/expenses.xml"));
    }

    #[test]
    fn test_unknown_format_writes_txt_json() {
        let settings: ExportSettings = serde_yaml::from_str("format: parquet").unwrap();

        let (exporter, destination) = settings.exporter();
        assert_eq!(exporter.format(), ExportFormat::Json);
        assert!(destination.ends_with("expenses.txt"));
    }
}
