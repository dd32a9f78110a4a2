//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading export
//! settings and the employee/expense ledger from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ExporterError, ExporterResult};
use crate::models::ExportResult;

use super::types::{EmployeesFile, ExpensesFile, ExportSettings, Ledger};

/// Loads and provides access to an export configuration directory.
///
/// # Directory Structure
///
/// ```text
/// config/sample/
/// ├── export.yaml     # Format, output directory, JSON date style
/// ├── employees.yaml  # Employees and their spending rules
/// └── expenses.yaml   # Expenses to validate and export
/// ```
///
/// # Example
///
/// ```no_run
/// use expense_exporter::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sample")?;
/// let result = loader.export()?;
/// println!("Exported to {}", result.destination().display());
/// # Ok::<(), expense_exporter::error::ExporterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: ExportSettings,
    ledger: Ledger,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing or contains invalid YAML, or
    /// if an employee record fails [`Employee::validate`](crate::models::Employee::validate).
    pub fn load<P: AsRef<Path>>(path: P) -> ExporterResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<ExportSettings>(&path.join("export.yaml"))?;
        let employees = Self::load_yaml::<EmployeesFile>(&path.join("employees.yaml"))?.employees;
        let expenses = Self::load_yaml::<ExpensesFile>(&path.join("expenses.yaml"))?.expenses;

        for employee in &employees {
            employee.validate()?;
        }

        info!(
            path = %path.display(),
            employees = employees.len(),
            expenses = expenses.len(),
            format = %settings.format,
            "Loaded export configuration"
        );

        Ok(Self {
            settings,
            ledger: Ledger::new(employees, expenses),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ExporterResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ExporterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ExporterError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the export settings.
    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Returns the loaded employees and expenses.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Exports the ledger with the configured format and destination.
    pub fn export(&self) -> ExporterResult<ExportResult> {
        let (exporter, destination) = self.settings.exporter();
        exporter.export(
            self.ledger.employees(),
            self.ledger.expenses(),
            destination,
        )
    }
}
