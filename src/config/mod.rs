//! Configuration loading for the expense exporter.
//!
//! This module loads export settings and the employee/expense ledger from a
//! directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use expense_exporter::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sample").unwrap();
//! println!("Export destination: {}", config.settings().destination().display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EmployeesFile, ExpensesFile, ExportSettings, Ledger};
