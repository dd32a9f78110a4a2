//! Core data models for the expense exporter.
//!
//! This module contains the domain records supplied by callers and the
//! result handed back after an export.

mod employee;
mod expense;
mod export_result;

pub use employee::{Employee, EmployeeDirectory, ValidationMode};
pub use expense::Expense;
pub use export_result::ExportResult;
