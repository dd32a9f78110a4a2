//! Expense validation and export engine.
//!
//! This crate checks each employee expense against that employee's spending
//! rule (fixed limit, share of salary, or a small `AMOUNT <= …` formula) and
//! exports the accepted expenses as CSV, XML or JSON, collecting a readable
//! message for every expense it leaves out.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod rules;
