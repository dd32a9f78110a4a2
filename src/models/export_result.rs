//! The outcome of one export run.

use std::path::{Path, PathBuf};

use serde::Serialize;
use uuid::Uuid;

/// The structured result of one export call.
///
/// Built once at the end of a run and read-only afterwards. Errors are kept
/// in the order the offending expenses appeared in the input.
///
/// # Example
///
/// ```
/// use expense_exporter::models::ExportResult;
/// use uuid::Uuid;
///
/// let result = ExportResult::new(
///     Uuid::new_v4(),
///     "expenses.csv",
///     1,
///     vec!["No employee with Id=9 for expense 4.".to_string()],
/// );
/// assert!(result.has_errors());
/// assert_eq!(result.destination().to_str(), Some("expenses.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportResult {
    run_id: Uuid,
    destination: PathBuf,
    accepted: usize,
    errors: Vec<String>,
}

impl ExportResult {
    /// Creates a result for a finished run.
    pub fn new(
        run_id: Uuid,
        destination: impl Into<PathBuf>,
        accepted: usize,
        errors: Vec<String>,
    ) -> Self {
        Self {
            run_id,
            destination: destination.into(),
            accepted,
            errors,
        }
    }

    /// The identifier logged with every event of this run.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Where the export was written.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// How many expenses made it into the export.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// One message per rejected or unresolvable expense.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns true if any expense was left out of the export.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_errors_means_clean_run() {
        let result = ExportResult::new(Uuid::new_v4(), "/tmp/out.json", 3, vec![]);
        assert!(!result.has_errors());
        assert_eq!(result.accepted(), 3);
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_errors_keep_order() {
        let result = ExportResult::new(
            Uuid::new_v4(),
            "/tmp/out.json",
            0,
            vec!["first".to_string(), "second".to_string()],
        );
        assert!(result.has_errors());
        assert_eq!(result.errors(), ["first", "second"]);
    }

    #[test]
    fn test_serializes_for_display() {
        let run_id = Uuid::new_v4();
        let result = ExportResult::new(run_id, "out.csv", 1, vec!["bad".to_string()]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["destination"], "out.csv");
        assert_eq!(json["errors"][0], "bad");
        assert_eq!(json["run_id"], run_id.to_string());
    }
}
