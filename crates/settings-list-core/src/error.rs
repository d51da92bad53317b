//! Error types for model construction, rendering dispatch and activation.

use crate::model::RowTag;
use thiserror::Error;

/// Errors produced by the list core.
///
/// All of these are logic errors on the caller's side (bad coordinates, a renderer paired
/// with the wrong row kind, an invalid model). Nothing here is transient.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ListError {
    /// A renderer was asked to render a row of a different kind.
    #[error("renderer for {expected:?} rows cannot render a {found:?} row")]
    ConfigurationMismatch {
        /// Kind the renderer was built for.
        expected: RowTag,
        /// Kind of the row it was handed.
        found: RowTag,
    },
    /// A `(section, row)` coordinate outside the model.
    ///
    /// `row` is `None` when the section index itself is invalid.
    #[error("{}", describe_out_of_range(.section, .row))]
    IndexOutOfRange { section: usize, row: Option<usize> },
    /// A row was constructed with an empty name.
    #[error("row {row} in section {section} has an empty name")]
    EmptyName { section: usize, row: usize },
}

fn describe_out_of_range(section: &usize, row: &Option<usize>) -> String {
    match row {
        Some(row) => format!("row {row} in section {section} is out of range"),
        None => format!("section {section} is out of range"),
    }
}

pub type Result<T, E = ListError> = std::result::Result<T, E>;
