//! The errors of the run-time layout conversions.
//!
//! Shape mismatches between records and containers never reach run time; they fail to build. What
//! remains is whether caller-supplied containers hold enough rows.

use thiserror::Error;

/// A layout conversion could not proceed because of its containers' lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LayoutError {
    /// A column held fewer rows than the conversion reads or writes.
    #[error("column {column} holds {found} rows, but {expected} are required")]
    ColumnTooShort {
        /// The index of the column, which is the index of its field.
        column: usize,
        /// The number of rows required.
        expected: usize,
        /// The number of rows present.
        found: usize,
    },
}
