//! Errors raised by task operations and input coercion.

/// Result alias for task operations.
pub type Result<T> = std::result::Result<T, TodoError>;

/// Errors that can occur while building or editing the task list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    /// The year/month/day triple is not a real calendar date.
    #[error("{year:04}-{month:02}-{day:02} is not a valid date")]
    InvalidDate {
        /// Year as entered.
        year: i32,
        /// Month as entered.
        month: u32,
        /// Day as entered.
        day: u32,
    },

    /// Year outside the supported 1..=9999 range.
    #[error("year {year} is out of range")]
    YearOutOfRange {
        /// Year as entered.
        year: i32,
    },

    /// Index outside the current task list.
    #[error("Invalid index.")]
    InvalidIndex {
        /// Zero-based index that was requested.
        index: usize,
        /// Number of tasks at the time of the request.
        len: usize,
    },

    /// Text that was expected to be a number.
    #[error("invalid {field}: {input:?} is not a number")]
    InvalidNumber {
        /// Which field was being read (e.g. "year").
        field: &'static str,
        /// The raw text that failed to parse.
        input: String,
    },
}
