//! Clock port for obtaining the current calendar date.

use chrono::NaiveDate;

/// Provides today's date.
///
/// Abstracting date access lets tests pin "today" so that days-left
/// columns are deterministic.
pub trait Clock: Send + Sync {
    /// Returns the current local calendar date.
    fn today(&self) -> NaiveDate;
}
