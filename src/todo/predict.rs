//! Completion forecast from the historical completion rate.

use std::fmt;

/// Outcome of [`predict_completion`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prediction {
    /// Nothing completed yet, or no working days elapsed.
    NotEnoughData,
    /// Estimated days to finish the remaining tasks, rounded to one decimal.
    Days(f64),
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughData => f.write_str("Not enough data"),
            Self::Days(days) => write!(f, "{days:.1}"),
        }
    }
}

/// Extrapolates the days needed to finish the remaining tasks.
///
/// Assumes the rate `completed_tasks / days_worked` holds for the rest of
/// the work. The result is `(total - completed) / rate`, rounded to one
/// decimal place.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn predict_completion(total_tasks: usize, completed_tasks: usize, days_worked: u32) -> Prediction {
    if completed_tasks == 0 || days_worked == 0 {
        return Prediction::NotEnoughData;
    }
    let rate = completed_tasks as f64 / f64::from(days_worked);
    let remaining = total_tasks as f64 - completed_tasks as f64;
    Prediction::Days(round_one_decimal(remaining / rate))
}

/// Rounds to one decimal from the exact binary value, so ties such as
/// `0.25` go to the even digit.
fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
