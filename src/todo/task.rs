//! Task entity and deadline arithmetic.

use std::fmt;

use chrono::{Local, NaiveDate};

use super::error::{Result, TodoError};

/// Signed number of days from the current local date to `deadline`.
///
/// Today is read from the system clock on every call, so repeated calls can
/// return different values across midnight. Negative means overdue.
#[must_use]
pub fn days_left(deadline: NaiveDate) -> i64 {
    days_until(deadline, Local::now().date_naive())
}

/// Signed number of days from `today` to `deadline`.
#[must_use]
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

/// Builds a deadline from raw year/month/day parts.
///
/// # Errors
///
/// Returns [`TodoError::YearOutOfRange`] for years outside 1..=9999 and
/// [`TodoError::InvalidDate`] when the parts do not name a real day
/// (month 13, February 30th, ...).
pub fn deadline_from_parts(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    if !(1..=9999).contains(&year) {
        return Err(TodoError::YearOutOfRange { year });
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(TodoError::InvalidDate { year, month, day })
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    priority: i64,
    deadline: NaiveDate,
    completed: bool,
}

impl Task {
    /// Creates a pending task.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: i64, deadline: NaiveDate) -> Self {
        Self {
            title: title.into(),
            priority,
            deadline,
            completed: false,
        }
    }

    /// Task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Priority as entered; any integer is accepted.
    #[must_use]
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// Deadline date.
    #[must_use]
    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Whether the task has been marked complete.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Marks the task complete. Calling it again has no further effect.
    pub fn mark_complete(&mut self) {
        self.completed = true;
    }

    /// Renders the display line against the current local date.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_on(Local::now().date_naive())
    }

    /// Renders the display line with days left counted from `today`.
    #[must_use]
    pub fn render_on(&self, today: NaiveDate) -> String {
        let status = if self.completed { "Done" } else { "Pending" };
        format!(
            "{} | Priority: {} | {status} | Days Left: {}",
            self.title,
            self.priority,
            days_until(self.deadline, today),
        )
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_task_is_pending() {
        let task = Task::new("Write report", 3, date(2025, 3, 10));
        assert!(!task.is_completed());
        assert_eq!(task.title(), "Write report");
        assert_eq!(task.priority(), 3);
        assert_eq!(task.deadline(), date(2025, 3, 10));
    }

    #[test]
    fn mark_complete_is_idempotent() {
        let mut task = Task::new("Laundry", 1, date(2025, 3, 10));
        task.mark_complete();
        task.mark_complete();
        assert!(task.is_completed());
    }

    #[test]
    fn render_pending_and_done() {
        let today = date(2025, 3, 1);
        let mut task = Task::new("Write report", 3, date(2025, 3, 11));
        assert_eq!(task.render_on(today), "Write report | Priority: 3 | Pending | Days Left: 10");

        task.mark_complete();
        assert_eq!(task.render_on(today), "Write report | Priority: 3 | Done | Days Left: 10");
    }

    #[test]
    fn render_overdue_shows_negative_days() {
        let task = Task::new("Taxes", -2, date(2025, 2, 27));
        assert_eq!(
            task.render_on(date(2025, 3, 1)),
            "Taxes | Priority: -2 | Pending | Days Left: -2"
        );
    }

    #[test]
    fn days_until_handles_leap_years() {
        assert_eq!(days_until(date(2024, 3, 1), date(2024, 2, 28)), 2);
        assert_eq!(days_until(date(2025, 3, 1), date(2025, 2, 28)), 1);
        assert_eq!(days_until(date(2025, 3, 1), date(2025, 3, 1)), 0);
    }

    #[test]
    fn days_left_uses_current_date() {
        let today = Local::now().date_naive();
        // Tolerate a midnight rollover between the two clock reads.
        let left = days_left(today + Duration::days(10));
        assert!(left == 10 || left == 9, "unexpected days left: {left}");
    }

    #[test]
    fn display_matches_render() {
        let task = Task::new("Dentist", 2, Local::now().date_naive());
        let shown = task.to_string();
        assert!(shown.starts_with("Dentist | Priority: 2 | Pending | Days Left: "));
    }

    #[test]
    fn deadline_from_parts_rejects_impossible_dates() {
        assert_eq!(deadline_from_parts(2025, 2, 28), Ok(date(2025, 2, 28)));
        assert_eq!(
            deadline_from_parts(2025, 13, 1),
            Err(TodoError::InvalidDate { year: 2025, month: 13, day: 1 })
        );
        assert!(deadline_from_parts(2025, 2, 29).is_err());
        assert!(deadline_from_parts(2025, 0, 10).is_err());
    }

    #[test]
    fn deadline_from_parts_rejects_years_outside_four_digits() {
        assert_eq!(deadline_from_parts(0, 1, 1), Err(TodoError::YearOutOfRange { year: 0 }));
        assert_eq!(deadline_from_parts(-5, 1, 1), Err(TodoError::YearOutOfRange { year: -5 }));
        assert_eq!(
            deadline_from_parts(10_000, 1, 1),
            Err(TodoError::YearOutOfRange { year: 10_000 })
        );
        assert_eq!(deadline_from_parts(1, 1, 1), Ok(date(1, 1, 1)));
        assert_eq!(deadline_from_parts(9999, 12, 31), Ok(date(9999, 12, 31)));
    }
}
