//! Interactive task menu (`smart-todo run`, the default command).

use std::io;
use std::str::FromStr;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::context::ServiceContext;
use crate::todo::{deadline_from_parts, predict_completion, TodoError, TodoManager};

const MENU: [&str; 7] = [
    "--- SMART TODO APP ---",
    "1. Add Task",
    "2. View Tasks",
    "3. Mark Task Completed",
    "4. Delete Task",
    "5. See Future Prediction",
    "6. Exit",
];

/// Execute the interactive menu on the live terminal.
///
/// # Errors
///
/// Returns an error string if the terminal cannot be read or written.
pub fn run(config: &Config) -> Result<(), String> {
    let ctx = ServiceContext::live();
    run_with_context(&ctx, config)
}

/// Run the menu loop against the given context until Exit or end of input.
///
/// Malformed input is reported on the console and never ends the loop.
///
/// # Errors
///
/// Returns an error string if the console fails.
pub fn run_with_context(ctx: &ServiceContext, config: &Config) -> Result<(), String> {
    info!(days_worked = config.days_worked, "menu started");
    let mut menu = Menu {
        ctx,
        manager: TodoManager::new(),
        days_worked: config.days_worked,
    };
    loop {
        match menu.step() {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => {
                info!(tasks = menu.manager.len(), "menu finished");
                return Ok(());
            }
            Err(e) => return Err(format!("Console error: {e}")),
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// One answer from the user, or end of input.
macro_rules! ask {
    ($menu:expr, $prompt:expr) => {
        match $menu.ctx.console.prompt($prompt)? {
            Some(line) => line,
            None => return Ok(Flow::Exit),
        }
    };
}

struct Menu<'a> {
    ctx: &'a ServiceContext,
    manager: TodoManager,
    days_worked: u32,
}

impl Menu<'_> {
    fn say(&self, text: &str) -> io::Result<()> {
        self.ctx.console.write_line(text)
    }

    fn step(&mut self) -> io::Result<Flow> {
        for line in MENU {
            self.say(line)?;
        }
        let choice = ask!(self, "Enter choice: ");

        if choice.is_empty() || !choice.bytes().all(|b| b.is_ascii_digit()) {
            warn!(input = %choice, "non-numeric menu choice");
            self.say("Invalid input!")?;
            return Ok(Flow::Continue);
        }

        debug!(choice = %choice, "menu choice");
        match choice.parse::<u64>() {
            Ok(1) => self.add(),
            Ok(2) => self.view(),
            Ok(3) => self.complete(),
            Ok(4) => self.delete(),
            Ok(5) => self.predict(),
            Ok(6) => {
                self.say("Goodbye!")?;
                Ok(Flow::Exit)
            }
            _ => {
                self.say("Invalid choice!")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add(&mut self) -> io::Result<Flow> {
        let title = ask!(self, "Task title: ");
        let raw = ask!(self, "Priority (1-5): ");
        let priority = match parse_number::<i64>("priority", &raw) {
            Ok(priority) => priority,
            Err(e) => {
                warn!(error = %e, "task not added");
                self.say("Invalid priority!")?;
                return Ok(Flow::Continue);
            }
        };

        self.say("Enter Deadline:")?;
        let deadline = match self.read_deadline()? {
            Some(Ok(date)) => date,
            Some(Err(e)) => {
                warn!(error = %e, "task not added");
                self.say(&format!("Error getting date: {e}. Please enter valid numbers for date."))?;
                return Ok(Flow::Continue);
            }
            None => return Ok(Flow::Exit),
        };

        self.manager.add_task(title, priority, deadline);
        self.say("Task added.")?;
        Ok(Flow::Continue)
    }

    /// Reads year, month and day, stopping at the first bad part.
    ///
    /// `None` means the input ended.
    fn read_deadline(&self) -> io::Result<Option<Result<NaiveDate, TodoError>>> {
        let Some(year) = self.ctx.console.prompt("Enter year (yyyy): ")? else {
            return Ok(None);
        };
        let year = match parse_number::<i32>("year", &year) {
            Ok(year) => year,
            Err(e) => return Ok(Some(Err(e))),
        };
        let Some(month) = self.ctx.console.prompt("Enter month (mm): ")? else {
            return Ok(None);
        };
        let month = match parse_number::<u32>("month", &month) {
            Ok(month) => month,
            Err(e) => return Ok(Some(Err(e))),
        };
        let Some(day) = self.ctx.console.prompt("Enter day (dd): ")? else {
            return Ok(None);
        };
        let day = match parse_number::<u32>("day", &day) {
            Ok(day) => day,
            Err(e) => return Ok(Some(Err(e))),
        };
        Ok(Some(deadline_from_parts(year, month, day)))
    }

    fn view(&self) -> io::Result<Flow> {
        let lines = self.manager.view_tasks(self.ctx.clock.today());
        if lines.is_empty() {
            self.say("No tasks yet.")?;
        }
        for line in &lines {
            self.say(line)?;
        }
        Ok(Flow::Continue)
    }

    fn complete(&mut self) -> io::Result<Flow> {
        let raw = ask!(self, "Task number: ");
        if let Some(index) = self.read_index(&raw)? {
            if let Err(e) = self.manager.complete_task(index) {
                warn!(error = ?e, "complete rejected");
                self.say(&e.to_string())?;
            }
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> io::Result<Flow> {
        let raw = ask!(self, "Task number to delete: ");
        if let Some(index) = self.read_index(&raw)? {
            if let Err(e) = self.manager.delete_task(index) {
                warn!(error = ?e, "delete rejected");
                self.say(&e.to_string())?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Converts a 1-based task number to a 0-based index, reporting bad
    /// input on the console.
    fn read_index(&self, raw: &str) -> io::Result<Option<usize>> {
        let number = match parse_number::<i64>("task number", raw) {
            Ok(number) => number,
            Err(e) => {
                warn!(error = %e, "bad task number");
                self.say("Invalid task number!")?;
                return Ok(None);
            }
        };
        match number.checked_sub(1).and_then(|i| usize::try_from(i).ok()) {
            Some(index) => Ok(Some(index)),
            None => {
                warn!(number, "task number below 1");
                self.say("Invalid index.")?;
                Ok(None)
            }
        }
    }

    fn predict(&self) -> io::Result<Flow> {
        let prediction = predict_completion(
            self.manager.len(),
            self.manager.completed_count(),
            self.days_worked,
        );
        self.say(&format!("Predicted days to finish all tasks: {prediction}"))?;
        Ok(Flow::Continue)
    }
}

fn parse_number<T: FromStr>(field: &'static str, input: &str) -> Result<T, TodoError> {
    input
        .trim()
        .parse()
        .map_err(|_| TodoError::InvalidNumber { field, input: input.to_string() })
}
