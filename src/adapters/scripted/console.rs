//! Scripted adapter for the Console port.

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use crate::ports::console::Console;

/// Console that answers prompts from a queue of input lines and captures
/// everything written to it.
///
/// Prompts are captured inline without a newline; scripted answers are not
/// echoed into the transcript.
pub struct ScriptedConsole {
    input: Mutex<VecDeque<String>>,
    output: Mutex<String>,
}

impl ScriptedConsole {
    /// Creates a console that will answer prompts with `lines`, in order.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: Mutex::new(lines.into_iter().map(Into::into).collect()),
            output: Mutex::new(String::new()),
        }
    }

    /// Everything written so far, prompts included.
    ///
    /// # Panics
    ///
    /// Panics if the output lock is poisoned.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.output.lock().expect("output lock poisoned").clone()
    }

    /// Number of scripted lines not yet consumed.
    ///
    /// # Panics
    ///
    /// Panics if the input lock is poisoned.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.input.lock().expect("input lock poisoned").len()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&self, text: &str) -> io::Result<()> {
        let mut output = self.output.lock().expect("output lock poisoned");
        output.push_str(text);
        output.push('\n');
        Ok(())
    }

    fn prompt(&self, text: &str) -> io::Result<Option<String>> {
        self.output.lock().expect("output lock poisoned").push_str(text);
        Ok(self.input.lock().expect("input lock poisoned").pop_front())
    }
}
