//! Console port for line-based interactive I/O.

use std::io;

/// Line-oriented terminal access.
///
/// The menu loop only talks to the user through this trait, so it can be
/// driven by scripted input in tests.
pub trait Console: Send + Sync {
    /// Writes `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying stream cannot be written.
    fn write_line(&self, text: &str) -> io::Result<()>;

    /// Writes `text` without a newline and reads one line of input.
    ///
    /// The trailing line terminator is stripped. Returns `Ok(None)` at end
    /// of input.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading input fails.
    fn prompt(&self, text: &str) -> io::Result<Option<String>>;
}

impl<T: Console + ?Sized> Console for std::sync::Arc<T> {
    fn write_line(&self, text: &str) -> io::Result<()> {
        (**self).write_line(text)
    }

    fn prompt(&self, text: &str) -> io::Result<Option<String>> {
        (**self).prompt(text)
    }
}
