//! Service context bundling all port trait objects.

use chrono::NaiveDate;

use crate::adapters::scripted::FixedClock;
use crate::ports::clock::Clock;
use crate::ports::console::Console;

/// Bundles all port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live, scripted).
pub struct ServiceContext {
    /// Clock for obtaining today's date.
    pub clock: Box<dyn Clock>,
    /// Console for prompts, input and output.
    pub console: Box<dyn Console>,
}

impl ServiceContext {
    /// Creates a live context on the system clock and the process's stdio.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::clock::LiveClock;
        use crate::adapters::live::console::LiveConsole;

        Self {
            clock: Box::new(LiveClock),
            console: Box::new(LiveConsole),
        }
    }

    /// Creates a context pinned to `today` that answers prompts from `console`.
    #[must_use]
    pub fn scripted(today: NaiveDate, console: impl Console + 'static) -> Self {
        Self {
            clock: Box::new(FixedClock::new(today)),
            console: Box::new(console),
        }
    }

    /// Creates a context from arbitrary adapters.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>, console: Box<dyn Console>) -> Self {
        Self { clock, console }
    }
}
