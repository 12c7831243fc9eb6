//! Scripted adapters that serve canned values instead of touching the
//! system, for deterministic runs of the menu loop.

pub mod clock;
pub mod console;

pub use clock::FixedClock;
pub use console::ScriptedConsole;
