//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the task model and the outside
//! world (calendar, terminal). Implementations live in `src/adapters/`.

pub mod clock;
pub mod console;

pub use clock::Clock;
pub use console::Console;
