//! Task model: the task entity, the in-memory manager, and the completion
//! forecast.

mod error;
mod manager;
mod predict;
mod task;

pub use error::{Result, TodoError};
pub use manager::TodoManager;
pub use predict::{predict_completion, Prediction};
pub use task::{days_left, days_until, deadline_from_parts, Task};
