//! `smart-todo predict` command.

use crate::todo::predict_completion;

/// Execute the `predict` command.
///
/// # Errors
///
/// Returns an error string if `completed` exceeds `total`.
pub fn run(total: usize, completed: usize, days_worked: u32) -> Result<(), String> {
    println!("{}", render(total, completed, days_worked)?);
    Ok(())
}

fn render(total: usize, completed: usize, days_worked: u32) -> Result<String, String> {
    if completed > total {
        return Err(format!("Completed tasks ({completed}) cannot exceed total tasks ({total})"));
    }
    let prediction = predict_completion(total, completed, days_worked);
    Ok(format!("Predicted days to finish all tasks: {prediction}"))
}
