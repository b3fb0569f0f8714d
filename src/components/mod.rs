//! UI Components
//!
//! Row views, the keyed task list and the new-task input.

mod active_row;
mod passive_row;
mod edit_row;
mod task_row;
mod task_list_view;
mod new_task_input;

pub use active_row::ActiveRow;
pub use passive_row::PassiveRow;
pub use edit_row::EditRow;
pub use task_row::TaskRow;
pub use task_list_view::TaskListView;
pub use new_task_input::NewTaskInput;
