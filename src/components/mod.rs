//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod todo_form;
mod todo_list;
mod todo_row;

pub use delete_confirm_button::DeleteConfirmButton;
pub use todo_form::TodoForm;
pub use todo_list::TodoListView;
pub use todo_row::TodoRow;
