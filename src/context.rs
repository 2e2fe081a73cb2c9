//! Application Context
//!
//! The todo list handle provided via the Leptos Context API. Every
//! event handler reaches the collection through this handle rather
//! than an ambient global, and every mutation persists afterwards.

use leptos::prelude::*;

use crate::models::Todo;
use crate::storage;
use crate::store::{AddError, TodoList};

/// Owned handle to the todo collection
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Authoritative collection - read
    pub todos: ReadSignal<TodoList>,
    /// Authoritative collection - write
    set_todos: WriteSignal<TodoList>,
}

impl AppContext {
    pub fn new(todos: (ReadSignal<TodoList>, WriteSignal<TodoList>)) -> Self {
        Self {
            todos: todos.0,
            set_todos: todos.1,
        }
    }

    /// Create a todo from raw input; rejects empty titles untouched
    pub fn add(&self, title: &str) -> Result<(), AddError> {
        let mut result = Ok(());
        self.set_todos.update(|list| {
            result = list.add(title).map(|_| ());
        });
        if result.is_ok() {
            self.persist();
        }
        result
    }

    /// Flip completion of the matching todo (no-op on unknown id)
    pub fn toggle(&self, id: u64) {
        self.set_todos.update(|list| list.toggle(id));
        self.persist();
    }

    /// Delete the matching todo (no-op on unknown id)
    pub fn remove(&self, id: u64) {
        self.set_todos.update(|list| list.remove(id));
        self.persist();
    }

    /// Install a restored or seeded collection wholesale
    pub fn replace_all(&self, items: Vec<Todo>) {
        self.set_todos.update(|list| list.replace_all(items));
        self.persist();
    }

    fn persist(&self) {
        self.todos.with_untracked(|list| storage::save(list.todos()));
    }
}
