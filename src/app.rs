//! Todo App
//!
//! Root component: owns the collection signal, provides the context
//! handle, and runs the restore-or-seed sequence on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{TodoForm, TodoListView};
use crate::context::AppContext;
use crate::storage;
use crate::store::TodoList;

#[component]
pub fn App() -> impl IntoView {
    let (todos, set_todos) = signal(TodoList::new());

    let ctx = AppContext::new((todos, set_todos));
    provide_context(ctx);

    // Restore on mount; only when nothing was ever persisted, pull the
    // one-time seed batch. At most one fetch per page load.
    Effect::new(move |_| {
        match storage::load() {
            Some(saved) => {
                log::info!("Restored {} todos from storage", saved.len());
                ctx.replace_all(saved);
            }
            None => {
                spawn_local(async move {
                    match api::fetch_seed().await {
                        Ok(seed) => {
                            log::info!("Seeded {} todos", seed.len());
                            ctx.replace_all(seed);
                        }
                        // Abandoned, never retried; the list stays empty
                        Err(e) => log::error!("Failed to fetch seed todos: {}", e),
                    }
                });
            }
        }
    });

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>

            <TodoForm />

            <TodoListView />
        </main>
    }
}
