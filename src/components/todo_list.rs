//! Todo List View Component
//!
//! Renders the whole collection in insertion order. The list closure
//! rebuilds every row whenever the collection changes, so deleted rows
//! can never linger.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::AppContext;

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let todos = ctx.todos;

    view! {
        <ul class="todo-list">
            {move || {
                todos
                    .get()
                    .todos()
                    .iter()
                    .cloned()
                    .map(|todo| view! { <TodoRow todo=todo /> })
                    .collect_view()
            }}
        </ul>
        <p class="item-count">
            {move || {
                let n = todos.get().len();
                format!("{} item{}", n, if n == 1 { "" } else { "s" })
            }}
        </p>
    }
}
