//! Todo Row Component
//!
//! One list row: completion checkbox, title, delete affordance.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::Todo;

#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = todo.id;

    view! {
        <li class="todo-row" class:completed=todo.completed>
            <input
                type="checkbox"
                checked=todo.completed
                on:change=move |_| ctx.toggle(id)
            />
            <span class="todo-title">{todo.title.clone()}</span>
            <DeleteConfirmButton
                button_class="delete-btn"
                on_confirm=move || ctx.remove(id)
            />
        </li>
    }
}
