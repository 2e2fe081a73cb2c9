//! Todo Form Component
//!
//! Text entry plus Add button. Submitting with an empty title shows an
//! inline prompt and leaves the collection untouched.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (draft, set_draft) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // Enter inside the input submits the form as well
    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.add(&draft.get()) {
            Ok(()) => {
                set_draft.set(String::new());
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="todo-form" on:submit=add_todo>
            <div class="todo-form-row">
                <input
                    type="text"
                    placeholder="Add a new todo..."
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_draft.set(input.value());
                    }
                />
                <button type="submit">"Add"</button>
            </div>

            {move || error.get().map(|msg| view! {
                <p class="form-error">{msg}</p>
            })}
        </form>
    }
}
