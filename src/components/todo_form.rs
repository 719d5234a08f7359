//! Todo Form Component
//!
//! Form for creating todos: title, description, due date and priority.
//! The field values live in the UI store.

use leptos::prelude::*;

use crate::components::PrioritySelector;
use crate::context::PlannerContext;
use crate::store::{TodoDraft, TodoDraftStoreFields, UiStateStoreFields, UiStore};

/// Form for creating new todos
#[component]
pub fn TodoForm(ui: UiStore) -> impl IntoView {
    let ctx = use_context::<PlannerContext>().expect("PlannerContext should be provided");
    let draft = ui.todo_draft();

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // A blank title leaves the form untouched
        if ctx.add_todo(&draft.get_untracked()) {
            draft.set(TodoDraft::default());
        }
    };

    let priority = Signal::derive(move || draft.priority().get());

    view! {
        <form class="todo-form" on:submit=create_todo>
            <input
                type="text"
                class="todo-title-input"
                placeholder="What should we do?"
                prop:value=move || draft.title().get()
                on:input=move |ev| draft.title().set(event_target_value(&ev))
            />
            <textarea
                class="todo-description-input"
                placeholder="Details (markdown)"
                prop:value=move || draft.description().get()
                on:input=move |ev| draft.description().set(event_target_value(&ev))
            />
            <div class="todo-form-row">
                <input
                    type="date"
                    prop:value=move || draft.due_date().get()
                    on:input=move |ev| draft.due_date().set(event_target_value(&ev))
                />
                <PrioritySelector
                    current=priority
                    on_change=move |p| draft.priority().set(p)
                />
                <button type="submit">"Add"</button>
            </div>
        </form>
    }
}
