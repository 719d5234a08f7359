//! Todo List Component
//!
//! Filter buttons and the todos in display order.

use leptos::prelude::*;
use planner_core::TodoFilter;

use crate::components::TodoRow;
use crate::context::PlannerContext;
use crate::store::{UiStateStoreFields, UiStore};

#[component]
pub fn TodoListView(ui: UiStore) -> impl IntoView {
    let ctx = use_context::<PlannerContext>().expect("PlannerContext should be provided");
    let filter = ui.filter();

    let visible = move || ctx.todos.with(|store| store.list().filtered(filter.get()));

    view! {
        <section class="todo-list">
            <div class="filter-row">
                {TodoFilter::ALL.into_iter().map(|f| view! {
                    <button
                        class=move || if filter.get() == f { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| filter.set(f)
                    >
                        {f.label()}
                    </button>
                }).collect_view()}
            </div>

            <For
                each=visible
                // done is part of the key so a toggle re-renders the row
                key=|item| (item.id, item.done)
                children=move |item| view! { <TodoRow item=item /> }
            />

            <Show when=move || visible().is_empty()>
                <p class="empty-note">"No todos here"</p>
            </Show>
        </section>
    }
}
