//! Priority Selector Component
//!
//! Enumerated select for todo priority.

use leptos::prelude::*;
use planner_core::Priority;

/// Options in display order, paired with whether each one is selected
fn priority_options(current: Priority) -> [(Priority, bool); 3] {
    Priority::ALL.map(|priority| (priority, priority == current))
}

/// Priority `<select>`
#[component]
pub fn PrioritySelector(
    current: Signal<Priority>,
    on_change: impl Fn(Priority) + Copy + 'static,
) -> impl IntoView {
    // Selection lives on the options; the select's value would be set
    // before its options are appended.
    view! {
        <select
            class="priority-select"
            on:change=move |ev| {
                match event_target_value(&ev).parse::<Priority>() {
                    Ok(priority) => on_change(priority),
                    Err(e) => log::warn!("{}", e),
                }
            }
        >
            {Priority::ALL.into_iter().enumerate().map(|(index, priority)| {
                let is_selected = move || priority_options(current.get())[index].1;
                view! {
                    <option value=priority.as_str() prop:selected=is_selected>{priority.label()}</option>
                }
            }).collect_view()}
        </select>
    }
}
