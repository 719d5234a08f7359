//! Todo Row Component
//!
//! A single todo with its checkbox, due date and delete button.

use leptos::prelude::*;
use planner_core::{day_diff, dday_label, format_date, TodoItem};

use crate::context::PlannerContext;
use crate::markdown::parse_markdown;

/// A single todo row
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_context::<PlannerContext>().expect("PlannerContext should be provided");

    let id = item.id;
    let done = item.done;
    let due_date = item.due_date;
    let priority = item.priority;
    let description = item.has_description().then(|| parse_markdown(&item.description));

    let row_class = move || {
        let mut c = format!("todo-row priority-{}", priority.as_str());
        if done {
            c.push_str(" done");
        } else if due_date < ctx.today.get() {
            c.push_str(" overdue");
        }
        c
    };

    let badge = (ctx.config.dday_enabled && !done).then(|| {
        view! {
            <span class="dday-badge">{move || dday_label(day_diff(due_date, ctx.today.get()))}</span>
        }
    });

    view! {
        <div class=row_class>
            <input
                type="checkbox"
                checked=done
                on:change=move |_| ctx.toggle_todo(id)
            />
            <span class="priority-dot" title=priority.label()></span>
            <div class="todo-body">
                <span class="todo-title">{item.title}</span>
                {description.map(|html| view! { <div class="todo-description" inner_html=html></div> })}
            </div>
            <span class="todo-due">{format_date(due_date)}</span>
            {badge}
            <button class="delete-btn" on:click=move |_| ctx.delete_todo(id)>"×"</button>
        </div>
    }
}
