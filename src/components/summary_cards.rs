//! Summary Cards Component
//!
//! Today's date, the next upcoming todo, completion counts and the photo
//! count. Everything is derived from the stores on each render.

use leptos::prelude::*;
use planner_core::{day_diff, dday_label, format_date};

use crate::context::PlannerContext;

#[component]
pub fn SummaryCards() -> impl IntoView {
    let ctx = use_context::<PlannerContext>().expect("PlannerContext should be provided");
    let config = ctx.config;

    let date_label = move || format_date(ctx.today.get());
    let next_todo = move || ctx.todos.with(|store| store.list().next_upcoming(ctx.today.get()));
    let summary = move || ctx.todos.with(|store| store.list().summary(ctx.today.get()));

    view! {
        <section class="summary-cards">
            <div class="card">
                <div class="card-label">"Today"</div>
                <div class="card-value">{date_label}</div>
            </div>

            <div class="card">
                <div class="card-label">"Next up"</div>
                {move || match next_todo() {
                    Some(todo) => {
                        let badge = config
                            .dday_enabled
                            .then(|| dday_label(day_diff(todo.due_date, ctx.today.get())));
                        view! {
                            <div class="card-value">{todo.title}</div>
                            {badge.map(|label| view! { <span class="dday-badge">{label}</span> })}
                        }.into_any()
                    }
                    None => view! { <div class="card-value muted">"Nothing planned"</div> }.into_any(),
                }}
            </div>

            <div class="card">
                <div class="card-label">"Done"</div>
                <div class="card-value">
                    {move || {
                        let s = summary();
                        format!("{}/{}", s.done, s.total)
                    }}
                </div>
                <div class={move || if summary().overdue > 0 { "card-note overdue" } else { "card-note" }}>
                    {move || format!("{} overdue", summary().overdue)}
                </div>
            </div>

            <Show when=move || config.gallery_enabled>
                <div class="card">
                    <div class="card-label">"Photos"</div>
                    <div class="card-value">{move || ctx.photos.with(|store| store.len())}</div>
                </div>
            </Show>
        </section>
    }
}
