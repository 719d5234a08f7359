//! Calendar View Component
//!
//! Month grid with navigation. Today is highlighted, days with todos show
//! a count, high-priority due dates are marked, and clicking a day lists
//! its todos and pre-fills the todo form's due date.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use leptos::prelude::*;
use planner_core::{format_date, is_today, MonthCursor, Week};

use crate::components::TodoRow;
use crate::context::PlannerContext;
use crate::store::{TodoDraftStoreFields, UiStateStoreFields, UiStore};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[component]
pub fn CalendarView(ui: UiStore) -> impl IntoView {
    let ctx = use_context::<PlannerContext>().expect("PlannerContext should be provided");
    let cursor = ui.cursor();

    let weeks = move || {
        cursor.get().weeks().unwrap_or_else(|e| {
            log::error!("cannot build calendar: {}", e);
            Vec::new()
        })
    };

    view! {
        <section class="calendar">
            <div class="calendar-nav">
                <button on:click=move |_| cursor.update(|c| *c = c.prev())>"‹"</button>
                <h2>{move || cursor.get().label()}</h2>
                <button on:click=move |_| cursor.set(MonthCursor::current(ctx.today.get_untracked()))>
                    "Today"
                </button>
                <button on:click=move |_| cursor.update(|c| *c = c.next())>"›"</button>
            </div>

            <table class="calendar-grid">
                <thead>
                    <tr>{WEEKDAYS.iter().map(|d| view! { <th>{*d}</th> }).collect_view()}</tr>
                </thead>
                <tbody>
                    {move || {
                        let month = cursor.get();
                        let today = ctx.today.get();
                        ctx.todos.track();
                        // Recomputed from the todo list on every render
                        let important = if ctx.config.dday_enabled {
                            ctx.todos.with(|store| store.list().important_dates())
                        } else {
                            BTreeSet::new()
                        };
                        weeks()
                            .into_iter()
                            .map(|week| view! { <WeekRow ui=ui month=month week=week today=today important=important.clone() /> })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <DayPanel ui=ui />
        </section>
    }
}

#[component]
fn WeekRow(
    ui: UiStore,
    month: MonthCursor,
    week: Week,
    today: NaiveDate,
    important: BTreeSet<NaiveDate>,
) -> impl IntoView {
    let ctx = use_context::<PlannerContext>().expect("PlannerContext should be provided");

    let cells = week.into_iter().map(|cell| {
        let Some((day, date)) = cell.and_then(|day| month.date_of(day).map(|date| (day, date))) else {
            return view! { <td class="day empty"></td> }.into_any();
        };
        let due_count = ctx.todos.with_untracked(|store| store.list().due_on(date).len());
        let is_important = important.contains(&date);
        let is_selected = move || ui.selected_day().get() == Some(date);

        let on_click = move |_: web_sys::MouseEvent| {
            ui.selected_day().set(Some(date));
            ui.todo_draft().due_date().set(format_date(date));
        };

        view! {
            <td
                class="day"
                class:today=is_today(day, month.month, month.year, today)
                class:important=is_important
                class:selected=is_selected
                on:click=on_click
            >
                <span class="day-number">{day}</span>
                {(due_count > 0).then(|| view! { <span class="day-count">{due_count}</span> })}
            </td>
        }
        .into_any()
    });

    view! { <tr>{cells.collect_view()}</tr> }
}

/// Todos due on the selected day
#[component]
fn DayPanel(ui: UiStore) -> impl IntoView {
    let ctx = use_context::<PlannerContext>().expect("PlannerContext should be provided");
    let selected = ui.selected_day();

    view! {
        {move || selected.get().map(|date| {
            let due = ctx.todos.with(|store| store.list().due_on(date));
            view! {
                <div class="day-panel">
                    <h3>{date.format("%A, %B %-d").to_string()}</h3>
                    {if due.is_empty() {
                        view! { <p class="empty-note">"Nothing due"</p> }.into_any()
                    } else {
                        due.into_iter()
                            .map(|item| view! { <TodoRow item=item /> })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            }
        })}
    }
}
