//! Couple Planner App
//!
//! Top-level controller: owns the UI store, provides the planner context
//! and shows exactly one section at a time.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CalendarView, Gallery, SummaryCards, TabBar, TodoForm, TodoListView};
use crate::config::PlannerConfig;
use crate::context::PlannerContext;
use crate::store::{Tab, UiState, UiStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = PlannerConfig::default();
    let ctx = PlannerContext::new(config);

    // Provide context to all children
    provide_context(config);
    provide_context(ctx);

    // Tab, calendar month and form drafts; reset on every load
    let ui = Store::new(UiState::new(ctx.today.get_untracked()));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Our Planner"</h1>
            </header>

            <SummaryCards />

            <TabBar ui=ui />

            <main class="main-content">
                {move || match ui.active_tab().get() {
                    Tab::Calendar => view! { <CalendarView ui=ui /> }.into_any(),
                    Tab::Todos => view! {
                        <TodoForm ui=ui />
                        <TodoListView ui=ui />
                    }.into_any(),
                    Tab::Gallery => view! { <Gallery ui=ui /> }.into_any(),
                }}
            </main>
        </div>
    }
}
