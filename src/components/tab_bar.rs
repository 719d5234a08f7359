//! Tab Bar Component
//!
//! Switches between the planner sections.

use leptos::prelude::*;

use crate::config::PlannerConfig;
use crate::store::{UiStateStoreFields, UiStore};

/// Tab bar component
#[component]
pub fn TabBar(ui: UiStore) -> impl IntoView {
    let config = use_context::<PlannerConfig>().expect("PlannerConfig should be provided");
    let active_tab = ui.active_tab();

    view! {
        <nav class="tab-bar">
            {config.tabs().into_iter().map(|tab| {
                let is_active = move || active_tab.get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "tab active" } else { "tab" }
                        on:click=move |_| active_tab.set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
