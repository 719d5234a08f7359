//! Planner Context
//!
//! The persisted stores and the ticking "today" signal, shared via the
//! Leptos Context API. Every store mutation goes through a method here.

use chrono::NaiveDate;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use planner_core::{Clock, PhotoStore, Slot, SystemClock, TodoStore};
use uuid::Uuid;

use crate::commands::{BrowserStorage, SelectedFile};
use crate::config::PlannerConfig;
use crate::store::TodoDraft;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct PlannerContext {
    pub config: PlannerConfig,
    /// Todos mirrored to localStorage
    pub todos: RwSignal<TodoStore<BrowserStorage>>,
    /// Photos mirrored to localStorage
    pub photos: RwSignal<PhotoStore<BrowserStorage>>,
    /// Current local date - read
    pub today: ReadSignal<NaiveDate>,
}

impl PlannerContext {
    /// Load both slots and start the clock
    pub fn new(config: PlannerConfig) -> Self {
        let todos = TodoStore::open_with_slot(BrowserStorage, Slot::new(config.todos_key));
        let photos = PhotoStore::open_with_slot(BrowserStorage, Slot::new(config.photos_key));
        log::info!(
            "loaded {} todos and {} photos",
            todos.list().len(),
            photos.len()
        );

        let (today, set_today) = signal(SystemClock.today());
        Interval::new(config.clock_refresh_ms, move || {
            let now = SystemClock.today();
            if now != today.get_untracked() {
                log::debug!("date rolled over to {}", now);
                set_today.set(now);
            }
        })
        .forget();

        Self {
            config,
            todos: RwSignal::new(todos),
            photos: RwSignal::new(photos),
            today,
        }
    }

    /// Add a todo from the form. Returns false if the title was blank.
    pub fn add_todo(&self, draft: &TodoDraft) -> bool {
        let due_date = draft.resolve_due_date(self.today.get_untracked());
        let mut added = false;
        self.todos.update(|store| {
            added = store
                .add(&draft.title, &draft.description, due_date, draft.priority)
                .is_some();
        });
        added
    }

    pub fn toggle_todo(&self, id: Uuid) {
        self.todos.update(|store| {
            store.toggle_done(id);
        });
    }

    pub fn delete_todo(&self, id: Uuid) {
        self.todos.update(|store| {
            store.delete(id);
        });
    }

    pub fn add_photo(&self, title: &str, file: &SelectedFile) {
        self.photos.update(|store| {
            store.add(title, &file.name, &file.mime_type, &file.bytes, &SystemClock);
        });
    }

    pub fn delete_photo(&self, id: Uuid) {
        self.photos.update(|store| {
            store.delete(id);
        });
    }
}
