//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! created by `App` and handed to components as a prop.

use chrono::NaiveDate;
use planner_core::{format_date, MonthCursor, Priority, TodoFilter};
use reactive_stores::Store;

/// Top-level sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Calendar,
    Todos,
    Gallery,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Calendar => "Calendar",
            Tab::Todos => "Todos",
            Tab::Gallery => "Gallery",
        }
    }
}

/// Number of photo files still being read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingReads(u32);

impl PendingReads {
    pub fn start(&mut self) {
        self.0 += 1;
    }

    pub fn finish(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.0 > 0
    }
}

/// Values of the new-todo form
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    /// Raw `YYYY-MM-DD` from the date input, empty when unset
    pub due_date: String,
    pub priority: Priority,
}

impl TodoDraft {
    /// Draft pre-set to a due date
    pub fn due_on(date: NaiveDate) -> Self {
        Self {
            due_date: format_date(date),
            ..Default::default()
        }
    }

    /// Parsed due date, `today` when unset or unparseable
    pub fn resolve_due_date(&self, today: NaiveDate) -> NaiveDate {
        NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d").unwrap_or(today)
    }
}

/// UI state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct UiState {
    /// Visible section, never persisted
    pub active_tab: Tab,
    /// Month shown by the calendar
    pub cursor: MonthCursor,
    /// Day clicked in the calendar
    pub selected_day: Option<NaiveDate>,
    /// Todo list filter
    pub filter: TodoFilter,
    pub todo_draft: TodoDraft,
    pub photo_title: String,
    /// Photo files being read
    pub photo_reads: PendingReads,
}

impl UiState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            active_tab: Tab::default(),
            cursor: MonthCursor::current(today),
            selected_day: None,
            filter: TodoFilter::default(),
            todo_draft: TodoDraft::default(),
            photo_title: String::new(),
            photo_reads: PendingReads::default(),
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_draft_due_date() {
        let today = date(2024, 2, 10);
        assert_eq!(TodoDraft::default().resolve_due_date(today), today);

        let draft = TodoDraft::due_on(date(2024, 2, 14));
        assert_eq!(draft.due_date, "2024-02-14");
        assert_eq!(draft.resolve_due_date(today), date(2024, 2, 14));

        let garbage = TodoDraft {
            due_date: "14/02/2024".to_string(),
            ..Default::default()
        };
        assert_eq!(garbage.resolve_due_date(today), today);
    }

    #[test]
    fn test_pending_reads_overlap() {
        let mut reads = PendingReads::default();
        reads.start();
        reads.start();
        reads.finish();
        // The second file is still being read
        assert!(reads.is_active());
        reads.finish();
        assert!(!reads.is_active());
        reads.finish();
        assert!(!reads.is_active());
    }

    #[test]
    fn test_initial_state() {
        let state = UiState::new(date(2024, 2, 10));
        assert_eq!(state.active_tab, Tab::Calendar);
        assert_eq!(state.cursor, MonthCursor::new(2024, 2).unwrap());
        assert!(state.selected_day.is_none());
        assert!(!state.photo_reads.is_active());
    }
}
