//! Todo Store
//!
//! `TodoList` is the ordered collection (newest first) with all the
//! derived views. `TodoStore` mirrors a list into a storage slot after
//! every mutation.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PlannerError, PlannerResult};
use crate::storage::{KeyValueStorage, Slot, TODOS_SLOT};

/// Task priority. Ranks high < medium < low when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Sort rank, lower comes first
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Human-readable label for the select input
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = PlannerError;

    fn from_str(s: &str) -> PlannerResult<Self> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(PlannerError::InvalidPriority(other.to_string())),
        }
    }
}

/// A task with a due date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: Uuid,
    pub title: String,
    /// Free text, empty when not given
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    #[serde(default)]
    pub done: bool,
}

impl TodoItem {
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// Not done and due strictly before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.done && self.due_date < today
    }
}

/// Counts shown on the summary cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoSummary {
    pub total: usize,
    pub done: usize,
    pub overdue: usize,
}

/// Which todos the list tab shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Done,
}

impl TodoFilter {
    pub const ALL: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Active, TodoFilter::Done];

    pub fn label(&self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Active => "Active",
            TodoFilter::Done => "Done",
        }
    }

    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !item.done,
            TodoFilter::Done => item.done,
        }
    }
}

fn display_order(a: &TodoItem, b: &TodoItem) -> Ordering {
    a.done
        .cmp(&b.done)
        .then_with(|| a.priority.rank().cmp(&b.priority.rank()))
        .then_with(|| a.due_date.cmp(&b.due_date))
}

/// Ordered todo collection, most recently added first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    /// Items in stored (insertion) order
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Prepend a new todo. Returns `None` when the trimmed title is empty.
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        due_date: NaiveDate,
        priority: Priority,
    ) -> Option<Uuid> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let item = TodoItem {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.trim().to_string(),
            due_date,
            priority,
            done: false,
        };
        let id = item.id;
        self.items.insert(0, item);
        Some(id)
    }

    /// Flip the done flag. Returns false if no item has this id.
    pub fn toggle_done(&mut self, id: Uuid) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.done = !item.done;
                true
            }
            None => false,
        }
    }

    /// Remove an item. Returns false if no item has this id.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Not-done first, then by priority, then by due date
    pub fn list_sorted_for_display(&self) -> Vec<TodoItem> {
        let mut sorted = self.items.clone();
        sorted.sort_by(display_order);
        sorted
    }

    /// Display order restricted to a filter
    pub fn filtered(&self, filter: TodoFilter) -> Vec<TodoItem> {
        let mut sorted = self.list_sorted_for_display();
        sorted.retain(|item| filter.matches(item));
        sorted
    }

    /// Open todos due today or later, soonest first
    pub fn list_upcoming(&self, today: NaiveDate) -> Vec<TodoItem> {
        let mut upcoming: Vec<TodoItem> = self
            .items
            .iter()
            .filter(|item| !item.done && item.due_date >= today)
            .cloned()
            .collect();
        upcoming.sort_by(|a, b| {
            a.due_date
                .cmp(&b.due_date)
                .then_with(|| a.priority.rank().cmp(&b.priority.rank()))
        });
        upcoming
    }

    pub fn next_upcoming(&self, today: NaiveDate) -> Option<TodoItem> {
        self.list_upcoming(today).into_iter().next()
    }

    pub fn summary(&self, today: NaiveDate) -> TodoSummary {
        TodoSummary {
            total: self.items.len(),
            done: self.items.iter().filter(|item| item.done).count(),
            overdue: self.items.iter().filter(|item| item.is_overdue(today)).count(),
        }
    }

    /// Distinct due dates of high-priority todos
    pub fn important_dates(&self) -> BTreeSet<NaiveDate> {
        self.items
            .iter()
            .filter(|item| item.priority == Priority::High)
            .map(|item| item.due_date)
            .collect()
    }

    /// Todos due on `date`, in display order
    pub fn due_on(&self, date: NaiveDate) -> Vec<TodoItem> {
        let mut due = self.list_sorted_for_display();
        due.retain(|item| item.due_date == date);
        due
    }
}

/// Todo list mirrored into a storage slot
#[derive(Debug)]
pub struct TodoStore<S> {
    list: TodoList,
    storage: S,
    slot: Slot<TodoItem>,
}

impl<S: KeyValueStorage> TodoStore<S> {
    /// Load from the default todos slot
    pub fn open(storage: S) -> Self {
        Self::open_with_slot(storage, Slot::new(TODOS_SLOT))
    }

    pub fn open_with_slot(storage: S, slot: Slot<TodoItem>) -> Self {
        let list = TodoList::from_items(slot.load(&storage));
        Self { list, storage, slot }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        due_date: NaiveDate,
        priority: Priority,
    ) -> Option<Uuid> {
        let id = self.list.add(title, description, due_date, priority)?;
        log::debug!("added todo {}", id);
        self.persist();
        Some(id)
    }

    pub fn toggle_done(&mut self, id: Uuid) -> bool {
        let changed = self.list.toggle_done(id);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn delete(&mut self, id: Uuid) -> bool {
        let changed = self.list.delete(id);
        if changed {
            log::debug!("deleted todo {}", id);
            self.persist();
        }
        changed
    }

    fn persist(&self) {
        if let Err(e) = self.slot.save(&self.storage, self.list.items()) {
            log::warn!("failed to write slot {}: {}", self.slot.key(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_list() -> TodoList {
        let mut list = TodoList::new();
        list.add("Low later", "", date("2024-02-20"), Priority::Low);
        list.add("High soon", "", date("2024-02-12"), Priority::High);
        list.add("Medium past", "", date("2024-02-01"), Priority::Medium);
        list.add("High past", "", date("2024-02-05"), Priority::High);
        list
    }

    #[test]
    fn test_add_prepends() {
        let mut list = TodoList::new();
        let first = list.add("First", "", date("2024-02-14"), Priority::Low).unwrap();
        let second = list.add("  Second  ", " notes ", date("2024-02-15"), Priority::High).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.items()[0].id, second);
        assert_eq!(list.items()[1].id, first);
        assert_eq!(list.items()[0].title, "Second");
        assert_eq!(list.items()[0].description, "notes");
        assert!(!list.items()[0].done);
        assert_ne!(first, second);
    }

    #[test]
    fn test_add_blank_title_is_noop() {
        let mut list = sample_list();
        let before = list.clone();
        assert!(list.add("", "desc", date("2024-02-14"), Priority::High).is_none());
        assert!(list.add("   \t\n", "", date("2024-02-14"), Priority::High).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_toggle_and_delete() {
        let mut list = TodoList::new();
        let id = list.add("Walk", "", date("2024-02-14"), Priority::Low).unwrap();

        assert!(list.toggle_done(id));
        assert!(list.get(id).unwrap().done);
        assert!(list.toggle_done(id));
        assert!(!list.get(id).unwrap().done);

        assert!(list.delete(id));
        assert!(list.is_empty());
        assert!(!list.delete(id));
    }

    #[test]
    fn test_toggle_missing_id() {
        let mut list = sample_list();
        let before = serde_json::to_string(&list).unwrap();
        assert!(!list.toggle_done(Uuid::new_v4()));
        assert_eq!(serde_json::to_string(&list).unwrap(), before);
    }

    #[test]
    fn test_display_order_groups() {
        let mut list = sample_list();
        let high_past = list.items()[0].id;
        list.toggle_done(high_past);

        let sorted = list.list_sorted_for_display();
        let titles: Vec<&str> = sorted.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["High soon", "Medium past", "Low later", "High past"]);

        let first_done = sorted.iter().position(|t| t.done).unwrap();
        assert!(sorted[first_done..].iter().all(|t| t.done));
        assert!(sorted[..first_done]
            .windows(2)
            .all(|w| w[0].priority.rank() <= w[1].priority.rank()));
    }

    #[test]
    fn test_display_order_same_day() {
        let mut list = TodoList::new();
        list.add("Low", "", date("2024-02-14"), Priority::Low);
        list.add("High", "", date("2024-02-14"), Priority::High);
        list.add("Low again", "", date("2024-02-14"), Priority::Low);

        let sorted = list.list_sorted_for_display();
        assert_eq!(sorted[0].title, "High");
        // Stable for equal keys: newer first as stored
        assert_eq!(sorted[1].title, "Low again");
        assert_eq!(sorted[2].title, "Low");
    }

    #[test]
    fn test_upcoming() {
        let list = sample_list();
        let today = date("2024-02-10");
        let upcoming = list.list_upcoming(today);
        let titles: Vec<&str> = upcoming.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["High soon", "Low later"]);
        assert_eq!(list.next_upcoming(today).unwrap().title, "High soon");
    }

    #[test]
    fn test_upcoming_includes_today_and_ties_by_priority() {
        let mut list = TodoList::new();
        list.add("Low today", "", date("2024-02-10"), Priority::Low);
        list.add("High today", "", date("2024-02-10"), Priority::High);
        let done = list.add("Done today", "", date("2024-02-10"), Priority::High).unwrap();
        list.toggle_done(done);

        let upcoming = list.list_upcoming(date("2024-02-10"));
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].title, "High today");
    }

    #[test]
    fn test_summary() {
        let mut list = sample_list();
        let medium_past = list.items()[1].id;
        list.toggle_done(medium_past);

        let summary = list.summary(date("2024-02-10"));
        assert_eq!(summary, TodoSummary { total: 4, done: 1, overdue: 1 });

        // Due today is not overdue
        let summary = list.summary(date("2024-02-05"));
        assert_eq!(summary.overdue, 0);
    }

    #[test]
    fn test_important_dates() {
        let mut list = sample_list();
        list.add("Another high", "", date("2024-02-12"), Priority::High);
        let dates: Vec<NaiveDate> = list.important_dates().into_iter().collect();
        assert_eq!(dates, vec![date("2024-02-05"), date("2024-02-12")]);
    }

    #[test]
    fn test_due_on_and_filter() {
        let mut list = sample_list();
        list.add("Also soon", "", date("2024-02-12"), Priority::Low);
        let due = list.due_on(date("2024-02-12"));
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].title, "High soon");

        let done_id = list.items()[0].id;
        list.toggle_done(done_id);
        assert_eq!(list.filtered(TodoFilter::Done).len(), 1);
        assert_eq!(list.filtered(TodoFilter::Active).len(), 4);
        assert_eq!(list.filtered(TodoFilter::All).len(), 5);
    }

    #[test]
    fn test_priority_parse() {
        for p in Priority::ALL {
            assert_eq!(p.as_str().parse::<Priority>().unwrap(), p);
        }
        assert!(matches!("urgent".parse::<Priority>(), Err(PlannerError::InvalidPriority(_))));
    }

    #[test]
    fn test_json_shape() {
        let item = TodoItem {
            id: Uuid::nil(),
            title: "Book dinner".to_string(),
            description: String::new(),
            due_date: date("2024-02-14"),
            priority: Priority::High,
            done: false,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["dueDate"], "2024-02-14");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["done"], false);
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_store_persists_mutations() {
        let storage = MemoryStorage::new();
        let mut store = TodoStore::open(&storage);
        let id = store.add("Pay rent", "", date("2024-03-01"), Priority::High).unwrap();
        store.toggle_done(id);

        let reopened = TodoStore::open(&storage);
        assert_eq!(reopened.list(), store.list());
        assert!(reopened.list().get(id).unwrap().done);

        store.delete(id);
        assert_eq!(storage.raw(TODOS_SLOT).unwrap(), "[]");
    }

    #[test]
    fn test_store_noop_does_not_write() {
        let storage = MemoryStorage::new();
        let mut store = TodoStore::open(&storage);
        assert!(store.add(" ", "", date("2024-03-01"), Priority::High).is_none());
        assert!(!store.toggle_done(Uuid::new_v4()));
        assert!(!store.delete(Uuid::new_v4()));
        assert!(storage.raw(TODOS_SLOT).is_none());
    }
}
