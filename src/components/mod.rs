//! UI Components
//!
//! Leptos components for the planner sections.

mod calendar_view;
mod gallery;
mod photo_upload_form;
mod priority_selector;
mod summary_cards;
mod tab_bar;
mod todo_form;
mod todo_list;
mod todo_row;

pub use calendar_view::CalendarView;
pub use gallery::Gallery;
pub use photo_upload_form::PhotoUploadForm;
pub use priority_selector::PrioritySelector;
pub use summary_cards::SummaryCards;
pub use tab_bar::TabBar;
pub use todo_form::TodoForm;
pub use todo_list::TodoListView;
pub use todo_row::TodoRow;
