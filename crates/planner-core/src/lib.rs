//! Couple Planner Core
//!
//! Browser-independent logic for the planner:
//! - clock: injectable "today"
//! - calendar: month grids and D-day arithmetic
//! - todo / photo: ordered collections and their persisted stores
//! - storage: key-value slots holding JSON arrays

pub mod calendar;
pub mod clock;
pub mod error;
pub mod photo;
pub mod storage;
pub mod todo;

pub use calendar::{day_diff, dday_label, days_in_month, format_date, is_today, month_grid, MonthCursor, Week};
pub use clock::{today_string, Clock, FixedClock, SystemClock};
pub use error::{PlannerError, PlannerResult};
pub use photo::{encode_data_url, PhotoItem, PhotoList, PhotoStore};
pub use storage::{KeyValueStorage, MemoryStorage, Slot, PHOTOS_SLOT, TODOS_SLOT};
pub use todo::{Priority, TodoFilter, TodoItem, TodoList, TodoStore, TodoSummary};
