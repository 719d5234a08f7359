//! Planner Configuration
//!
//! Compile-time settings: storage slot names, which variant surfaces are
//! enabled (Cargo features), log level and clock refresh rate.

use log::LevelFilter;
use planner_core::{PHOTOS_SLOT, TODOS_SLOT};

use crate::store::Tab;

/// App-wide settings provided via context
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// localStorage key of the todo list
    pub todos_key: &'static str,
    /// localStorage key of the photo list
    pub photos_key: &'static str,
    pub gallery_enabled: bool,
    /// D-day badges and important-date markers
    pub dday_enabled: bool,
    pub log_level: LevelFilter,
    /// How often "today" is re-read from the clock
    pub clock_refresh_ms: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            todos_key: TODOS_SLOT,
            photos_key: PHOTOS_SLOT,
            gallery_enabled: cfg!(feature = "gallery"),
            dday_enabled: cfg!(feature = "dday"),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
            clock_refresh_ms: 60_000,
        }
    }
}

impl PlannerConfig {
    /// Tabs shown in the tab bar, in order
    pub fn tabs(&self) -> Vec<Tab> {
        let mut tabs = vec![Tab::Calendar, Tab::Todos];
        if self.gallery_enabled {
            tabs.push(Tab::Gallery);
        }
        tabs
    }
}
