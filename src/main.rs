#![allow(warnings)]
//! Couple Planner Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod logging;
mod markdown;
mod store;

use app::App;
use config::PlannerConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(PlannerConfig::default().log_level);
    mount_to_body(App);
}
