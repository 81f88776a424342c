#![allow(warnings)]
//! CampusCloset Frontend Entry Point

mod app;
mod components;
mod context;
mod format;
mod logger;
mod services;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    mount_to_body(App);
}
