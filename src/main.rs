//! Group Board Frontend Entry Point

mod models;
mod board;
mod error;
mod commands;
mod page;
mod store;
mod controller;
mod snapshot;
mod editor;
mod config;
mod context;
mod components;
mod app;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(log::LevelFilter::Info, 500) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    app::boot();
}
