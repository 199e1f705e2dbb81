//! Kasir POS Frontend Entry Point

mod api;
mod app;
mod cart;
mod catalog;
mod components;
mod config;
mod models;
mod money;
mod notify;
mod receipt;
mod session;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
