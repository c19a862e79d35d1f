#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;

use iced::daemon;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting Fast Search");

    daemon(
        app::FastSearchApp::build,
        app::FastSearchApp::handle_update,
        app::FastSearchApp::render_view,
    )
    .title(app::FastSearchApp::window_title)
    .theme(app::FastSearchApp::window_theme)
    .subscription(app::FastSearchApp::handle_subscription)
    .run()
}
