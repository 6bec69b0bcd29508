#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Result;
use iced::{Size, Task};
use smart_form::app::App;
use smart_form::form::Schema;
use smart_form::logging;

fn main() -> Result<()> {
    if let Err(e) = logging::init() {
        eprintln!("logging disabled: {}", e);
    }

    let schema = Schema::builtin()?;
    tracing::debug!(fields = schema.fields().len(), "field table loaded");

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(Size::new(960.0, 900.0))
        .run_with(move || (App::new(schema), Task::none()))?;

    Ok(())
}
