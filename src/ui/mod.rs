//! UI module for rendering the TUI

mod components;
mod delivery;
mod forms;
mod layout;
mod progress;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let page = layout::create_layout(frame.area());

    layout::draw_header(frame, page.header);
    progress::draw(frame, page.progress, &app.state.progress);
    delivery::draw(frame, page.delivery, &app.state.delivery);
    forms::draw_feedback_form(frame, page.form, &app.state.form);
    layout::draw_status_bar(frame, page.status_bar, app);

    // Error dialog is drawn last so it overlays everything
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}
