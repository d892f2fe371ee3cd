//! Page layout (header, sections, status bar)

use super::delivery::DELIVERY_HEIGHT;
use super::progress::PROGRESS_HEIGHT;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the page gets; wider terminals center it
const PAGE_MAX_WIDTH: u16 = 100;

/// Areas of the tracking page, top to bottom
pub struct PageLayout {
    pub header: Rect,
    pub progress: Rect,
    pub delivery: Rect,
    pub form: Rect,
    pub status_bar: Rect,
}

/// Split the screen into the page sections
pub fn create_layout(area: Rect) -> PageLayout {
    let width = area.width.min(PAGE_MAX_WIDTH);
    let page = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),               // Header
            Constraint::Length(PROGRESS_HEIGHT), // Progress
            Constraint::Length(1),               // Spacing
            Constraint::Length(DELIVERY_HEIGHT), // Delivery estimate
            Constraint::Min(0),                  // Feedback form
            Constraint::Length(1),               // Status bar
        ])
        .split(page);

    PageLayout {
        header: chunks[0],
        progress: chunks[1],
        delivery: chunks[3],
        form: chunks[4],
        status_bar: chunks[5],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Rastreie seu pedido",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Draw the status bar: confirmation message when set, otherwise the stage summary
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.state.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        None => {
            let progress = &app.state.progress;
            let current = progress.stages()[progress.current_stage()].label;
            Line::from(vec![
                Span::styled(" Status: ", Style::default().fg(Color::DarkGray)),
                Span::styled(current, Style::default().fg(Color::Green)),
            ])
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}
