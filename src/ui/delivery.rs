//! Estimated delivery panel

use crate::state::DeliveryEstimate;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const DELIVERY_HEIGHT: u16 = 5;

/// Label of the live tracking link. It is a placeholder and does not navigate.
pub const LIVE_TRACKING_LABEL: &str = "Rastreie o pedido em tempo real";

pub fn draw(frame: &mut Frame, area: Rect, delivery: &DeliveryEstimate) {
    let lines = vec![
        Line::from(vec![
            Span::raw("A previsão é que seu pedido chegue até "),
            Span::styled(
                delivery.display_date(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            LIVE_TRACKING_LABEL,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::UNDERLINED),
        )),
    ];

    let block = Block::default()
        .title(" Entrega estimada ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
