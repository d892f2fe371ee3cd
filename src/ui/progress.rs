//! Order progress indicator

use crate::state::OrderProgress;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows used by the indicator: icon, label, connector
pub const PROGRESS_HEIGHT: u16 = 3;

const COMPLETED: Color = Color::Green;
const PENDING: Color = Color::DarkGray;

/// Draw the stages side by side, one equal-width column each
pub fn draw(frame: &mut Frame, area: Rect, progress: &OrderProgress) {
    let stages = progress.stages();
    let columns = Layout::horizontal(vec![Constraint::Ratio(1, stages.len() as u32); stages.len()])
        .split(area);

    for (index, (stage, column)) in stages.iter().zip(columns.iter()).enumerate() {
        let completed = progress.is_completed(index);
        let color = if completed { COMPLETED } else { PENDING };

        let icon_style = if completed {
            Style::default().fg(Color::Black).bg(COMPLETED)
        } else {
            Style::default().fg(Color::Gray).bg(PENDING)
        };
        let label_style = if completed {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };

        let mut lines = vec![
            Line::from(Span::styled(format!(" {} ", stage.icon), icon_style)),
            Line::from(Span::styled(stage.label, label_style)),
        ];
        if let Some(filled) = progress.connector_filled(index) {
            lines.push(connector_line(column.width, filled));
        }

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            *column,
        );
    }
}

fn connector_line(width: u16, filled: bool) -> Line<'static> {
    let (glyph, color) = if filled { ("━", COMPLETED) } else { ("─", PENDING) };
    Line::from(Span::styled(
        glyph.repeat(width as usize),
        Style::default().fg(color),
    ))
}
