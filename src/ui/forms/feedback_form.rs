//! Feedback form rendering

use super::field_renderer::{draw_field_error, draw_text_field, field_block};
use crate::state::{FeedbackField, FeedbackForm, MAX_RATING};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the feedback form: rating, comment, image, submit button and key help
pub fn draw(frame: &mut Frame, area: Rect, form: &FeedbackForm) {
    let block = Block::default()
        .title(" Feedback do pedido ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Rating
            Constraint::Length(1),             // Rating error
            Constraint::Min(4),                // Comment
            Constraint::Length(1),             // Comment error
            Constraint::Length(3),             // Image
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    let active = form.active_field;
    let errors = form.errors();

    draw_rating(frame, chunks[0], form.rating(), active == FeedbackField::Rating);
    draw_field_error(
        frame,
        chunks[1],
        errors.message(FeedbackField::Rating).as_deref(),
    );

    draw_text_field(
        frame,
        chunks[2],
        FeedbackField::Comment.label(),
        form.comment(),
        active == FeedbackField::Comment,
        true,
    );
    draw_field_error(
        frame,
        chunks[3],
        errors.message(FeedbackField::Comment).as_deref(),
    );

    let image_display = form
        .image()
        .map(|image| image.display_name())
        .unwrap_or_else(|| "Nenhum arquivo escolhido".to_string());
    let image_style = if form.image().is_some() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let image = Paragraph::new(Span::styled(image_display, image_style)).block(field_block(
        FeedbackField::Image.label(),
        active == FeedbackField::Image,
    ));
    frame.render_widget(image, chunks[4]);

    render_button(
        frame,
        chunks[5],
        FeedbackField::Submit.label(),
        active == FeedbackField::Submit,
        Color::Green,
    );

    frame.render_widget(help_line(active), chunks[6]);
}

fn draw_rating(frame: &mut Frame, area: Rect, rating: u8, is_active: bool) {
    let mut spans: Vec<Span> = (1..=MAX_RATING)
        .map(|star| {
            let color = if star <= rating {
                Color::Yellow
            } else {
                Color::DarkGray
            };
            Span::styled("★ ", Style::default().fg(color))
        })
        .collect();
    if rating > 0 {
        spans.push(Span::styled(
            format!(" {rating}/{MAX_RATING}"),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).block(field_block(FeedbackField::Rating.label(), is_active));
    frame.render_widget(paragraph, area);
}

/// Key hints for the focused field
fn help_line(active: FeedbackField) -> Paragraph<'static> {
    let key = Style::default().fg(Color::Cyan);
    let mut spans = vec![Span::styled("Tab", key), Span::raw(": next field  ")];
    match active {
        FeedbackField::Rating => {
            spans.push(Span::styled("1-5", key));
            spans.push(Span::raw(": rate  "));
        }
        FeedbackField::Image => {
            spans.push(Span::styled("Enter", key));
            spans.push(Span::raw(": choose  "));
            spans.push(Span::styled("Del", key));
            spans.push(Span::raw(": remove  "));
        }
        FeedbackField::Submit => {
            spans.push(Span::styled("Enter", key));
            spans.push(Span::raw(": send  "));
        }
        FeedbackField::Comment => {}
    }
    spans.push(Span::styled(crate::platform::SUBMIT_SHORTCUT, key));
    spans.push(Span::raw(": send  "));
    spans.push(Span::styled("Esc", key));
    spans.push(Span::raw(": quit"));

    Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray))
}
