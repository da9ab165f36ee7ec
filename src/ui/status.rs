use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use crate::app::App;
use super::animations::loading_line;
use super::utils::wrap_lines;

pub fn render_loading(f: &mut Frame, app: &App, area: Rect, base_color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = vec![Line::from(""), loading_line(app, base_color)];
    let loading = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(loading, area);
}

/// Error banner with the underlying message, wrapped to the area width
pub fn render_error(f: &mut Frame, message: &str, area: Rect) {
    let block = Block::default()
        .title(" ERROR ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Red));

    let mut text = vec![Line::from(vec![
        Span::styled("✗ ", Style::default().fg(Color::Red)),
        Span::styled(
            "Failed to load wallet",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ])];
    text.extend(wrap_lines(
        message,
        area.width.saturating_sub(4),
        Style::default().fg(Color::Red),
    ));

    let banner = Paragraph::new(text).block(block);
    f.render_widget(banner, area);
}
