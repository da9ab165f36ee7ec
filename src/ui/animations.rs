use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use crate::app::App;
use crate::constants::{BANNER, NETWORK_NAME};
use super::utils::split_ascii_art;

/// Title art plus the network line
pub fn render_banner(f: &mut Frame, area: Rect, color: Color) {
    let mut lines = split_ascii_art(BANNER, color);
    lines.push(Line::from(vec![
        Span::styled("NETWORK: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            NETWORK_NAME.to_uppercase(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]));
    let banner = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(banner, area);
}

/// Spinner line shown while a fetch is in flight
pub fn loading_line(app: &App, color: Color) -> Line<'static> {
    let target = app
        .last_address
        .as_deref()
        .map(crate::utils::shorten_id)
        .unwrap_or_default();
    Line::from(vec![
        Span::styled(format!("{} ", app.spinner_frame()), Style::default().fg(color)),
        Span::styled(
            "Loading wallet data",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", target), Style::default().fg(Color::DarkGray)),
    ])
}
