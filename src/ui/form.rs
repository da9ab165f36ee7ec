use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::time::{SystemTime, UNIX_EPOCH};
use crate::app::App;

/// Renders the address input and the submit control
pub fn render_address_form(f: &mut Frame, app: &App, area: Rect, base_color: Color) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(14)])
        .split(area);

    let input_block = Block::default()
        .title(" WALLET ADDRESS ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(base_color));

    let time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let cursor = if time % 2 == 0 { "█" } else { " " };

    let input = if app.address_input.is_empty() {
        Paragraph::new(format!("{}Enter a wallet address", cursor))
            .style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(format!("{}{}", app.address_input, cursor))
            .style(Style::default().fg(Color::White))
    };
    f.render_widget(input.block(input_block), chunks[0]);

    // Disabled while loading or when there is nothing to submit
    let enabled = app.can_submit();
    let (label, style) = if app.snapshot.is_loading() {
        ("LOADING", Style::default().fg(Color::DarkGray))
    } else if enabled {
        (
            "SEARCH",
            Style::default().fg(Color::Black).bg(base_color).add_modifier(Modifier::BOLD),
        )
    } else {
        ("SEARCH", Style::default().fg(Color::DarkGray))
    };

    let border_color = if enabled { base_color } else { Color::DarkGray };
    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );
    f.render_widget(button, chunks[1]);
}
