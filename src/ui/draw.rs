use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use crate::app::{App, Phase};
use super::{animations, form, holdings, status};

/// Main entry point for UI rendering
/// Shows exactly one of: loading indicator, error banner, or the holdings tabs
pub fn draw(f: &mut Frame, app: &mut App) {
    // Setup color theme
    let base_color = Color::Magenta;
    let highlight_color = Color::LightRed;
    let dim_color = Color::DarkGray;

    // Full screen border
    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(base_color));
    f.render_widget(main_block, f.size());

    // Main layout structure
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),   // Banner
            Constraint::Length(3),   // Address form
            Constraint::Min(5),      // Holdings / loading / error
            Constraint::Length(3),   // Control information
        ])
        .split(f.size());

    animations::render_banner(f, main_layout[0], highlight_color);
    form::render_address_form(f, app, main_layout[1], base_color);

    match app.snapshot.phase.clone() {
        Phase::Loading => status::render_loading(f, app, main_layout[2], base_color),
        Phase::Failed(message) => status::render_error(f, &message, main_layout[2]),
        Phase::Idle | Phase::Ready => {
            holdings::render_holdings(f, app, main_layout[2], base_color, highlight_color)
        }
    }

    render_help(f, main_layout[3], highlight_color, dim_color);
}

fn render_help(f: &mut Frame, area: Rect, highlight_color: Color, dim_color: Color) {
    let key = |k: &'static str| {
        Span::styled(k, Style::default().fg(highlight_color).add_modifier(Modifier::BOLD))
    };
    let help_text = vec![Line::from(vec![
        key("ENTER"),
        Span::raw(" SEARCH"),
        Span::raw("   "),
        key("TAB"),
        Span::raw(" SWITCH TAB"),
        Span::raw("   "),
        key("↑↓"),
        Span::raw(" SCROLL"),
        Span::raw("   "),
        key("^U"),
        Span::raw(" CLEAR"),
        Span::raw("   "),
        key("ESC"),
        Span::raw(" QUIT"),
    ])];

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(dim_color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(dim_color)),
        );
    f.render_widget(help, area);
}
