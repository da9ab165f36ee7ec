use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

// Helper function to split ASCII art into multiple lines and apply color
pub fn split_ascii_art(art: &str, color: Color) -> Vec<Line<'static>> {
    art.trim_matches('\n')
        .lines()
        .map(|line| Line::from(vec![Span::styled(line.to_string(), Style::default().fg(color))]))
        .collect()
}

// Wraps `text` to `width` columns, one Line per wrapped row
pub fn wrap_lines(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    textwrap::wrap(text, width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row.into_owned(), style)))
        .collect()
}
