use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};
use crate::app::{App, Tab};
use crate::constants::{NFT_CARD_HEIGHT, NFT_GRID_COLUMNS};
use crate::utils::shorten_id;
use crate::wallet::NonFungibleHolding;

/// Tab bar with counts, then the selected tab's content
pub fn render_holdings(
    f: &mut Frame,
    app: &mut App,
    area: Rect,
    base_color: Color,
    highlight_color: Color,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let titles: Vec<Line> = [Tab::Tokens, Tab::Nfts]
        .iter()
        .map(|tab| Line::from(tab.title(&app.snapshot)))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.selected_tab.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(base_color)),
        )
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(highlight_color).add_modifier(Modifier::BOLD))
        .divider("│");
    f.render_widget(tabs, chunks[0]);

    match app.selected_tab {
        Tab::Tokens => render_token_list(f, app, chunks[1], base_color, highlight_color),
        Tab::Nfts => render_nft_grid(f, app, chunks[1], base_color, highlight_color),
    }
}

fn render_token_list(
    f: &mut Frame,
    app: &mut App,
    area: Rect,
    base_color: Color,
    highlight_color: Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(base_color));

    if app.snapshot.tokens.is_empty() {
        let empty = Paragraph::new("No tokens found")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .snapshot
        .tokens
        .iter()
        .map(|token| {
            let symbol = token.symbol.as_deref().unwrap_or("Unknown");
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10}", symbol), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{:>24}", token.display_amount()),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("   {}", shorten_id(&token.mint_address)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(highlight_color).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.tokens_state);
}

// Cards laid out NFT_GRID_COLUMNS per row; rows scroll to keep the
// selected card visible. No placeholder when empty.
fn render_nft_grid(
    f: &mut Frame,
    app: &App,
    area: Rect,
    base_color: Color,
    highlight_color: Color,
) {
    let nfts = &app.snapshot.nfts;
    if nfts.is_empty() || area.height < NFT_CARD_HEIGHT {
        return;
    }

    let visible_rows = usize::from(area.height / NFT_CARD_HEIGHT);
    let selected = app.nfts_state.selected().unwrap_or(0);
    let selected_row = selected / NFT_GRID_COLUMNS;
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(NFT_CARD_HEIGHT); visible_rows])
        .split(area);

    let column_constraints =
        vec![Constraint::Ratio(1, NFT_GRID_COLUMNS as u32); NFT_GRID_COLUMNS];

    for (row_offset, row) in nfts
        .chunks(NFT_GRID_COLUMNS)
        .skip(first_row)
        .take(visible_rows)
        .enumerate()
    {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints.clone())
            .split(row_areas[row_offset]);

        for (column, nft) in row.iter().enumerate() {
            let index = (first_row + row_offset) * NFT_GRID_COLUMNS + column;
            let border = if index == selected { highlight_color } else { base_color };
            render_nft_card(f, nft, cells[column], border);
        }
    }
}

fn render_nft_card(f: &mut Frame, nft: &NonFungibleHolding, area: Rect, border_color: Color) {
    let block = Block::default()
        .title(format!(" {} ", nft.name))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let image = match &nft.image_url {
        Some(url) => Line::from(vec![
            Span::styled("img ", Style::default().fg(Color::DarkGray)),
            Span::styled(url.clone(), Style::default().fg(Color::Cyan)),
        ]),
        None => Line::from(Span::styled("no image", Style::default().fg(Color::DarkGray))),
    };
    let text = vec![
        Line::from(vec![
            Span::styled(
                nft.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", nft.symbol), Style::default().fg(Color::Yellow)),
        ]),
        image,
    ];

    let card = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(card, area);
}
