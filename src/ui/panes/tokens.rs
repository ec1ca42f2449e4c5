//! Token stream pane rendering

use super::{border_style, source::follow, token_style};
use crate::parser::token::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// One row of the token list: location, kind, literal.
fn token_line(token: &Token) -> Line<'_> {
    let literal = match token.kind {
        TokenKind::EndOfInput => String::new(),
        TokenKind::StringLiteral => format!("\"{}\"", token.literal.escape_debug()),
        _ => token.literal.escape_debug().to_string(),
    };

    Line::from(vec![
        Span::styled(
            format!("{:>8} ", token.location.to_string()),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(format!("{:<14}", token.kind.to_string()), token_style(token.kind)),
        Span::styled(literal, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Render the token pane, keeping the selected token in view
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Tokens ({}) ", tokens.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let total_items = tokens.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    *scroll_offset = follow(*scroll_offset, selected, visible_height);
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, token)| {
            let item = ListItem::new(token_line(token));
            if idx == selected {
                item.style(Style::default().bg(DEFAULT_THEME.selection_bg))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
