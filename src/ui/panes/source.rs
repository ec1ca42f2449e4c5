//! Source code pane rendering with token-driven highlighting
//!
//! Colours come from the lexer's own token stream rather than a separate
//! highlighter, so what the pane shows is exactly how the source was
//! tokenized. The line holding the selected token gets the current-line
//! background and the token itself the selection background.

use super::{border_style, token_style};
use crate::parser::token::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the source pane
pub struct SourceRenderData<'a> {
    pub source_code: &'a str,
    pub tokens: &'a [Token],
    pub selected: Option<usize>,
}

/// Number of source bytes a token covers on its first line.
pub(crate) fn source_width(token: &Token) -> usize {
    match token.kind {
        TokenKind::EndOfInput => 0,
        TokenKind::StringLiteral => token.literal.len() + 2,
        _ => token.literal.len(),
    }
}

/// Highlight one line using the tokens that start on it.
fn highlight_line<'a>(
    line: &'a str,
    line_tokens: &[(usize, &Token)],
    selected: Option<usize>,
) -> Line<'a> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for &(index, token) in line_tokens {
        let start = token.location.column.saturating_sub(1);
        let end = (start + source_width(token)).min(line.len());
        if start < cursor || start >= end {
            continue;
        }

        let (Some(gap), Some(text)) = (line.get(cursor..start), line.get(start..end)) else {
            return Line::raw(line);
        };

        if !gap.is_empty() {
            spans.push(Span::raw(gap));
        }

        let mut style = token_style(token.kind);
        if selected == Some(index) {
            style = style
                .bg(DEFAULT_THEME.selection_bg)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(text, style));
        cursor = end;
    }

    match line.get(cursor..) {
        Some(rest) if !rest.is_empty() => spans.push(Span::raw(rest)),
        Some(_) => {}
        None => return Line::raw(line),
    }

    Line::from(spans)
}

/// Adjust `offset` so that `line_idx` falls inside a window of `height` rows.
pub(crate) fn follow(offset: usize, line_idx: usize, height: usize) -> usize {
    if line_idx < offset {
        line_idx
    } else if line_idx >= offset + height {
        line_idx + 1 - height
    } else {
        offset
    }
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    data: SourceRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Source Code ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines: Vec<&str> = data.source_code.split('\n').collect();
    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    let current_line = data
        .selected
        .and_then(|i| data.tokens.get(i))
        .map(|t| t.location.line)
        .unwrap_or(0);

    if !is_focused && current_line > 0 {
        *scroll_offset = follow(*scroll_offset, current_line - 1, visible_height);
    }

    if total_lines > visible_height {
        *scroll_offset = (*scroll_offset).min(total_lines - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, &line)| {
            let line_num = idx + 1;
            let line = line.strip_suffix('\r').unwrap_or(line);
            let is_current = line_num == current_line;

            let line_tokens: Vec<(usize, &Token)> = data
                .tokens
                .iter()
                .enumerate()
                .filter(|(_, t)| t.location.line == line_num && !t.is(TokenKind::EndOfInput))
                .collect();

            let mut content = highlight_line(line, &line_tokens, data.selected);

            let num_style = if is_current {
                for span in &mut content.spans {
                    span.style = span.style.patch(Style::default().bg(DEFAULT_THEME.current_line_bg));
                }
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
