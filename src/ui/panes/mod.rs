//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source code display with token-driven highlighting
//! - [`tokens`]: The lexer's token stream with a selection cursor
//! - [`tree`]: The parsed program and its diagnostics
//! - [`status`]: Status bar with keybindings and parse summary
//!
//! Each pane module exports a primary `render_*` function plus the data it
//! needs. Panes are stateless apart from the scroll offsets the app passes in.

pub mod source;
pub mod status;
pub mod tokens;
pub mod tree;

pub use source::{render_source_pane, SourceRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use tokens::render_tokens_pane;
pub use tree::render_tree_pane;

use crate::parser::token::TokenKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Foreground style for a token of the given kind
pub(crate) fn token_style(kind: TokenKind) -> Style {
    match kind {
        k if k.is_keyword() => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        TokenKind::Identifier => Style::default().fg(DEFAULT_THEME.identifier),
        TokenKind::Integer => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::StringLiteral => Style::default().fg(DEFAULT_THEME.string),
        TokenKind::Illegal => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::UNDERLINED),
        TokenKind::LParen | TokenKind::RParen | TokenKind::LBrace | TokenKind::RBrace => {
            Style::default().fg(DEFAULT_THEME.primary) // Brackets
        }
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}
