//! Syntax tree pane rendering
//!
//! Shows the parsed [`Program`] one statement per branch, followed by the
//! diagnostics the parser recorded.

use super::border_style;
use crate::parser::ast::{Expression, Node, Program, Statement};
use crate::parser::parse::ParseError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn node_span(name: &str) -> Span<'static> {
    Span::styled(name.to_string(), Style::default().fg(DEFAULT_THEME.node_name))
}

fn dim(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(DEFAULT_THEME.comment))
}

fn value_line(prefix: &str, value: Option<&Expression>) -> Line<'static> {
    match value {
        Some(Expression::Identifier(ident)) => Line::from(vec![
            dim(prefix.to_string()),
            node_span("Identifier "),
            Span::raw(ident.name.clone()),
        ]),
        None => Line::from(vec![
            dim(prefix.to_string()),
            dim("value: (skipped)".to_string()),
        ]),
    }
}

/// Build the pane's lines for a program and its diagnostics
pub fn tree_lines(program: &Program, errors: &[ParseError]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        node_span("Program "),
        dim(format!("({} statements)", program.len())),
    ])];

    for (idx, stmt) in program.statements.iter().enumerate() {
        let last = idx + 1 == program.len();
        let (branch, indent) = if last { ("└─ ", "   ") } else { ("├─ ", "│  ") };

        let name = match stmt {
            Statement::Let(_) => "LetStatement ",
            Statement::Return(_) => "ReturnStatement ",
        };
        lines.push(Line::from(vec![
            dim(branch.to_string()),
            node_span(name),
            Span::raw(format!("`{}` ", stmt)),
            dim(format!("@{}", stmt.location())),
        ]));

        match stmt {
            Statement::Let(let_stmt) => {
                lines.push(Line::from(vec![
                    dim(format!("{}├─ ", indent)),
                    node_span("Identifier "),
                    Span::raw(let_stmt.name.token_literal().to_string()),
                ]));
                lines.push(value_line(&format!("{}└─ ", indent), let_stmt.value.as_ref()));
            }
            Statement::Return(ret_stmt) => {
                lines.push(value_line(&format!("{}└─ ", indent), ret_stmt.value.as_ref()));
            }
        }
    }

    if !errors.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("Diagnostics ({})", errors.len()),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        ));
        for err in errors {
            lines.push(Line::from(vec![
                dim(format!("{:>8} ", err.location().to_string())),
                Span::styled(err.to_string(), Style::default().fg(DEFAULT_THEME.error)),
            ]));
        }
    }

    lines
}

/// Render the syntax tree pane
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    program: &Program,
    errors: &[ParseError],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title_style = if errors.is_empty() {
        Style::default().fg(DEFAULT_THEME.success)
    } else {
        Style::default().fg(DEFAULT_THEME.error)
    };
    let block = Block::default()
        .title(Span::styled(" Syntax Tree ", title_style))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines = tree_lines(program, errors);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Clamp scroll offset only if content exceeds visible area
    if lines.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(lines.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}
