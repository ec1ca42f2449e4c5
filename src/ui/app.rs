//! Main TUI application state and logic

use crate::parser::ast::Program;
use crate::parser::lexer::Lexer;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::Token;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Tree,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> tokens -> tree)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tree,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Tree => FocusedPane::Tokens,
        }
    }
}

/// The main application state
pub struct App {
    /// The source code being inspected
    pub source_code: String,

    /// Full token stream, ending with `EndOfInput`
    pub tokens: Vec<Token>,

    pub program: Program,
    pub errors: Vec<ParseError>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index into `tokens`
    pub selected_token: usize,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub tokens_scroll: usize,
    pub tree_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Lex and parse `source_code` and build the inspector state
    pub fn new(source_code: String) -> Self {
        let tokens = Lexer::new(&source_code).tokenize();
        let mut parser = Parser::new(&source_code);
        let program = parser.parse_program();
        let errors = parser.into_errors();

        let status_message = if errors.is_empty() {
            format!("Parsed {} statement(s)", program.len())
        } else {
            format!(
                "Parsed {} statement(s) with {} diagnostic(s)",
                program.len(),
                errors.len()
            )
        };

        App {
            source_code,
            tokens,
            program,
            errors,
            focused_pane: FocusedPane::Tokens,
            selected_token: 0,
            source_scroll: 0,
            tokens_scroll: 0,
            tree_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Left column: Source (top) | Syntax tree (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            super::panes::SourceRenderData {
                source_code: &self.source_code,
                tokens: &self.tokens,
                selected: Some(self.selected_token),
            },
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_tree_pane(
            frame,
            left_rows[1],
            &self.program,
            &self.errors,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            columns[1],
            &self.tokens,
            self.selected_token,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            super::panes::StatusRenderData {
                message: &self.status_message,
                selected: self.selected_token,
                total_tokens: self.tokens.len(),
                error_count: self.errors.len(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    self.source_scroll = self.source_scroll.saturating_sub(1);
                }
                FocusedPane::Tokens => self.select_prev(),
                FocusedPane::Tree => {
                    self.tree_scroll = self.tree_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    self.source_scroll = self.source_scroll.saturating_add(1);
                }
                FocusedPane::Tokens => self.select_next(),
                FocusedPane::Tree => {
                    self.tree_scroll = self.tree_scroll.saturating_add(1);
                }
            },
            KeyCode::Left => self.select_prev(),
            KeyCode::Right => self.select_next(),
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(self.tokens.len().saturating_sub(1)),
            _ => {}
        }
    }

    pub fn select_next(&mut self) {
        self.select(self.selected_token.saturating_add(1));
    }

    pub fn select_prev(&mut self) {
        self.select(self.selected_token.saturating_sub(1));
    }

    /// Select a token, clamped to the stream, and describe it in the status bar
    pub fn select(&mut self, index: usize) {
        self.selected_token = index.min(self.tokens.len().saturating_sub(1));
        if let Some(token) = self.tokens.get(self.selected_token) {
            self.status_message = format!("{} at {}", token, token.location);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(FocusedPane::Source.next(), FocusedPane::Tokens);
        assert_eq!(FocusedPane::Tree.next(), FocusedPane::Source);
        assert_eq!(FocusedPane::Source.prev(), FocusedPane::Tree);
        assert_eq!(FocusedPane::Tokens.prev().next(), FocusedPane::Tokens);
    }

    #[test]
    fn test_new_parses_source() {
        let app = App::new("let x = 5;\nlet = 1;".to_string());

        assert_eq!(app.tokens.len(), 10);
        assert_eq!(app.program.len(), 1);
        assert_eq!(app.errors.len(), 1);
        assert_eq!(
            app.status_message,
            "Parsed 1 statement(s) with 1 diagnostic(s)"
        );
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut app = App::new("let x;".to_string());
        let last = app.tokens.len() - 1;

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_token, 0);

        press(&mut app, KeyCode::End);
        assert_eq!(app.selected_token, last);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_token, last);
        assert_eq!(app.status_message, "end of input at 1:7");

        press(&mut app, KeyCode::Home);
        assert_eq!(app.selected_token, 0);
        assert_eq!(app.status_message, "Let 'let' at 1:1");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(String::new());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
