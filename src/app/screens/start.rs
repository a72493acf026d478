//! Start screen implementation
//!
//! Title screen with the quiz summary and a Start Quiz / Quit menu.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Entries of the start menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartAction {
    Begin,
    Quit,
}

impl StartAction {
    /// Get all menu entries in display order
    pub fn all() -> [Self; 2] {
        [Self::Begin, Self::Quit]
    }

    /// Get display text for the entry
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::Begin => "Start Quiz",
            Self::Quit => "Quit",
        }
    }
}

/// Start screen component
#[derive(Debug)]
pub struct StartScreen {
    question_count: usize,
    time_limit: u32,
    selected_index: usize,
    list_state: ListState,
}

impl StartScreen {
    /// Create a new start screen
    pub fn new(question_count: usize, time_limit: u32) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            question_count,
            time_limit,
            selected_index: 0,
            list_state,
        }
    }

    /// Get the currently selected menu entry
    pub fn selected_action(&self) -> StartAction {
        StartAction::all()[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        let len = StartAction::all().len();
        self.selected_index = (self.selected_index + len - 1) % len;
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        let len = StartAction::all().len();
        self.selected_index = (self.selected_index + 1) % len;
        self.list_state.select(Some(self.selected_index));
    }

    /// Render the start screen
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title and subtitle
                Constraint::Length(4), // Quiz summary
                Constraint::Min(4),    // Menu
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        self.render_title(f, chunks[0]);
        self.render_summary(f, chunks[1]);
        self.render_menu(f, chunks[2]);
        self.render_help(f, chunks[3]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(2)])
            .split(area);

        let title = Paragraph::new("TICKQUIZ")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, title_chunks[0]);

        let subtitle = Paragraph::new("Test your knowledge against the clock")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    fn render_summary(&self, f: &mut Frame, area: Rect) {
        let summary = vec![
            Line::from(format!("{} questions", self.question_count)),
            Line::from(format!("{} seconds per question", self.time_limit)),
        ];
        let paragraph = Paragraph::new(summary)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
    }

    fn render_menu(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = StartAction::all()
            .iter()
            .map(|action| ListItem::new(action.display_text()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let help_text = vec![Line::from(vec![
            Span::styled("↑↓", key_style),
            Span::raw(" Navigate  "),
            Span::styled("Enter", key_style),
            Span::raw(" Select  "),
            Span::styled("Q", key_style),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

        f.render_widget(help, area);
    }
}
