//! Results screen implementation
//!
//! Displays the final score with its tier message and offers to play
//! again or quit.

use crate::quiz::Outcome;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Available actions on the results screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    Restart,
    Quit,
}

impl ResultAction {
    /// Get all available actions
    pub fn all() -> [Self; 2] {
        [Self::Restart, Self::Quit]
    }

    /// Get display text for the action
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::Restart => "Play Again",
            Self::Quit => "Quit",
        }
    }
}

/// Results screen component
#[derive(Debug)]
pub struct ResultsScreen {
    outcome: Option<Outcome>,
    selected_action: ResultAction,
}

impl ResultsScreen {
    /// Create a new results screen
    pub fn new() -> Self {
        Self {
            outcome: None,
            selected_action: ResultAction::Restart,
        }
    }

    /// Set the outcome to display
    pub fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.selected_action = ResultAction::Restart;
    }

    /// Get the current outcome
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Get selected action
    pub fn selected_action(&self) -> ResultAction {
        self.selected_action
    }

    /// Select next action
    pub fn select_next_action(&mut self) {
        let actions = ResultAction::all();
        let current = actions
            .iter()
            .position(|a| *a == self.selected_action)
            .unwrap_or(0);
        self.selected_action = actions[(current + 1) % actions.len()];
    }

    /// Select previous action
    pub fn select_previous_action(&mut self) {
        let actions = ResultAction::all();
        let current = actions
            .iter()
            .position(|a| *a == self.selected_action)
            .unwrap_or(0);
        self.selected_action = actions[(current + actions.len() - 1) % actions.len()];
    }

    /// Render the results screen
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(7),    // Score and message
                Constraint::Length(3), // Actions
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        self.render_title(f, chunks[0]);
        self.render_score(f, chunks[1]);
        self.render_actions(f, chunks[2]);
        self.render_help(f, chunks[3]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new("Quiz Results")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, area);
    }

    fn render_score(&self, f: &mut Frame, area: Rect) {
        let Some(outcome) = self.outcome.as_ref() else {
            let empty = Paragraph::new("No quiz finished yet")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(empty, area);
            return;
        };

        let message_style = if outcome.tier.celebrates() {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
        } else {
            Style::default().fg(Color::White)
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("You scored {} out of {}", outcome.score, outcome.total),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{:.0}%", outcome.percentage())),
            Line::from(""),
            Line::from(Span::styled(outcome.tier.message(), message_style)),
        ];
        if outcome.tier.celebrates() {
            lines.push(Line::from(Span::styled(
                "* * * * * * * *",
                Style::default().fg(Color::LightYellow),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_actions(&self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for action in ResultAction::all() {
            let style = if action == self.selected_action {
                Style::default().bg(Color::Cyan).fg(Color::Black)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!(" {} ", action.display_text()), style));
            spans.push(Span::raw("   "));
        }

        let actions = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(actions, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let help_text = Line::from(vec![
            Span::styled("←→", key_style),
            Span::raw(" Choose  "),
            Span::styled("Enter", key_style),
            Span::raw(" Confirm  "),
            Span::styled("R", key_style),
            Span::raw(" Restart  "),
            Span::styled("Q", key_style),
            Span::raw(" Quit"),
        ]);

        let help = Paragraph::new(help_text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(help, area);
    }
}

impl Default for ResultsScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::ScoreTier;

    #[test]
    fn test_results_screen_creation() {
        let screen = ResultsScreen::new();
        assert!(screen.outcome().is_none());
        assert_eq!(screen.selected_action(), ResultAction::Restart);
    }

    #[test]
    fn test_set_outcome_resets_selection() {
        let mut screen = ResultsScreen::new();
        screen.select_next_action();
        assert_eq!(screen.selected_action(), ResultAction::Quit);

        screen.set_outcome(Outcome::new(4, 5));
        assert_eq!(screen.selected_action(), ResultAction::Restart);
        assert_eq!(screen.outcome().map(|o| o.tier), Some(ScoreTier::Great));
    }

    #[test]
    fn test_action_navigation_wraps() {
        let mut screen = ResultsScreen::new();
        screen.select_previous_action();
        assert_eq!(screen.selected_action(), ResultAction::Quit);
        screen.select_previous_action();
        assert_eq!(screen.selected_action(), ResultAction::Restart);
    }

    #[test]
    fn test_action_display_text() {
        assert_eq!(ResultAction::Restart.display_text(), "Play Again");
        assert_eq!(ResultAction::Quit.display_text(), "Quit");
    }
}
