//! Question screen implementation
//!
//! Shows the current question with its answers, the running score, quiz
//! progress and the countdown. After resolution it reveals the correct
//! answer and marks a wrong pick.

use crate::quiz::{AnswerFeedback, AnswerHighlight, Question};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Question screen component
#[derive(Debug, Default)]
pub struct QuestionScreen {
    prompt: String,
    answers: Vec<String>,
    index: usize,
    total: usize,
    score: usize,
    time_limit: u32,
    time_remaining: u32,
    progress: f64,
    cursor: usize,
    list_state: ListState,
    feedback: Option<AnswerFeedback>,
}

impl QuestionScreen {
    /// Create an empty question screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a freshly shown question
    pub fn show_question(&mut self, question: &Question, index: usize, total: usize, time_limit: u32) {
        self.prompt = question.prompt.clone();
        self.answers = question.answers.iter().map(|a| a.text.clone()).collect();
        self.index = index;
        self.total = total;
        self.time_limit = time_limit;
        self.time_remaining = time_limit;
        self.progress = if total == 0 { 0.0 } else { index as f64 / total as f64 };
        self.cursor = 0;
        self.list_state.select(Some(0));
        self.feedback = None;
    }

    /// Update the countdown
    pub fn update_time(&mut self, remaining: u32) {
        self.time_remaining = remaining;
    }

    /// Reveal the resolution of the current question
    pub fn show_feedback(&mut self, feedback: AnswerFeedback) {
        if feedback.timed_out() {
            self.time_remaining = 0;
        }
        self.feedback = Some(feedback);
    }

    /// Update the running score
    pub fn set_score(&mut self, score: usize) {
        self.score = score;
    }

    /// Update the quiz progress bar (0.0 to 1.0)
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = progress.clamp(0.0, 1.0);
    }

    /// Answer index under the cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Move the cursor up, ignored once the question is resolved
    pub fn select_previous(&mut self) {
        if self.answers.is_empty() || self.feedback.is_some() {
            return;
        }
        self.cursor = (self.cursor + self.answers.len() - 1) % self.answers.len();
        self.list_state.select(Some(self.cursor));
    }

    /// Move the cursor down, ignored once the question is resolved
    pub fn select_next(&mut self) {
        if self.answers.is_empty() || self.feedback.is_some() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.answers.len();
        self.list_state.select(Some(self.cursor));
    }

    /// Render the question screen
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Counter and score
                Constraint::Length(3), // Quiz progress
                Constraint::Length(5), // Prompt
                Constraint::Min(6),    // Answers
                Constraint::Length(3), // Countdown
                Constraint::Length(3), // Help / status
            ])
            .split(f.size());

        self.render_header(f, chunks[0]);
        self.render_progress(f, chunks[1]);
        self.render_prompt(f, chunks[2]);
        self.render_answers(f, chunks[3]);
        self.render_countdown(f, chunks[4]);
        self.render_status(f, chunks[5]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(
                format!("Question {} of {}", self.index + 1, self.total),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                format!("Score: {}", self.score),
                Style::default().fg(Color::Yellow),
            ),
        ]);

        let paragraph = Paragraph::new(header)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(paragraph, area);
    }

    fn render_progress(&self, f: &mut Frame, area: Rect) {
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Progress"))
            .gauge_style(Style::default().fg(Color::Blue))
            .ratio(self.progress);
        f.render_widget(gauge, area);
    }

    fn render_prompt(&self, f: &mut Frame, area: Rect) {
        let prompt = Paragraph::new(self.prompt.as_str())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(prompt, area);
    }

    fn render_answers(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .answers
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let label = format!("{}. {}", i + 1, text);
                let style = match self.feedback.as_ref().map(|fb| fb.highlight(i)) {
                    Some(AnswerHighlight::Correct) => {
                        Style::default().fg(Color::Black).bg(Color::Green)
                    }
                    Some(AnswerHighlight::Incorrect) => {
                        Style::default().fg(Color::White).bg(Color::Red)
                    }
                    Some(AnswerHighlight::Neutral) => Style::default().fg(Color::DarkGray),
                    None => Style::default(),
                };
                ListItem::new(label).style(style)
            })
            .collect();

        let mut list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Answers"));
        if self.feedback.is_none() {
            list = list
                .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
                .highlight_symbol(">> ");
            f.render_stateful_widget(list, area, &mut self.list_state);
        } else {
            f.render_widget(list, area);
        }
    }

    fn render_countdown(&self, f: &mut Frame, area: Rect) {
        let ratio = if self.time_limit == 0 {
            0.0
        } else {
            f64::from(self.time_remaining) / f64::from(self.time_limit)
        };
        let color = if self.time_remaining <= 3 {
            Color::Red
        } else {
            Color::Green
        };

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Time"))
            .gauge_style(Style::default().fg(color))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(format!("{}s", self.time_remaining));
        f.render_widget(gauge, area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let line = match &self.feedback {
            Some(fb) if fb.timed_out() => Line::from(Span::styled(
                "Time's up!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Some(fb) if fb.is_correct => Line::from(Span::styled(
                "Correct!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Some(_) => Line::from(Span::styled(
                "Wrong answer",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(vec![
                Span::styled("↑↓", key_style),
                Span::raw(" Navigate  "),
                Span::styled("Enter", key_style),
                Span::raw(" Answer  "),
                Span::styled("1-4", key_style),
                Span::raw(" Pick  "),
                Span::styled("Q", key_style),
                Span::raw(" Quit"),
            ]),
        };

        let status = Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(status, area);
    }
}
