//! Main application controller
//!
//! `Controller` owns the quiz session and the screens and turns key presses
//! and clock time into session transitions. `App` wraps it with the terminal
//! and runs the draw/poll loop.

use crate::{
    app::{
        screens::{QuestionScreen, ResultAction, ResultsScreen, StartAction, StartScreen},
        state::{AppState, NavigationAction, StateManager},
        tui::{Tui, MAX_POLL},
    },
    config::QuizConfig,
    quiz::{default_questions, ClockTicker, Question, QuizSession, SessionEvent},
    QuizError, Result, FEEDBACK_DELAY, FINISH_DELAY, TICK_PERIOD,
};
use ratatui::Frame;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Delayed step scheduled after a question resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// Move on to the next question
    Advance,
    /// Switch to the results screen
    ShowResults,
}

/// Terminal-independent application logic
#[derive(Debug)]
pub struct Controller {
    state_manager: StateManager,
    session: QuizSession<ClockTicker>,
    start_screen: StartScreen,
    question_screen: QuestionScreen,
    results_screen: ResultsScreen,
    pending: Option<(Instant, Pending)>,
}

impl Controller {
    /// Create a controller over the built-in question bank
    pub fn new(config: &QuizConfig) -> Result<Self> {
        config.validate()?;
        Self::with_questions(default_questions(), config.time_limit_secs)
    }

    /// Create a controller over an explicit question list
    pub fn with_questions(questions: Vec<Question>, time_limit: u32) -> Result<Self> {
        let session = QuizSession::new(questions, time_limit, ClockTicker::new())?;
        Ok(Self {
            state_manager: StateManager::new(),
            start_screen: StartScreen::new(session.total(), time_limit),
            question_screen: QuestionScreen::new(),
            results_screen: ResultsScreen::new(),
            session,
            pending: None,
        })
    }

    pub fn state(&self) -> AppState {
        self.state_manager.current_state()
    }

    pub fn should_quit(&self) -> bool {
        self.state_manager.should_quit()
    }

    pub fn session(&self) -> &QuizSession<ClockTicker> {
        &self.session
    }

    pub fn question_screen(&self) -> &QuestionScreen {
        &self.question_screen
    }

    pub fn results_screen(&self) -> &ResultsScreen {
        &self.results_screen
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending.map(|(_, p)| p)
    }

    /// Handle a navigation action received at `now`
    pub fn handle_action(&mut self, action: NavigationAction, now: Instant) {
        if action == NavigationAction::Quit {
            self.state_manager.quit();
            return;
        }

        match self.state_manager.current_state() {
            AppState::Start => self.handle_start_action(action, now),
            AppState::Quiz => self.handle_quiz_action(action, now),
            AppState::Results => self.handle_results_action(action, now),
        }
    }

    fn handle_start_action(&mut self, action: NavigationAction, now: Instant) {
        match action {
            NavigationAction::Up => self.start_screen.select_previous(),
            NavigationAction::Down => self.start_screen.select_next(),
            NavigationAction::Select => match self.start_screen.selected_action() {
                StartAction::Begin => {
                    info!(total = self.session.total(), "starting quiz");
                    self.pending = None;
                    let event = self.session.start();
                    self.apply(event, now);
                }
                StartAction::Quit => self.state_manager.quit(),
            },
            NavigationAction::Back => self.state_manager.quit(),
            _ => {}
        }
    }

    fn handle_quiz_action(&mut self, action: NavigationAction, now: Instant) {
        match action {
            NavigationAction::Up => self.question_screen.select_previous(),
            NavigationAction::Down => self.question_screen.select_next(),
            NavigationAction::Select => self.submit(self.question_screen.cursor(), now),
            NavigationAction::Choose(index) => self.submit(index, now),
            _ => {}
        }
    }

    fn handle_results_action(&mut self, action: NavigationAction, now: Instant) {
        match action {
            NavigationAction::Left | NavigationAction::Up => {
                self.results_screen.select_previous_action()
            }
            NavigationAction::Right | NavigationAction::Down => {
                self.results_screen.select_next_action()
            }
            NavigationAction::Select => match self.results_screen.selected_action() {
                ResultAction::Restart => self.restart(now),
                ResultAction::Quit => self.state_manager.quit(),
            },
            NavigationAction::Restart => self.restart(now),
            NavigationAction::Back => self.state_manager.transition_to(AppState::Start),
            _ => {}
        }
    }

    fn submit(&mut self, index: usize, now: Instant) {
        match self.session.submit_answer(index) {
            Ok(Some(feedback)) => self.apply(SessionEvent::AnswerResolved(feedback), now),
            Ok(None) => {}
            Err(err) => warn!(index, error = %err, "answer rejected"),
        }
    }

    fn restart(&mut self, now: Instant) {
        self.pending = None;
        match self.session.restart() {
            Some(event) => {
                info!("restarting quiz");
                self.apply(event, now);
            }
            // Results screen shown but the session never finished
            None => warn!(phase = ?self.session.phase(), "restart ignored"),
        }
    }

    /// Feed elapsed countdown ticks and due delayed steps into the session
    pub fn update(&mut self, now: Instant) {
        let due = self.session.ticker_mut().take_due(now);
        for _ in 0..due {
            match self.session.on_timer_tick() {
                Some(event) => self.apply(event, now),
                None => break,
            }
        }

        if let Some((at, step)) = self.pending {
            if now >= at {
                self.pending = None;
                match step {
                    Pending::Advance => {
                        if let Some(event) = self.session.advance() {
                            self.apply(event, now);
                        }
                    }
                    Pending::ShowResults => self.state_manager.transition_to(AppState::Results),
                }
            }
        }
    }

    fn apply(&mut self, event: SessionEvent, now: Instant) {
        match event {
            SessionEvent::QuestionShown { index, total } => {
                // Anchor the countdown to the loop clock
                self.session.ticker_mut().arm_at(now, TICK_PERIOD);
                if let Some(question) = self.session.current_question() {
                    self.question_screen
                        .show_question(question, index, total, self.session.time_limit());
                }
                self.question_screen.set_score(self.session.score());
                self.state_manager.transition_to(AppState::Quiz);
            }
            SessionEvent::TimeTick { remaining } => {
                self.question_screen.update_time(remaining);
            }
            SessionEvent::AnswerResolved(feedback) => {
                info!(
                    question = feedback.question_index,
                    selected = ?feedback.selected,
                    correct = feedback.is_correct,
                    "question resolved"
                );
                self.question_screen.show_feedback(feedback);
                self.question_screen.set_score(self.session.score());
                self.pending = Some((now + FEEDBACK_DELAY, Pending::Advance));
            }
            SessionEvent::Finished(outcome) => {
                info!(score = outcome.score, total = outcome.total, tier = outcome.tier.label(), "quiz finished");
                self.question_screen.set_progress(1.0);
                self.results_screen.set_outcome(outcome);
                self.pending = Some((now + FINISH_DELAY, Pending::ShowResults));
            }
        }
    }

    /// How long the loop may block before something is due
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        let tick = self.session.ticker().until_next(now);
        let step = self.pending.map(|(at, _)| at.saturating_duration_since(now));
        [tick, step]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(MAX_POLL)
    }

    /// Draw the current screen
    pub fn render(&mut self, f: &mut Frame) {
        match self.state_manager.current_state() {
            AppState::Start => self.start_screen.render(f),
            AppState::Quiz => self.question_screen.render(f),
            AppState::Results => self.results_screen.render(f),
        }
    }
}

/// TUI application
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    controller: Controller,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &QuizConfig) -> Result<Self> {
        let tui = Tui::new().map_err(|e| QuizError::TuiError(format!("Failed to open terminal: {}", e)))?;
        Ok(Self {
            tui,
            controller: Controller::new(config)?,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| QuizError::TuiError(format!("Failed to initialize terminal: {}", e)))
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        while !self.controller.should_quit() {
            let now = Instant::now();
            self.controller.update(now);

            let controller = &mut self.controller;
            self.tui.draw(|f| controller.render(f))?;

            let timeout = self.controller.next_wakeup(Instant::now());
            if let Some(key) = self.tui.poll_key(timeout)? {
                let action = StateManager::key_to_navigation(key);
                self.controller.handle_action(action, Instant::now());
            }
        }

        self.tui.restore()?;
        Ok(())
    }
}
