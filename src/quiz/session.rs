//! Quiz session state machine
//!
//! One play-through moves `Idle -> AwaitingAnswer -> Locked -> ... -> Finished`.
//! Answers and countdown expiry both resolve the current question; whichever
//! arrives first wins and the `Locked` phase turns the other into a no-op.

use super::question::Question;
use super::ticker::Ticker;
use super::tier::ScoreTier;
use crate::{QuizError, Result, DEFAULT_TIME_LIMIT, TICK_PERIOD};
use tracing::debug;

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not started yet
    #[default]
    Idle,
    /// Question shown, countdown running, input accepted
    AwaitingAnswer,
    /// Question resolved, feedback on screen, input ignored
    Locked,
    /// No questions left
    Finished,
}

/// How a single answer option should be shown after resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerHighlight {
    Correct,
    Incorrect,
    Neutral,
}

/// Result of resolving one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    /// Index of the resolved question
    pub question_index: usize,
    /// Index of the correct answer
    pub correct_index: usize,
    /// Answer the player picked, `None` when the countdown expired
    pub selected: Option<usize>,
    /// Whether the player earned the point
    pub is_correct: bool,
}

impl AnswerFeedback {
    /// Whether the question was resolved by countdown expiry
    pub fn timed_out(&self) -> bool {
        self.selected.is_none()
    }

    /// Highlight for the answer at `index`
    pub fn highlight(&self, index: usize) -> AnswerHighlight {
        if index == self.correct_index {
            AnswerHighlight::Correct
        } else if self.selected == Some(index) {
            AnswerHighlight::Incorrect
        } else {
            AnswerHighlight::Neutral
        }
    }
}

/// Final score of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub score: usize,
    pub total: usize,
    pub tier: ScoreTier,
}

impl Outcome {
    /// Build the outcome for `score` out of `total`
    pub fn new(score: usize, total: usize) -> Self {
        Self {
            score,
            total,
            tier: ScoreTier::classify(score, total),
        }
    }

    /// Score as a percentage (0.0 to 100.0)
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.score as f64 * 100.0 / self.total as f64
        }
    }
}

/// Notification for the presentation layer after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Entered `AwaitingAnswer` for `index`
    QuestionShown { index: usize, total: usize },
    /// A countdown tick passed without resolving the question
    TimeTick { remaining: u32 },
    /// Entered `Locked`
    AnswerResolved(AnswerFeedback),
    /// Entered `Finished`
    Finished(Outcome),
}

/// A single play-through over a fixed list of questions
#[derive(Debug)]
pub struct QuizSession<T: Ticker> {
    questions: Vec<Question>,
    time_limit: u32,
    ticker: T,
    phase: Phase,
    current_index: usize,
    score: usize,
    time_remaining: u32,
    last_feedback: Option<AnswerFeedback>,
}

impl<T: Ticker> QuizSession<T> {
    /// Create a session over `questions` with a countdown of `time_limit` ticks
    pub fn new(questions: Vec<Question>, time_limit: u32, ticker: T) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::InvalidArgument(
                "A quiz needs at least one question".to_string(),
            ));
        }
        if time_limit == 0 {
            return Err(QuizError::InvalidArgument(
                "Time limit must be at least one tick".to_string(),
            ));
        }
        for question in &questions {
            question.validate()?;
        }

        Ok(Self {
            questions,
            time_limit,
            ticker,
            phase: Phase::Idle,
            current_index: 0,
            score: 0,
            time_remaining: time_limit,
            last_feedback: None,
        })
    }

    /// Create a session with the default time limit
    pub fn with_default_limit(questions: Vec<Question>, ticker: T) -> Result<Self> {
        Self::new(questions, DEFAULT_TIME_LIMIT, ticker)
    }

    /// Reset to question 0 and start the countdown
    pub fn start(&mut self) -> SessionEvent {
        self.ticker.cancel();
        self.current_index = 0;
        self.score = 0;
        self.last_feedback = None;
        debug!(total = self.questions.len(), "quiz started");
        self.enter_question()
    }

    /// Resolve the current question with the player's answer.
    ///
    /// Returns `Ok(None)` when no question is awaiting an answer.
    pub fn submit_answer(&mut self, answer_index: usize) -> Result<Option<AnswerFeedback>> {
        if self.phase != Phase::AwaitingAnswer {
            debug!(answer_index, phase = ?self.phase, "answer ignored");
            return Ok(None);
        }

        let question = &self.questions[self.current_index];
        if answer_index >= question.answers.len() {
            return Err(QuizError::InvalidArgument(format!(
                "Answer index {} is out of range (question has {} answers)",
                answer_index,
                question.answers.len()
            )));
        }

        let is_correct = question.is_correct(answer_index);
        Ok(Some(self.resolve(Some(answer_index), is_correct)))
    }

    /// Count down one tick, resolving the question when time runs out
    pub fn on_timer_tick(&mut self) -> Option<SessionEvent> {
        if self.phase != Phase::AwaitingAnswer {
            return None;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining > 0 {
            return Some(SessionEvent::TimeTick {
                remaining: self.time_remaining,
            });
        }

        debug!(question = self.current_index, "countdown expired");
        Some(SessionEvent::AnswerResolved(self.resolve(None, false)))
    }

    /// Move past the resolved question
    pub fn advance(&mut self) -> Option<SessionEvent> {
        if self.phase != Phase::Locked {
            return None;
        }

        self.current_index += 1;
        if self.current_index < self.questions.len() {
            return Some(self.enter_question());
        }

        self.phase = Phase::Finished;
        let outcome = Outcome::new(self.score, self.questions.len());
        debug!(score = outcome.score, total = outcome.total, tier = outcome.tier.label(), "quiz finished");
        Some(SessionEvent::Finished(outcome))
    }

    /// Play again from a finished session
    pub fn restart(&mut self) -> Option<SessionEvent> {
        if self.phase != Phase::Finished {
            return None;
        }
        Some(self.start())
    }

    fn enter_question(&mut self) -> SessionEvent {
        self.phase = Phase::AwaitingAnswer;
        self.time_remaining = self.time_limit;
        self.ticker.cancel();
        self.ticker.arm(TICK_PERIOD);
        debug!(question = self.current_index, time_limit = self.time_limit, "question shown");
        SessionEvent::QuestionShown {
            index: self.current_index,
            total: self.questions.len(),
        }
    }

    fn resolve(&mut self, selected: Option<usize>, is_correct: bool) -> AnswerFeedback {
        self.ticker.cancel();
        if is_correct {
            self.score += 1;
        }
        self.phase = Phase::Locked;

        let question = &self.questions[self.current_index];
        let feedback = AnswerFeedback {
            question_index: self.current_index,
            // Validated at construction
            correct_index: question.correct_index().unwrap_or_default(),
            selected,
            is_correct,
        };
        debug!(?selected, is_correct, score = self.score, "question resolved");
        self.last_feedback = Some(feedback.clone());
        feedback
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Question on screen, if any
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::AwaitingAnswer | Phase::Locked => self.questions.get(self.current_index),
            Phase::Idle | Phase::Finished => None,
        }
    }

    /// Feedback for the question currently locked
    pub fn last_feedback(&self) -> Option<&AnswerFeedback> {
        match self.phase {
            Phase::Locked => self.last_feedback.as_ref(),
            _ => None,
        }
    }

    /// Final result once the session is finished
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished => Some(Outcome::new(self.score, self.questions.len())),
            _ => None,
        }
    }

    /// Fraction of questions completed (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        match self.phase {
            Phase::Finished => 1.0,
            _ => self.current_index as f64 / self.questions.len() as f64,
        }
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    /// Mutable access for drivers that pump the tick source
    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::Answer;
    use crate::quiz::ticker::ManualTicker;

    fn france() -> Question {
        Question::new(
            "capital of France",
            vec![
                Answer::wrong("London"),
                Answer::wrong("Berlin"),
                Answer::right("Paris"),
                Answer::wrong("Madrid"),
            ],
        )
    }

    fn session(time_limit: u32) -> QuizSession<ManualTicker> {
        QuizSession::new(vec![france(), france()], time_limit, ManualTicker::new()).unwrap()
    }

    #[test]
    fn test_new_session_is_idle() {
        let s = session(3);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.score(), 0);
        assert!(s.current_question().is_none());
        assert!(!s.ticker().is_armed());
    }

    #[test]
    fn test_rejects_empty_and_invalid_questions() {
        assert!(QuizSession::new(vec![], 10, ManualTicker::new()).is_err());
        assert!(QuizSession::new(vec![france()], 0, ManualTicker::new()).is_err());

        let mut broken = france();
        broken.answers[0].correct = true;
        let err = QuizSession::new(vec![broken], 10, ManualTicker::new()).unwrap_err();
        assert!(matches!(err, QuizError::InvalidArgument(_)));
    }

    #[test]
    fn test_start_arms_timer() {
        let mut s = session(3);
        let event = s.start();
        assert_eq!(event, SessionEvent::QuestionShown { index: 0, total: 2 });
        assert_eq!(s.phase(), Phase::AwaitingAnswer);
        assert_eq!(s.time_remaining(), 3);
        assert!(s.ticker().is_armed());
        assert_eq!(s.ticker().period(), Some(TICK_PERIOD));
    }

    #[test]
    fn test_correct_answer_scores_and_locks() {
        let mut s = session(3);
        s.start();
        let feedback = s.submit_answer(2).unwrap().unwrap();
        assert!(feedback.is_correct);
        assert_eq!(feedback.selected, Some(2));
        assert_eq!(feedback.correct_index, 2);
        assert_eq!(s.score(), 1);
        assert_eq!(s.phase(), Phase::Locked);
        assert!(!s.ticker().is_armed());
        assert_eq!(s.last_feedback(), Some(&feedback));
    }

    #[test]
    fn test_wrong_answer_highlights() {
        let mut s = session(3);
        s.start();
        let feedback = s.submit_answer(0).unwrap().unwrap();
        assert!(!feedback.is_correct);
        assert_eq!(s.score(), 0);
        assert_eq!(feedback.highlight(0), AnswerHighlight::Incorrect);
        assert_eq!(feedback.highlight(2), AnswerHighlight::Correct);
        assert_eq!(feedback.highlight(1), AnswerHighlight::Neutral);
    }

    #[test]
    fn test_submit_while_locked_is_ignored() {
        let mut s = session(3);
        s.start();
        s.submit_answer(2).unwrap();
        assert_eq!(s.submit_answer(2).unwrap(), None);
        assert_eq!(s.submit_answer(99).unwrap(), None);
        assert_eq!(s.score(), 1);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn test_submit_before_start_is_ignored() {
        let mut s = session(3);
        assert_eq!(s.submit_answer(2).unwrap(), None);
        assert_eq!(s.on_timer_tick(), None);
        assert_eq!(s.advance(), None);
        assert_eq!(s.restart(), None);
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn test_out_of_range_answer_is_invalid_argument() {
        let mut s = session(3);
        s.start();
        let err = s.submit_answer(4).unwrap_err();
        assert!(matches!(err, QuizError::InvalidArgument(_)));
        assert_eq!(s.phase(), Phase::AwaitingAnswer);
        assert!(s.ticker().is_armed());
    }

    #[test]
    fn test_countdown_expiry() {
        let mut s = session(3);
        s.start();
        assert_eq!(s.on_timer_tick(), Some(SessionEvent::TimeTick { remaining: 2 }));
        assert_eq!(s.on_timer_tick(), Some(SessionEvent::TimeTick { remaining: 1 }));

        match s.on_timer_tick() {
            Some(SessionEvent::AnswerResolved(feedback)) => {
                assert!(feedback.timed_out());
                assert!(!feedback.is_correct);
                assert_eq!(feedback.highlight(0), AnswerHighlight::Neutral);
                assert_eq!(feedback.highlight(2), AnswerHighlight::Correct);
            }
            other => panic!("expected resolution, got {:?}", other),
        }
        assert_eq!(s.phase(), Phase::Locked);
        assert_eq!(s.time_remaining(), 0);
        assert!(!s.ticker().is_armed());
        assert_eq!(s.on_timer_tick(), None);
    }

    #[test]
    fn test_advance_resets_countdown() {
        let mut s = session(3);
        s.start();
        s.on_timer_tick();
        s.submit_answer(1).unwrap();

        assert_eq!(s.advance(), Some(SessionEvent::QuestionShown { index: 1, total: 2 }));
        assert_eq!(s.time_remaining(), 3);
        assert!(s.ticker().is_armed());
        assert_eq!(s.progress(), 0.5);
        assert_eq!(s.advance(), None);
    }

    #[test]
    fn test_finish_and_restart() {
        let mut s = session(3);
        s.start();
        s.submit_answer(2).unwrap();
        s.advance();
        s.submit_answer(2).unwrap();

        let outcome = match s.advance() {
            Some(SessionEvent::Finished(outcome)) => outcome,
            other => panic!("expected finish, got {:?}", other),
        };
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.tier, ScoreTier::Perfect);
        assert_eq!(outcome.percentage(), 100.0);
        assert_eq!(s.progress(), 1.0);
        assert_eq!(s.outcome(), Some(outcome));
        assert!(s.current_question().is_none());

        assert_eq!(s.restart(), Some(SessionEvent::QuestionShown { index: 0, total: 2 }));
        assert_eq!(s.score(), 0);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.phase(), Phase::AwaitingAnswer);
        assert!(s.outcome().is_none());
    }

    #[test]
    fn test_start_mid_question_keeps_single_timer() {
        let mut s = session(3);
        s.start();
        s.start();
        s.start();
        assert_eq!(s.ticker().active(), 1);
        assert_eq!(s.ticker().peak_active(), 1);
    }
}
