//! Quiz core module
//!
//! Contains the question model, the compiled-in question bank, the
//! countdown ticker abstraction and the session state machine.

pub mod bank;
pub mod question;
pub mod session;
pub mod ticker;
pub mod tier;

// Re-export commonly used types
pub use bank::default_questions;
pub use question::{Answer, Question};
pub use session::{AnswerFeedback, AnswerHighlight, Outcome, Phase, QuizSession, SessionEvent};
pub use ticker::{ClockTicker, IntervalTicker, ManualTicker, Ticker};
pub use tier::ScoreTier;
