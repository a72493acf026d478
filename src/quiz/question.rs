//! Question and answer data models

use crate::{QuizError, Result, ANSWERS_PER_QUESTION};

/// One answer option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// Display text
    pub text: String,
    /// Whether this is the correct choice
    pub correct: bool,
}

impl Answer {
    /// Create a wrong answer option
    pub fn wrong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            correct: false,
        }
    }

    /// Create the correct answer option
    pub fn right(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            correct: true,
        }
    }
}

/// A question with its ordered answer options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Prompt shown to the player
    pub prompt: String,
    /// Answer options in display order
    pub answers: Vec<Answer>,
}

impl Question {
    /// Create a new question
    pub fn new(prompt: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            prompt: prompt.into(),
            answers,
        }
    }

    /// Index of the answer flagged as correct, if exactly one is
    pub fn correct_index(&self) -> Option<usize> {
        let mut flagged = self.answers.iter().enumerate().filter(|(_, a)| a.correct);
        match (flagged.next(), flagged.next()) {
            (Some((index, _)), None) => Some(index),
            _ => None,
        }
    }

    /// Check whether the answer at `index` is correct
    pub fn is_correct(&self, index: usize) -> bool {
        self.answers.get(index).is_some_and(|a| a.correct)
    }

    /// Validate the question invariants
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(QuizError::InvalidArgument(
                "Question prompt must not be empty".to_string(),
            ));
        }

        if self.answers.len() != ANSWERS_PER_QUESTION {
            return Err(QuizError::InvalidArgument(format!(
                "Question '{}' has {} answers (expected {})",
                self.prompt,
                self.answers.len(),
                ANSWERS_PER_QUESTION
            )));
        }

        let correct = self.answers.iter().filter(|a| a.correct).count();
        if correct != 1 {
            return Err(QuizError::InvalidArgument(format!(
                "Question '{}' has {} correct answers (expected exactly 1)",
                self.prompt, correct
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital_of_france() -> Question {
        Question::new(
            "What is the capital of France?",
            vec![
                Answer::wrong("London"),
                Answer::wrong("Berlin"),
                Answer::right("Paris"),
                Answer::wrong("Madrid"),
            ],
        )
    }

    #[test]
    fn test_correct_index() {
        let question = capital_of_france();
        assert_eq!(question.correct_index(), Some(2));
        assert!(question.is_correct(2));
        assert!(!question.is_correct(0));
        assert!(!question.is_correct(9));
    }

    #[test]
    fn test_validate_accepts_well_formed_question() {
        assert!(capital_of_france().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_two_correct_answers() {
        let mut question = capital_of_france();
        question.answers[0].correct = true;
        assert!(matches!(question.validate(), Err(QuizError::InvalidArgument(_))));
        assert_eq!(question.correct_index(), None);
    }

    #[test]
    fn test_validate_rejects_no_correct_answer() {
        let mut question = capital_of_france();
        question.answers[2].correct = false;
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_answer_count() {
        let mut question = capital_of_france();
        question.answers.pop();
        let err = question.validate().unwrap_err();
        assert!(err.to_string().contains("3 answers"));
    }

    #[test]
    fn test_validate_rejects_blank_prompt() {
        let mut question = capital_of_france();
        question.prompt = "   ".to_string();
        assert!(question.validate().is_err());
    }
}
