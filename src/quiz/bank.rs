//! Compiled-in question bank

use super::question::{Answer, Question};

/// The built-in five-question quiz
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is the capital of France?",
            vec![
                Answer::wrong("London"),
                Answer::wrong("Berlin"),
                Answer::right("Paris"),
                Answer::wrong("Madrid"),
            ],
        ),
        Question::new(
            "Which planet is known as the Red Planet?",
            vec![
                Answer::wrong("Venus"),
                Answer::right("Mars"),
                Answer::wrong("Jupiter"),
                Answer::wrong("Saturn"),
            ],
        ),
        Question::new(
            "What is the largest ocean on Earth?",
            vec![
                Answer::wrong("Atlantic Ocean"),
                Answer::wrong("Indian Ocean"),
                Answer::wrong("Arctic Ocean"),
                Answer::right("Pacific Ocean"),
            ],
        ),
        Question::new(
            "Which of these is NOT a programming language?",
            vec![
                Answer::wrong("Java"),
                Answer::wrong("Python"),
                Answer::right("Banana"),
                Answer::wrong("JavaScript"),
            ],
        ),
        Question::new(
            "What is the chemical symbol for gold?",
            vec![
                Answer::wrong("Go"),
                Answer::wrong("Gd"),
                Answer::right("Au"),
                Answer::wrong("Ag"),
            ],
        ),
    ]
}
