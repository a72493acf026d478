use tickquiz::config::QuizConfig;
use tickquiz::quiz::{default_questions, ManualTicker, QuizSession};
use tickquiz::{error, QuizError};

#[test]
fn test_out_of_range_answer_reports_invalid_argument() {
    let mut session = QuizSession::new(default_questions(), 10, ManualTicker::new()).unwrap();
    session.start();

    let err = session.submit_answer(7).unwrap_err();
    assert!(matches!(err, QuizError::InvalidArgument(_)));
    assert!(err.to_string().contains("out of range"));

    let msg = error::user_friendly_message(&err);
    assert!(msg.contains("Pick one of the listed answers"));
}

#[test]
fn test_user_friendly_config_message() {
    let err = QuizConfig::new().with_time_limit(0).validate().unwrap_err();
    let msg = error::user_friendly_message(&err);
    assert!(msg.starts_with("Configuration error"));
    assert!(msg.contains("Check your settings"));
}

#[test]
fn test_io_error_conversion_keeps_source() {
    use std::error::Error;

    let err: QuizError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();
    assert!(matches!(err, QuizError::IoError(_)));
    assert!(err.source().is_some());
    assert!(error::user_friendly_message(&err).contains("pipe closed"));
}

#[test]
fn test_tui_error_suggests_simple_mode() {
    let msg = error::user_friendly_message(&QuizError::TuiError("no tty".into()));
    assert!(msg.contains("--simple"));
}
