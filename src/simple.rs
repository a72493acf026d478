use std::io::Write;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::quiz::{AnswerFeedback, IntervalTicker, Outcome, QuizSession, SessionEvent};
use crate::{Result, FEEDBACK_DELAY, FINISH_DELAY};

enum Input {
    Line(Option<String>),
    Tick,
}

/// Parse a typed answer: `1`-`n` or the matching letter.
pub fn parse_answer(input: &str, answer_count: usize) -> Option<usize> {
    let input = input.trim();
    let index = if let Ok(n) = input.parse::<usize>() {
        n.checked_sub(1)?
    } else {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                (c.to_ascii_lowercase() as usize).checked_sub('a' as usize)?
            }
            _ => return None,
        }
    };
    (index < answer_count).then_some(index)
}

fn countdown_bar(time_limit: u32) -> ProgressBar {
    let bar = ProgressBar::new(u64::from(time_limit));
    let style = ProgressStyle::with_template("{bar:30.green/red} {pos}s left")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar.set_position(u64::from(time_limit));
    bar
}

fn print_question<W: Write>(
    out: &mut W,
    session: &QuizSession<IntervalTicker>,
    index: usize,
    total: usize,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Question {} of {}  (score: {})", index + 1, total, session.score())?;
    if let Some(question) = session.current_question() {
        writeln!(out, "{}", question.prompt)?;
        for (i, answer) in question.answers.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, answer.text)?;
        }
    }
    write!(out, "Your answer: ")?;
    out.flush()?;
    Ok(())
}

fn print_feedback<W: Write>(
    out: &mut W,
    session: &QuizSession<IntervalTicker>,
    feedback: &AnswerFeedback,
) -> Result<()> {
    let correct_text = session
        .current_question()
        .and_then(|q| q.answers.get(feedback.correct_index))
        .map(|a| a.text.as_str())
        .unwrap_or_default();

    if feedback.timed_out() {
        writeln!(out)?;
        writeln!(out, "Time's up! The answer was: {}", correct_text)?;
    } else if feedback.is_correct {
        writeln!(out, "Correct!")?;
    } else {
        writeln!(out, "Wrong. The answer was: {}", correct_text)?;
    }
    Ok(())
}

fn print_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "You scored {} out of {}", outcome.score, outcome.total)?;
    writeln!(out, "{}", outcome.tier.message())?;
    out.flush()?;
    Ok(())
}

/// Play one session over `input`, writing the transcript to `out`.
///
/// Returns once the session is finished. Closing the input does not end the
/// game early; remaining questions run out on the clock.
pub async fn play<R, W>(
    session: &mut QuizSession<IntervalTicker>,
    input: R,
    out: &mut W,
    show_countdown: bool,
) -> Result<Outcome>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut input_open = true;
    let mut bar: Option<ProgressBar> = None;
    let mut next = Some(session.start());

    loop {
        if let Some(event) = next.take() {
            match event {
                SessionEvent::QuestionShown { index, total } => {
                    print_question(out, session, index, total)?;
                    if show_countdown {
                        bar = Some(countdown_bar(session.time_limit()));
                    }
                }
                SessionEvent::TimeTick { remaining } => {
                    if let Some(bar) = &bar {
                        bar.set_position(u64::from(remaining));
                    }
                }
                SessionEvent::AnswerResolved(feedback) => {
                    if let Some(bar) = bar.take() {
                        bar.finish_and_clear();
                    }
                    print_feedback(out, session, &feedback)?;
                    // Drain input while locked so it never lands on the next question
                    let delay = tokio::time::sleep(FEEDBACK_DELAY);
                    tokio::pin!(delay);
                    loop {
                        tokio::select! {
                            _ = &mut delay => break,
                            line = lines.next_line(), if input_open => match line? {
                                Some(text) => debug!(input = %text.trim(), "input ignored during feedback"),
                                None => {
                                    debug!("input closed");
                                    input_open = false;
                                }
                            },
                        }
                    }
                    next = session.advance();
                    continue;
                }
                SessionEvent::Finished(outcome) => {
                    tokio::time::sleep(FINISH_DELAY).await;
                    print_outcome(out, &outcome)?;
                    info!(score = outcome.score, total = outcome.total, "line-mode quiz finished");
                    return Ok(outcome);
                }
            }
        }

        let input = tokio::select! {
            line = lines.next_line(), if input_open => Input::Line(line?),
            _ = session.ticker_mut().tick() => Input::Tick,
        };

        match input {
            Input::Tick => next = session.on_timer_tick(),
            Input::Line(None) => {
                debug!("input closed");
                input_open = false;
            }
            Input::Line(Some(text)) => {
                let count = session.current_question().map_or(0, |q| q.answers.len());
                match parse_answer(&text, count) {
                    Some(index) => {
                        next = session
                            .submit_answer(index)?
                            .map(SessionEvent::AnswerResolved);
                    }
                    None => {
                        write!(out, "Please enter a number between 1 and {}: ", count)?;
                        out.flush()?;
                    }
                }
            }
        }
    }
}

/// Run the quiz on stdin/stdout
pub async fn run(session: &mut QuizSession<IntervalTicker>) -> Result<Outcome> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    play(session, stdin, &mut stdout, true).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{default_questions, ScoreTier};

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("1", 4), Some(0));
        assert_eq!(parse_answer(" 4 \n", 4), Some(3));
        assert_eq!(parse_answer("c", 4), Some(2));
        assert_eq!(parse_answer("B", 4), Some(1));
        assert_eq!(parse_answer("0", 4), None);
        assert_eq!(parse_answer("5", 4), None);
        assert_eq!(parse_answer("e", 4), None);
        assert_eq!(parse_answer("paris", 4), None);
        assert_eq!(parse_answer("", 4), None);
    }

    /// Input that delivers each line at its offset (ms from start), then closes
    fn scripted(steps: &[(u64, &'static str)]) -> tokio::io::BufReader<tokio::io::DuplexStream> {
        use tokio::io::AsyncWriteExt;

        let (reader, mut writer) = tokio::io::duplex(256);
        let steps = steps.to_vec();
        tokio::spawn(async move {
            let start = tokio::time::Instant::now();
            for (at, line) in steps {
                tokio::time::sleep_until(start + std::time::Duration::from_millis(at)).await;
                writer.write_all(line.as_bytes()).await.unwrap();
            }
        });
        tokio::io::BufReader::new(reader)
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_mixes_answers_and_timeouts() {
        let mut session = QuizSession::new(default_questions(), 3, IntervalTicker::new()).unwrap();
        // Q1 answered at 100ms, Q2 shown at 1100ms
        let input = scripted(&[(100, "3\n"), (1300, "nope\n"), (1500, "2\n")]);
        let mut out = Vec::new();

        let outcome = play(&mut session, input, &mut out, false).await.unwrap();

        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.total, 5);
        assert_eq!(outcome.tier, ScoreTier::TryAgain);

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Question 1 of 5"));
        assert!(transcript.contains("Correct!"));
        assert!(transcript.contains("Please enter a number between 1 and 4"));
        assert!(transcript.contains("Time's up! The answer was: Pacific Ocean"));
        assert!(transcript.contains("You scored 2 out of 5"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_during_feedback_is_ignored() {
        let mut session = QuizSession::new(default_questions(), 3, IntervalTicker::new()).unwrap();
        // "2" arrives while Q1 feedback is still on screen
        let input = scripted(&[(100, "3\n"), (600, "2\n")]);
        let mut out = Vec::new();

        let outcome = play(&mut session, input, &mut out, false).await.unwrap();

        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.tier, ScoreTier::KeepStudying);
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Time's up! The answer was: Mars"));
        assert!(transcript.contains("You scored 1 out of 5"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_wrong_answer_reveals_key() {
        let mut session = QuizSession::new(default_questions(), 2, IntervalTicker::new()).unwrap();
        let input: &[u8] = b"1\n";
        let mut out = Vec::new();

        let outcome = play(&mut session, input, &mut out, false).await.unwrap();

        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.tier, ScoreTier::KeepStudying);
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Wrong. The answer was: Paris"));
    }
}
