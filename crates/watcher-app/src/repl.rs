//! Interactive loop and one-shot question handling.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use watcher_ai::{ImageData, Session, SessionError, TurnOutcome};
use watcher_common::WatcherError;

use crate::render;

/// How often the status line is sampled while a turn is pending.
const STATUS_POLL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Ask(String),
    Pick(usize),
    Image(PathBuf),
    DropImage,
    History,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    if let Ok(n) = line.parse::<usize>() {
        return Command::Pick(n);
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Ask(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    match name {
        "image" if !arg.is_empty() => Command::Image(PathBuf::from(arg)),
        "drop" => Command::DropImage,
        "history" => Command::History,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Submit the draft and wait for the outcome, reporting each new status
/// phrase to `on_status` while the turn is pending.
///
/// Returns `None` if the session was busy or the turn task died.
pub async fn drive_turn(
    session: &Arc<Session>,
    mut on_status: impl FnMut(&str),
) -> Option<TurnOutcome> {
    let mut turn = {
        let session = Arc::clone(session);
        tokio::spawn(async move { session.submit_draft().await })
    };

    let mut poll = tokio::time::interval(STATUS_POLL);
    let mut shown: Option<String> = None;
    let result = loop {
        tokio::select! {
            result = &mut turn => break result,
            _ = poll.tick() => {
                let current = session.status_text();
                if current.is_some() && current != shown {
                    if let Some(text) = &current {
                        on_status(text);
                    }
                    shown = current;
                }
            }
        }
    };

    match result {
        Ok(Ok(outcome)) => Some(outcome),
        Ok(Err(SessionError::Busy)) => {
            eprintln!("Still waiting on the previous answer.");
            None
        }
        Err(e) => {
            error!("turn task failed: {e}");
            None
        }
    }
}

/// Send the draft, print status changes and then the reply.
async fn turn(session: &Arc<Session>) -> Option<TurnOutcome> {
    let outcome = drive_turn(session, |text| println!("{}", render::status(text))).await;
    if matches!(outcome, Some(TurnOutcome::Answered | TurnOutcome::Failed(_))) {
        if let Some(reply) = session.last_message() {
            println!("{}\n", render::message(&reply));
        }
    }
    outcome
}

/// Ask a single question and print the answer.
pub async fn ask_once(
    session: &Arc<Session>,
    question: String,
    image: Option<ImageData>,
) -> Option<TurnOutcome> {
    session.set_draft_text(question);
    if let Some(image) = image {
        session.attach_image(image);
    }
    turn(session).await
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn print_suggestions(session: &Session) {
    if let Some(text) = render::suggestions(session.suggestions()) {
        println!("{text}\n");
    }
}

pub async fn run(session: Arc<Session>, image: Option<ImageData>) -> Result<(), WatcherError> {
    for msg in session.conversation() {
        println!("{}\n", render::message(&msg));
    }
    print_suggestions(&session);
    if let Some(image) = image {
        session.attach_image(image);
        println!("Image attached to your first question.");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt();
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match parse_command(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => println!("{}", render::HELP),
            Command::History => {
                for msg in session.conversation() {
                    println!("{}\n", render::message(&msg));
                }
            }
            Command::Image(path) => match ImageData::from_path(&path) {
                Ok(image) => {
                    session.attach_image(image);
                    println!("Attached {}.", path.display());
                }
                Err(e) => eprintln!("Cannot attach {}: {e}", path.display()),
            },
            Command::DropImage => {
                session.clear_image();
                println!("Image removed.");
            }
            Command::Pick(n) => {
                let picked = n
                    .checked_sub(1)
                    .and_then(|i| session.suggestions().get(i).cloned());
                // Outside the list a number is just a question.
                session.set_draft_text(picked.unwrap_or_else(|| n.to_string()));
                turn(&session).await;
            }
            Command::Ask(text) => {
                session.set_draft_text(text);
                turn(&session).await;
            }
            Command::Unknown(cmd) => eprintln!("Unknown command {cmd}. Type /help."),
        }
    }

    info!(
        session = %session.id().short(),
        messages = session.message_count(),
        "leaving"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use watcher_ai::{Content, FailureKind, GatewayError, ModelClient, SessionOptions};

    struct SlowClient {
        delay: Duration,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl ModelClient for SlowClient {
        async fn generate(&self, _contents: &[Content]) -> Result<String, GatewayError> {
            tokio::time::sleep(self.delay).await;
            if self.fail {
                Err(GatewayError::Network("timed out".into()))
            } else {
                Ok("Draw three cards.".into())
            }
        }
    }

    fn session(delay_ms: u64, fail: bool) -> Arc<Session> {
        let client = Arc::new(SlowClient {
            delay: Duration::from_millis(delay_ms),
            fail,
        });
        let options = SessionOptions {
            loading_messages: vec!["a".into(), "b".into()],
            status_interval: Duration::from_millis(1_000),
            ..SessionOptions::default()
        };
        Arc::new(Session::with_options(client, options))
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("  "), Command::Empty);
        assert_eq!(parse_command("2"), Command::Pick(2));
        assert_eq!(
            parse_command("How does Collision work?"),
            Command::Ask("How does Collision work?".into())
        );
        assert_eq!(
            parse_command("/image ./pages/hunt board.png"),
            Command::Image(PathBuf::from("./pages/hunt board.png"))
        );
        assert_eq!(parse_command("/drop"), Command::DropImage);
        assert_eq!(parse_command("/history"), Command::History);
        assert_eq!(parse_command("/help"), Command::Help);
        assert_eq!(parse_command("/quit"), Command::Quit);
        assert_eq!(parse_command("/image"), Command::Unknown("/image".into()));
        assert_eq!(parse_command("/roll"), Command::Unknown("/roll".into()));
    }

    #[tokio::test(start_paused = true)]
    async fn drive_turn_reports_each_phrase_once() {
        let session = session(2_500, false);
        session.set_draft_text("How do I setup the Hunt Board?");

        let mut seen = Vec::new();
        let outcome = drive_turn(&session, |s| seen.push(s.to_string())).await;

        assert_eq!(outcome, Some(TurnOutcome::Answered));
        assert_eq!(seen, vec!["a", "b", "a"]);
        assert_eq!(session.last_message().unwrap().text(), "Draw three cards.");
    }

    #[tokio::test(start_paused = true)]
    async fn drive_turn_returns_failures() {
        let session = session(10, true);
        session.set_draft_text("Explain Intimacy");

        let outcome = drive_turn(&session, |_| {}).await;
        assert_eq!(outcome, Some(TurnOutcome::Failed(FailureKind::Gateway)));
    }

    #[tokio::test]
    async fn ask_once_sends_question_and_image() {
        let session = session(0, false);
        let image = ImageData::from_bytes("image/png", b"page");

        let outcome = ask_once(&session, "What is this?".into(), Some(image)).await;
        assert_eq!(outcome, Some(TurnOutcome::Answered));

        let conversation = session.conversation();
        assert_eq!(conversation[1].text(), "What is this?");
        assert!(conversation[1].image().is_some());
    }
}
