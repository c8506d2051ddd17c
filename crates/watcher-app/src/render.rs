//! Plain-text rendering of conversation pieces for the terminal.

use watcher_ai::{Message, Role};

pub const HELP: &str = "\
Commands:
  <text>          ask the Watcher
  <number>        ask one of the suggested questions
  /image <path>   attach an image to the next question
  /drop           remove the attached image
  /history        show the whole conversation
  /help           show this help
  /quit           leave (Ctrl-D works too)";

pub fn message(msg: &Message) -> String {
    let speaker = match msg.role() {
        Role::User => "You",
        Role::Model => "Watcher",
    };
    let mut out = format!("{speaker}:");
    if msg.image().is_some() {
        out.push_str(" [image]");
    }
    if !msg.text().is_empty() {
        out.push('\n');
        out.push_str(msg.text());
    }
    out
}

/// Numbered list of starter questions, or `None` when there are none.
pub fn suggestions(queries: &[String]) -> Option<String> {
    if queries.is_empty() {
        return None;
    }
    let mut out = String::from("Try asking:");
    for (i, query) in queries.iter().enumerate() {
        out.push_str(&format!("\n  {}. {query}", i + 1));
    }
    Some(out)
}

pub fn status(text: &str) -> String {
    format!("  ... {text}")
}
