use std::path::PathBuf;

use clap::Parser;

/// Watcher: a Kingdom Death: Monster rules assistant in the terminal.
#[derive(Parser, Debug)]
#[command(name = "watcher", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `watcher=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model id override.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Ask a single question, print the answer, and exit.
    #[arg(short = 'a', long)]
    pub ask: Option<String>,

    /// Image to attach to the first question.
    #[arg(short = 'i', long)]
    pub image: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
