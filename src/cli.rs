use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// smsyank – compose a text message with a live SMS segment counter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text to start with. In headless mode, count this instead of stdin.
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Run without the TUI: print the remaining-count label for the input and exit.
    #[arg(long)]
    pub headless: bool,

    /// With --headless, print one label per input line instead of one for the whole input.
    #[arg(long, requires = "headless")]
    pub per_line: bool,

    /// Copy the confirmed message to the clipboard instead of printing it.
    #[arg(long, conflicts_with = "headless")]
    pub copy: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Append logs to this file. Without it the composer discards logs
    /// and headless mode writes them to stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
