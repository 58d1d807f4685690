use crate::binding::Counter;
use crate::logging::{self, LogConfig, LogTarget};
use crate::{cli, clipboard, tui, utils};
use anyhow::{Context, Result};
use std::io::{self, Read, Write};

// Counts `text` the way the composer does, returning the label it would show.
fn label_for(text: &str) -> Result<String> {
    let counter = Counter::bind(Some(text), Some(String::new()))?;
    Ok(counter.into_parts().1)
}

// Strips one trailing line ending, as left by `echo` or a final Enter.
fn trim_final_newline(text: &str) -> &str {
    text.strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(text)
}

// Headless mode: writes the label for the message (or each of its lines) to `out`.
fn run_headless_mode<R: Read, W: Write>(
    message: Option<&str>,
    per_line: bool,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let text = match message {
        Some(message) => message.to_string(),
        None => {
            let mut buf = String::new();
            input
                .read_to_string(&mut buf)
                .context("Failed to read message from stdin")?;
            buf
        }
    };

    if per_line {
        for (line_no, line) in text.lines().enumerate() {
            let label = label_for(line)?;
            tracing::debug!(line_no, length = utils::text_length(line), "counted line");
            writeln!(out, "{label}")?;
        }
    } else {
        let text = trim_final_newline(&text);
        let label = label_for(text)?;
        tracing::debug!(length = utils::text_length(text), "counted message");
        writeln!(out, "{label}")?;
    }
    out.flush()?;
    Ok(())
}

// Interactive mode: runs the composer and hands over the confirmed message.
fn run_interactive_mode(cli_args: &cli::Cli) -> Result<()> {
    let initial_message = cli_args.message.clone().unwrap_or_default();
    let Some(message) = tui::run_composer(initial_message)? else {
        eprintln!("Message discarded. Exiting.");
        return Ok(());
    };

    if message.is_empty() {
        eprintln!("Message is empty, nothing to output.");
        return Ok(());
    }

    let label = label_for(&message)?;
    if cli_args.copy {
        clipboard::copy_text_to_clipboard(message)?;
        println!("✅ Copied message to the clipboard ({label}).");
    } else {
        println!("{message}");
        eprintln!("({label})");
    }
    Ok(())
}

// Main orchestrator for the smsyank application logic.
pub fn run_smsyank(cli_args: cli::Cli) -> Result<()> {
    let fallback = if cli_args.headless {
        LogTarget::Stderr
    } else {
        LogTarget::Discard
    };
    logging::init_logging(
        &LogConfig::from_verbosity(cli_args.verbose)
            .with_log_file(cli_args.log_file.clone())
            .with_fallback(fallback),
    )?;

    let result = if cli_args.headless {
        run_headless_mode(
            cli_args.message.as_deref(),
            cli_args.per_line,
            io::stdin().lock(),
            io::stdout().lock(),
        )
    } else {
        run_interactive_mode(&cli_args)
    };

    if let Err(e) = &result {
        tracing::error!("{e:#}");
    }
    result
}
