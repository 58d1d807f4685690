use anyhow::Result;
use arboard::Clipboard;
#[cfg(target_os = "linux")]
use arboard::SetExtLinux;
use std::ffi::OsString;

pub const DAEMON_FLAG: &str = "__smsyank_clipboard_daemon";

#[cfg(target_os = "linux")]
fn run_daemon_mode() -> Result<()> {
    let text = std::io::read_to_string(std::io::stdin())?;

    let mut clipboard = Clipboard::new()?;
    // Blocks until another program takes ownership of the clipboard.
    clipboard.set().wait().text(text)?;
    Ok(())
}

// The daemon is always spawned with the flag as its only argument.
fn is_daemon_invocation(mut args: impl Iterator<Item = OsString>) -> bool {
    args.nth(1).is_some_and(|arg| arg == DAEMON_FLAG)
}

/// Runs the clipboard daemon if this process was spawned as one.
/// Returns Ok(true) if it ran, meaning the caller should exit.
pub fn check_and_run_daemon_if_requested() -> Result<bool> {
    if is_daemon_invocation(std::env::args_os()) {
        #[cfg(target_os = "linux")]
        {
            run_daemon_mode()?;
            return Ok(true);
        }
        #[cfg(not(target_os = "linux"))]
        {
            tracing::warn!("{DAEMON_FLAG} flag used on non-Linux system, ignoring");
            return Ok(true);
        }
    }
    Ok(false)
}

pub fn copy_text_to_clipboard(text: String) -> Result<()> {
    #[cfg(not(target_os = "linux"))]
    {
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
    }

    #[cfg(target_os = "linux")]
    {
        use std::io::Write;
        use std::process::{Command, Stdio};

        // X11/Wayland clipboards die with their owner, so hand the text to a
        // detached copy of ourselves that outlives this process.
        let mut child = Command::new(std::env::current_exe()?)
            .arg(DAEMON_FLAG)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .current_dir("/")
            .spawn()?;
        tracing::debug!(pid = child.id(), "spawned clipboard daemon");

        let Some(mut stdin) = child.stdin.take() else {
            return Err(anyhow::anyhow!("Failed to get stdin for clipboard daemon"));
        };
        stdin.write_all(text.as_bytes())?;
        stdin.flush()?;
    }
    Ok(())
}
