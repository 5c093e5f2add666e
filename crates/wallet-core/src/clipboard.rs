//! Best-effort copy to the system clipboard through the platform's
//! clipboard utility.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

/// Copy `text` to the clipboard. Returns `false` if no clipboard utility
/// accepted it; never panics.
pub fn copy_to_clipboard(text: &str) -> bool {
    copy_with(&candidate_commands(), text)
}

/// Try each command in turn, piping `text` to its stdin.
pub(crate) fn copy_with(commands: &[&[&str]], text: &str) -> bool {
    commands.iter().any(|argv| match pipe_to(argv, text) {
        Ok(()) => true,
        Err(e) => {
            debug!(command = ?argv, error = %e, "clipboard command failed");
            false
        }
    })
}

fn pipe_to(argv: &[&str], text: &str) -> std::io::Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"))?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let written = match child.stdin.take() {
        // Dropping stdin at the end of the arm closes it so the utility sees EOF.
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    // Reap the child even if the write failed.
    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("exited with {status}")))
    }
}

fn candidate_commands() -> Vec<&'static [&'static str]> {
    let mut commands: Vec<&'static [&'static str]> = Vec::new();
    if cfg!(target_os = "macos") {
        commands.push(&["pbcopy"]);
    } else if cfg!(windows) {
        commands.push(&["clip"]);
    } else {
        if is_wsl() {
            commands.push(&["clip.exe"]);
        }
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            commands.push(&["wl-copy"]);
        }
        commands.push(&["xclip", "-selection", "clipboard"]);
        commands.push(&["xsel", "--clipboard", "--input"]);
    }
    commands
}

fn is_wsl() -> bool {
    if std::env::var_os("WSL_DISTRO_NAME").is_some() || std::env::var_os("WSL_INTEROP").is_some() {
        return true;
    }
    std::fs::read_to_string("/proc/sys/kernel/osrelease")
        .map(|release| release.to_lowercase().contains("microsoft"))
        .unwrap_or(false)
}
