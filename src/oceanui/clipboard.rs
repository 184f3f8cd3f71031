//! Best-effort system clipboard access through the platform's own tools:
//! pbcopy on macOS, xclip/xsel on Linux, clip on Windows. Copying is a
//! convenience, so failure is reported as a boolean and callers carry on.

use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard. Returns false when no clipboard
/// tool is available or the copy failed; never errors.
pub fn copy_to_clipboard(text: &str) -> bool {
    candidates()
        .into_iter()
        .any(|(program, args)| pipe_to(program, args, text))
}

#[cfg(target_os = "macos")]
fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
    vec![("pbcopy", &[])]
}

#[cfg(target_os = "linux")]
fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
    vec![
        ("xclip", &["-selection", "clipboard"]),
        ("xsel", &["--clipboard", "--input"]),
    ]
}

#[cfg(target_os = "windows")]
fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
    vec![("clip", &[])]
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
    Vec::new()
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> bool {
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let mut child = match child {
        Ok(child) => child,
        Err(_) => return false,
    };

    if let Some(mut stdin) = child.stdin.take() {
        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }
    }

    child.wait().map(|status| status.success()).unwrap_or(false)
}
