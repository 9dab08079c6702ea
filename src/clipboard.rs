//! Clipboard write capability.
//!
//! The session talks to a [`ClipboardSink`] so the formatting core is testable
//! without a real clipboard. [`SystemClipboard`] shells out to the platform
//! clipboard command and overwrites the clipboard with the whole citation
//! string, once per successful citation.

use crate::error::CitationError;

/// A sink receiving one whole-string clipboard overwrite per citation.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), CitationError>;
}

/// System clipboard backed by the platform's clipboard command.
/// - macOS: pbcopy
/// - Linux: xclip or xsel
/// - Windows: clip.exe
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), CitationError> {
        copy_to_clipboard(text)
    }
}

#[cfg(target_os = "macos")]
fn copy_to_clipboard(text: &str) -> Result<(), CitationError> {
    run_clipboard_command("pbcopy", &[], text)
}

#[cfg(target_os = "linux")]
fn copy_to_clipboard(text: &str) -> Result<(), CitationError> {
    // Try xclip first, then xsel
    match run_clipboard_command("xclip", &["-selection", "clipboard"], text) {
        Ok(()) => Ok(()),
        Err(_) => run_clipboard_command("xsel", &["--clipboard", "--input"], text),
    }
}

#[cfg(target_os = "windows")]
fn copy_to_clipboard(text: &str) -> Result<(), CitationError> {
    run_clipboard_command("clip", &[], text)
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn copy_to_clipboard(_text: &str) -> Result<(), CitationError> {
    Err(CitationError::Clipboard(
        "clipboard not supported on this platform".to_string(),
    ))
}

#[allow(dead_code)] // unused on platforms without a clipboard command
fn run_clipboard_command(
    command: &str,
    args: &[&str],
    text: &str,
) -> Result<(), CitationError> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new(command)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| CitationError::Clipboard(format!("failed to spawn {command}: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| CitationError::Clipboard(format!("failed to write to {command}: {e}")))?;
    }

    let status = child
        .wait()
        .map_err(|e| CitationError::Clipboard(format!("failed to wait for {command}: {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(CitationError::Clipboard(format!(
            "{command} exited with error"
        )))
    }
}
