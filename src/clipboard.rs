//! Clipboard capability
//!
//! Sharing writes the link through a `ClipboardProvider`. The system provider
//! pipes the text into the first clipboard utility found on PATH.

use eyre::{Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

use crate::config::{ClipboardCommand, ClipboardConfig};

pub trait ClipboardProvider {
    fn write_text(&self, text: &str) -> Result<()>;
}

impl<T: ClipboardProvider + ?Sized> ClipboardProvider for Box<T> {
    fn write_text(&self, text: &str) -> Result<()> {
        (**self).write_text(text)
    }
}

/// Clipboard backed by external utilities (xclip, xsel, wl-copy, pbcopy)
pub struct SystemClipboard {
    commands: Vec<ClipboardCommand>,
}

impl SystemClipboard {
    pub fn new(commands: Vec<ClipboardCommand>) -> Self {
        Self { commands }
    }

    pub fn from_config(config: &ClipboardConfig) -> Self {
        Self::new(config.commands.clone())
    }

    /// First configured utility present on PATH
    pub fn available(&self) -> Option<&ClipboardCommand> {
        self.commands.iter().find(|c| which::which(&c.program).is_ok())
    }
}

impl ClipboardProvider for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let Some(cmd) = self.available() else {
            let tried: Vec<&str> = self.commands.iter().map(|c| c.program.as_str()).collect();
            eyre::bail!("No clipboard utility found (tried {})", tried.join(", "));
        };

        let mut child = Command::new(&cmd.program)
            .args(&cmd.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .context("Failed to spawn clipboard command")?;

        // Dropping stdin closes the pipe; the child is always reaped
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let waited = child.wait();

        written.context("Failed to write to clipboard")?;
        let status = waited.context("Clipboard command failed")?;
        if !status.success() {
            eyre::bail!("{} exited with {}", cmd.program, status);
        }

        log::info!("Copied {} bytes to clipboard via {}", text.len(), cmd.program);
        Ok(())
    }
}

/// Clipboard that always refuses, for when copying is switched off
pub struct DisabledClipboard;

impl ClipboardProvider for DisabledClipboard {
    fn write_text(&self, _text: &str) -> Result<()> {
        eyre::bail!("Clipboard disabled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_utilities_fail() {
        let clipboard = SystemClipboard::new(vec![ClipboardCommand {
            program: "rpgme-no-such-clipboard-tool".to_string(),
            args: vec![],
        }]);
        assert!(clipboard.available().is_none());
        let err = clipboard.write_text("hello").unwrap_err();
        assert!(err.to_string().contains("rpgme-no-such-clipboard-tool"));
    }

    #[test]
    fn test_disabled_clipboard_fails() {
        assert!(DisabledClipboard.write_text("hello").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_pipes_into_first_available_command() {
        let clipboard = SystemClipboard::new(vec![
            ClipboardCommand {
                program: "rpgme-no-such-clipboard-tool".to_string(),
                args: vec![],
            },
            ClipboardCommand {
                program: "cat".to_string(),
                args: vec![],
            },
        ]);
        assert_eq!(clipboard.available().map(|c| c.program.as_str()), Some("cat"));
        assert!(clipboard.write_text("https://example.com/?seed=0100000000").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_failure_is_reported() {
        // `true` exits without reading, so a large write hits a closed pipe
        let clipboard = SystemClipboard::new(vec![ClipboardCommand {
            program: "true".to_string(),
            args: vec![],
        }]);
        let text = "x".repeat(4 * 1024 * 1024);
        let err = clipboard.write_text(&text).unwrap_err();
        assert!(err.to_string().contains("Failed to write to clipboard"));
    }
}
