//! Clipboard export.
//!
//! The SVG text is piped to an external helper (`wl-copy`, `xclip -selection
//! clipboard`, `pbcopy`, ...). Without a helper, copying degrades to a
//! status message asking the user to copy manually.

use std::process::Stdio;

use log::{debug, warn};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::DiagramError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clipboard {
    /// Program plus arguments that read the text from stdin.
    Command { program: String, args: Vec<String> },
    Unavailable,
}

impl Clipboard {
    /// Split a command line such as `xclip -selection clipboard`.
    pub fn from_command_line(command_line: Option<&str>) -> Self {
        let mut words = command_line.unwrap_or("").split_whitespace().map(str::to_string);
        match words.next() {
            Some(program) => Clipboard::Command { program, args: words.collect() },
            None => Clipboard::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Clipboard::Command { .. })
    }

    /// Hand `text` to the helper and wait for it to exit.
    pub async fn write_text(&self, text: String) -> Result<(), DiagramError> {
        let Clipboard::Command { program, args } = self else {
            return Err(DiagramError::Clipboard("no clipboard command configured".to_string()));
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| {
                warn!("[Clipboard] Cannot start '{}': {}", program, err);
                DiagramError::Clipboard(format!("cannot start '{}': {}", program, err))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            let written = match stdin.write_all(text.as_bytes()).await {
                Ok(()) => stdin.shutdown().await,
                Err(err) => Err(err),
            };
            if let Err(err) = written {
                let _ = child.kill().await;
                return Err(DiagramError::Clipboard(format!("cannot write to '{}': {}", program, err)));
            }
        }

        let status = child
            .wait()
            .await
            .map_err(|err| DiagramError::Clipboard(format!("'{}' did not finish: {}", program, err)))?;
        if !status.success() {
            return Err(DiagramError::Clipboard(format!("'{}' exited with {}", program, status)));
        }
        debug!("[Clipboard] Copied {} bytes with '{}'", text.len(), program);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_is_split() {
        assert_eq!(
            Clipboard::from_command_line(Some("xclip -selection clipboard")),
            Clipboard::Command {
                program: "xclip".into(),
                args: vec!["-selection".into(), "clipboard".into()],
            }
        );
        assert_eq!(Clipboard::from_command_line(Some("   ")), Clipboard::Unavailable);
        assert_eq!(Clipboard::from_command_line(None), Clipboard::Unavailable);
    }

    #[tokio::test]
    async fn unavailable_clipboard_fails_softly() {
        let err = Clipboard::Unavailable.write_text("<svg/>".into()).await.unwrap_err();
        assert_eq!(err.code(), "CLIPBOARD");
    }

    #[tokio::test]
    async fn missing_program_is_reported() {
        let clipboard = Clipboard::from_command_line(Some("definitely-not-a-clipboard-tool-7113"));
        let err = clipboard.write_text("<svg/>".into()).await.unwrap_err();
        assert_eq!(err.code(), "CLIPBOARD");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn helper_receives_text() {
        let clipboard = Clipboard::from_command_line(Some("cat"));
        assert!(clipboard.write_text("<svg/>".into()).await.is_ok());

        let failing = Clipboard::from_command_line(Some("false"));
        assert_eq!(failing.write_text("<svg/>".into()).await.unwrap_err().code(), "CLIPBOARD");
    }
}
