//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::Zeroize;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Lazily opened clipboard handle, kept for the lifetime of a session.
#[derive(Default)]
pub struct Clipboard {
    ctx: Option<ClipboardContext>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `text`, opening the clipboard on first use.
    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.ctx.is_none() {
            let ctx =
                ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }

        if let Some(ctx) = self.ctx.as_mut() {
            ctx.set_contents(text.to_owned())
                .map_err(|e| ClipboardError::Write(e.to_string()))?;

            // Wipe the read-back copy
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
        }
        log::debug!("copied {} chars to clipboard", text.chars().count());
        Ok(())
    }
}

/// One-shot copy for CLI use.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    Clipboard::new().copy(text)
}
