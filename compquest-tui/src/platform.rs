//! Terminal implementation of the controller's platform capabilities.
//!
//! Scrolling resets the question card's scroll offset. Sharing copies the
//! share text and link to the system clipboard when one is reachable.

use compquest_core::{Platform, ScrollBehavior, ShareError, SharePayload};

#[derive(Debug, Default)]
pub struct TerminalPlatform {
    /// Vertical scroll of the question card, in lines.
    pub scroll_offset: u16,
    pub last_scroll: Option<ScrollBehavior>,
    /// Disables the clipboard entirely (set by `--no-clipboard`).
    pub clipboard_disabled: bool,
}

impl TerminalPlatform {
    pub fn new(clipboard_disabled: bool) -> Self {
        Self {
            clipboard_disabled,
            ..Self::default()
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}

impl Platform for TerminalPlatform {
    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        // No animation in a terminal; both behaviors jump.
        self.scroll_offset = 0;
        self.last_scroll = Some(behavior);
    }

    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError> {
        if self.clipboard_disabled {
            return Err(ShareError::Unavailable);
        }
        let mut clipboard = arboard::Clipboard::new().map_err(|e| {
            tracing::debug!(error = %e, "clipboard unavailable");
            ShareError::Unavailable
        })?;
        let text = format!("{}\n{}\n{}", payload.title, payload.text, payload.url);
        clipboard
            .set_text(text)
            .map_err(|e| ShareError::Failed(e.to_string()))
    }
}
