//! Environment capabilities the controller calls but never depends on.
//!
//! Scrolling and sharing belong to whatever front end hosts the quiz. The
//! controller receives them as a `Platform` so state transitions can be
//! exercised with no terminal at all.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// Payload handed to the host share capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum ShareError {
    /// The host has no share capability at all.
    #[error("sharing is not available on this platform")]
    Unavailable,

    #[error("share failed: {0}")]
    Failed(String),
}

/// What the front end should do after a share attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// No capability: show this message so the link can be copied by hand.
    Fallback { message: String },
    /// Capability errored. Already logged; nothing to show.
    Failed,
}

pub trait Platform {
    fn scroll_to_top(&mut self, behavior: ScrollBehavior);

    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Platform with nothing to scroll and no way to share.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl Platform for Headless {
    fn scroll_to_top(&mut self, _behavior: ScrollBehavior) {}

    fn share(&mut self, _payload: &SharePayload) -> Result<(), ShareError> {
        Err(ShareError::Unavailable)
    }
}
