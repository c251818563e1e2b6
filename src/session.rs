//! Recognition session state machine
//!
//! A single session is either idle, listening for one utterance, or failed.
//! Starting while already listening is rejected; stopping cancels the pending
//! utterance without producing a transcript.

use crate::{Error, Result};

/// State of the recognition session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Ready to start
    Idle,
    /// Waiting for a result
    Listening,
    /// The recognizer reported an error
    Failed(String),
}

/// One-utterance-at-a-time recognition session
#[derive(Debug)]
pub struct RecognitionSession {
    state: SessionState,
}

impl Default for RecognitionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RecognitionSession {
    /// Create an idle session
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Check if currently listening
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.state == SessionState::Listening
    }

    /// Begin listening
    ///
    /// # Errors
    ///
    /// Returns [`Error::Recognition`] if already listening
    pub fn start(&mut self) -> Result<()> {
        if self.is_listening() {
            tracing::debug!("start ignored, already listening");
            return Err(Error::Recognition("already listening".to_string()));
        }

        self.state = SessionState::Listening;
        tracing::debug!("recognition started");
        Ok(())
    }

    /// Cancel listening; any later result is discarded
    ///
    /// Returns whether a listening session was cancelled
    pub fn stop(&mut self) -> bool {
        if !self.is_listening() {
            return false;
        }

        self.state = SessionState::Idle;
        tracing::debug!("recognition stopped");
        true
    }

    /// Accept a recognizer result
    ///
    /// Returns the normalized (lowercase, trimmed) transcript if the session was
    /// listening, then returns to idle. Results arriving after a stop are dropped.
    pub fn accept_result(&mut self, raw: &str) -> Option<String> {
        if !self.is_listening() {
            tracing::debug!("result discarded, not listening");
            return None;
        }

        self.state = SessionState::Idle;
        let transcript = normalize_transcript(raw);
        tracing::info!(transcript = %transcript, "user said");
        Some(transcript)
    }

    /// Record a recognizer error
    pub fn fail(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!(reason = %reason, "recognition error");
        self.state = SessionState::Failed(reason);
    }
}

/// Lowercase and trim a raw recognizer transcript
#[must_use]
pub fn normalize_transcript(raw: &str) -> String {
    raw.trim().to_lowercase()
}
