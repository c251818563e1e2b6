//! Speech output

use std::io::Write;
use std::sync::Mutex;

use crate::{Error, Result};

/// Destination for spoken responses
pub trait SpeechSink: Send + Sync {
    /// Speak (or display) a response
    ///
    /// # Errors
    ///
    /// Returns error if the output cannot be written
    fn speak(&self, text: &str) -> Result<()>;
}

/// Writes responses to stdout, prefixed with the assistant's name
#[derive(Debug, Clone)]
pub struct ConsoleSpeech {
    speaker: String,
}

impl ConsoleSpeech {
    /// Create a console sink for the named assistant
    #[must_use]
    pub fn new(speaker: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
        }
    }
}

impl SpeechSink for ConsoleSpeech {
    fn speak(&self, text: &str) -> Result<()> {
        tracing::debug!(text, "speaking");
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}: {text}", self.speaker)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Collects responses in memory
#[derive(Debug, Default)]
pub struct RecordingSpeech {
    spoken: Mutex<Vec<String>>,
}

impl RecordingSpeech {
    /// Everything spoken so far
    #[must_use]
    pub fn spoken(&self) -> Vec<String> {
        self.spoken
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }
}

impl SpeechSink for RecordingSpeech {
    fn speak(&self, text: &str) -> Result<()> {
        self.spoken
            .lock()
            .map_err(|e| Error::Speech(e.to_string()))?
            .push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_speech() {
        let sink = RecordingSpeech::default();
        sink.speak("one").unwrap();
        sink.speak("two").unwrap();
        assert_eq!(sink.spoken(), vec!["one", "two"]);
    }
}
