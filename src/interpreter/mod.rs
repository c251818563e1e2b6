//! Command interpretation engine
//!
//! A pure pipeline: transcript → [`Classifier`] → [`Intent`] → [`Responder`] →
//! [`Reply`]. The caller supplies every piece of state through [`Context`] and
//! performs the returned [`SideEffect`]s itself. Identical input always yields an
//! identical reply.

pub mod arithmetic;
pub mod classifier;
mod context;
mod effects;
mod intent;
pub mod numbers;
pub mod responder;

pub use arithmetic::{CalcError, Calculation, Operation};
pub use classifier::{BUILTIN_RULES, Classifier, Rule, classify};
pub use context::Context;
pub use effects::{OpenOutcome, OpenPurpose, Reply, SideEffect};
pub use intent::{Intent, Site};
pub use numbers::extract_numbers;
pub use responder::Responder;

/// Classified intent plus the reply built for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub intent: Intent,
    pub reply: Reply,
}

/// Classifier and responder wired together
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    classifier: Classifier,
    responder: Responder,
}

impl Interpreter {
    /// Create an interpreter from its parts
    #[must_use]
    pub const fn new(classifier: Classifier, responder: Responder) -> Self {
        Self {
            classifier,
            responder,
        }
    }

    /// The responder in use
    #[must_use]
    pub const fn responder(&self) -> &Responder {
        &self.responder
    }

    /// Classify a transcript
    #[must_use]
    pub fn classify(&self, transcript: &str) -> Intent {
        self.classifier.classify(transcript)
    }

    /// Classify a transcript and build the reply
    #[must_use]
    pub fn interpret(&self, transcript: &str, ctx: &Context<'_>) -> Interpretation {
        let intent = self.classifier.classify(transcript);
        let reply = self.responder.respond(&intent, transcript, ctx);

        tracing::debug!(
            intent = intent.label(),
            effects = reply.effects.len(),
            "interpreted transcript"
        );

        Interpretation { intent, reply }
    }
}
