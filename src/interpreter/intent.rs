//! Intent and site enumerations

use std::fmt;

use serde::Serialize;

use super::arithmetic::Operation;

/// Websites reachable through an "open ..." command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    YouTube,
    Google,
    GitHub,
    LinkedIn,
    Gmail,
}

impl Site {
    /// Sites in the order their commands are checked
    pub const ALL: [Self; 5] = [
        Self::YouTube,
        Self::Google,
        Self::GitHub,
        Self::LinkedIn,
        Self::Gmail,
    ];

    /// Phrase that selects this site
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Self::YouTube => "open youtube",
            Self::Google => "open google",
            Self::GitHub => "open github",
            Self::LinkedIn => "open linkedin",
            Self::Gmail => "open gmail",
        }
    }

    /// Name used in spoken confirmations
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::YouTube => "YouTube",
            Self::Google => "Google",
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Gmail => "Gmail",
        }
    }

    /// Fixed landing URL
    #[must_use]
    pub const fn url(self) -> &'static str {
        match self {
            Self::YouTube => "https://www.youtube.com/",
            Self::Google => "https://www.google.com/",
            Self::GitHub => "https://github.com/",
            Self::LinkedIn => "https://www.linkedin.com/",
            Self::Gmail => "https://mail.google.com/",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Classified meaning of a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", content = "value", rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    AskName,
    TellMyName,
    AskCreator,
    AskTime,
    AskDate,
    Help,
    AskWeather,
    OpenSite(Site),
    /// Search query with the trigger phrase removed (may be empty)
    Search(String),
    Add,
    Subtract,
    Multiply,
    Divide,
    Joke,
    Unrecognized,
}

impl Intent {
    /// Short stable label, used in logs
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::AskName => "ask_name",
            Self::TellMyName => "tell_my_name",
            Self::AskCreator => "ask_creator",
            Self::AskTime => "ask_time",
            Self::AskDate => "ask_date",
            Self::Help => "help",
            Self::AskWeather => "ask_weather",
            Self::OpenSite(_) => "open_site",
            Self::Search(_) => "search",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Joke => "joke",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Arithmetic operation carried by this intent, if any
    #[must_use]
    pub const fn operation(&self) -> Option<Operation> {
        match self {
            Self::Add => Some(Operation::Add),
            Self::Subtract => Some(Operation::Subtract),
            Self::Multiply => Some(Operation::Multiply),
            Self::Divide => Some(Operation::Divide),
            _ => None,
        }
    }
}
