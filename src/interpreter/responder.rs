//! Turns an intent into reply text and side-effect requests

use super::arithmetic::{self, Operation};
use super::context::Context;
use super::effects::{OpenOutcome, OpenPurpose, Reply, SideEffect};
use super::intent::{Intent, Site};
use super::numbers::extract_numbers;

/// Default help document
pub const DEFAULT_HELP_URL: &str =
    "https://docs.google.com/document/d/1eKjCMQC7GhpHI_R3s6fpjUzxooZRtVozdKstDiY3oes/view?usp=sharing";

/// Default search URL prefix; the encoded query is appended
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Reply to input no rule matched
pub const UNRECOGNIZED: &str = "Sorry, I didn't understand that command. Try saying \"Hello\", \"What's the time?\", or \"Open Google\".";

/// Reply when no weather snapshot is cached
pub const WEATHER_UNAVAILABLE: &str =
    "Sorry, I cannot fetch the weather data at the moment. Please try again.";

/// Provisional reply while a joke is fetched
pub const JOKE_PENDING: &str = "Let me find a joke for you...";

/// Reply to a search with no query
pub const EMPTY_SEARCH: &str = "Please specify what you want to search for.";

/// Reply when the profile is missing for a name query
pub const NO_PROFILE_NAME: &str = "I don't have your name saved. Please set up your profile.";

/// Help reply for a given open outcome
#[must_use]
pub const fn help_text(outcome: OpenOutcome) -> &'static str {
    match outcome {
        OpenOutcome::Opened => "Opening the help document for you.",
        OpenOutcome::Blocked => "Please allow pop-ups for this site and try again.",
        OpenOutcome::Failed => {
            "Could not open the help document. Please check your browser settings."
        }
    }
}

/// Builds replies from intents
#[derive(Debug, Clone)]
pub struct Responder {
    assistant_name: String,
    creator: String,
    help_url: String,
    search_url: String,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new("SOFIA", "Mohammad Kaif", DEFAULT_HELP_URL, DEFAULT_SEARCH_URL)
    }
}

impl Responder {
    /// Create a responder
    #[must_use]
    pub fn new(
        assistant_name: impl Into<String>,
        creator: impl Into<String>,
        help_url: impl Into<String>,
        search_url: impl Into<String>,
    ) -> Self {
        Self {
            assistant_name: assistant_name.into(),
            creator: creator.into(),
            help_url: help_url.into(),
            search_url: search_url.into(),
        }
    }

    /// Assistant's spoken name
    #[must_use]
    pub fn assistant_name(&self) -> &str {
        &self.assistant_name
    }

    /// Help document URL
    #[must_use]
    pub fn help_url(&self) -> &str {
        &self.help_url
    }

    /// Build the reply for an intent
    ///
    /// `transcript` is only read by arithmetic intents, for their operands.
    #[must_use]
    pub fn respond(&self, intent: &Intent, transcript: &str, ctx: &Context<'_>) -> Reply {
        match intent {
            Intent::Greeting => Reply::text(self.greeting(ctx)),
            Intent::AskName => Reply::text(format!(
                "My name is {}, your intelligent voice assistant.",
                self.assistant_name
            )),
            Intent::TellMyName => Reply::text(
                ctx.user_name()
                    .map_or_else(|| NO_PROFILE_NAME.to_string(), |n| format!("Your name is {n}")),
            ),
            Intent::AskCreator => Reply::text(format!("{} created me.", self.creator)),
            Intent::AskTime => Reply::text(format!(
                "The current time is {}",
                ctx.now.format("%-I:%M:%S %p")
            )),
            Intent::AskDate => Reply::text(format!(
                "Today's date is {}",
                ctx.now.format("%a %b %d %Y")
            )),
            Intent::Help => Reply::text(help_text(ctx.help_open)).with_effect(SideEffect::OpenUrl {
                url: self.help_url.clone(),
                purpose: OpenPurpose::Help,
            }),
            Intent::AskWeather => Self::weather(ctx),
            Intent::OpenSite(site) => Self::open_site(*site),
            Intent::Search(query) => self.search(query),
            Intent::Add => Self::calculate(Operation::Add, transcript),
            Intent::Subtract => Self::calculate(Operation::Subtract, transcript),
            Intent::Multiply => Self::calculate(Operation::Multiply, transcript),
            Intent::Divide => Self::calculate(Operation::Divide, transcript),
            Intent::Joke => Reply::text(JOKE_PENDING).with_effect(SideEffect::FetchJoke),
            Intent::Unrecognized => Reply::text(UNRECOGNIZED),
        }
    }

    fn greeting(&self, ctx: &Context<'_>) -> String {
        match ctx.user_name() {
            Some(name) => format!(
                "Hello {name}! I'm {}, how can I assist you today?",
                self.assistant_name
            ),
            None => format!(
                "Hello! I'm {}, your voice assistant. How can I help you?",
                self.assistant_name
            ),
        }
    }

    fn calculate(operation: Operation, transcript: &str) -> Reply {
        let numbers = extract_numbers(transcript);
        Reply::text(arithmetic::respond(operation, &numbers))
    }

    fn weather(ctx: &Context<'_>) -> Reply {
        if let Some(snapshot) = ctx.weather {
            return Reply::text(snapshot.describe());
        }

        let reply = Reply::text(WEATHER_UNAVAILABLE);
        match ctx.profile.map(|p| p.location.as_str()) {
            Some(location) if !location.is_empty() => reply.with_effect(SideEffect::RefreshWeather {
                location: location.to_string(),
            }),
            _ => reply,
        }
    }

    fn open_site(site: Site) -> Reply {
        Reply::text(format!("Opening {site} for you.")).with_effect(SideEffect::OpenUrl {
            url: site.url().to_string(),
            purpose: OpenPurpose::Site,
        })
    }

    fn search(&self, query: &str) -> Reply {
        let query = query.trim();
        if query.is_empty() {
            return Reply::text(EMPTY_SEARCH);
        }

        Reply::text(format!("Searching for {query}")).with_effect(SideEffect::OpenUrl {
            url: format!("{}{}", self.search_url, urlencoding::encode(query)),
            purpose: OpenPurpose::Search,
        })
    }
}
