//! Ordered keyword rules mapping a transcript to an intent
//!
//! Rules are evaluated top to bottom and the first match wins. Several rules can
//! match the same transcript ("hi, what's my name"), so the order is part of the
//! contract: "date and time" resolves to [`Intent::AskTime`] because the time
//! rule sits above the date rule.

use super::intent::{Intent, Site};

/// Trigger phrase for web searches
pub const SEARCH_PHRASE: &str = "search for";

/// A single classification rule
#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    keywords: &'static [&'static str],
    build: fn(&str) -> Intent,
}

impl Rule {
    /// Create a rule matching when any keyword is a substring of the transcript
    #[must_use]
    pub const fn new(
        name: &'static str,
        keywords: &'static [&'static str],
        build: fn(&str) -> Intent,
    ) -> Self {
        Self {
            name,
            keywords,
            build,
        }
    }

    /// Rule name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Substrings that trigger the rule
    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }

    /// Check whether the transcript triggers this rule
    #[must_use]
    pub fn matches(&self, transcript: &str) -> bool {
        self.keywords.iter().any(|k| transcript.contains(k))
    }

    /// Build the intent for a matching transcript
    #[must_use]
    pub fn build(&self, transcript: &str) -> Intent {
        (self.build)(transcript)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("keywords", &self.keywords)
            .finish_non_exhaustive()
    }
}

/// Built-in rule table in priority order
pub static BUILTIN_RULES: [Rule; 19] = [
    Rule::new("greeting", &["hello", "hi"], |_| Intent::Greeting),
    Rule::new("ask_name", &["your name"], |_| Intent::AskName),
    Rule::new("tell_my_name", &["my name"], |_| Intent::TellMyName),
    Rule::new("ask_creator", &["created you", "who made you"], |_| {
        Intent::AskCreator
    }),
    Rule::new("ask_time", &["time"], |_| Intent::AskTime),
    Rule::new("ask_date", &["date", "today"], |_| Intent::AskDate),
    Rule::new("help", &["help"], |_| Intent::Help),
    Rule::new("ask_weather", &["weather"], |_| Intent::AskWeather),
    Rule::new("open_youtube", &["open youtube"], |_| {
        Intent::OpenSite(Site::YouTube)
    }),
    Rule::new("open_google", &["open google"], |_| {
        Intent::OpenSite(Site::Google)
    }),
    Rule::new("open_github", &["open github"], |_| {
        Intent::OpenSite(Site::GitHub)
    }),
    Rule::new("open_linkedin", &["open linkedin"], |_| {
        Intent::OpenSite(Site::LinkedIn)
    }),
    Rule::new("open_gmail", &["open gmail"], |_| Intent::OpenSite(Site::Gmail)),
    Rule::new("search", &[SEARCH_PHRASE], |t| {
        Intent::Search(search_query(t))
    }),
    Rule::new("add", &["add", "plus"], |_| Intent::Add),
    Rule::new("subtract", &["subtract", "minus"], |_| Intent::Subtract),
    Rule::new("multiply", &["multiply"], |_| Intent::Multiply),
    Rule::new("divide", &["divide"], |_| Intent::Divide),
    Rule::new("joke", &["joke"], |_| Intent::Joke),
];

/// Extract the search query: the transcript with the first trigger phrase
/// removed, trimmed
#[must_use]
pub fn search_query(transcript: &str) -> String {
    transcript.replacen(SEARCH_PHRASE, "", 1).trim().to_string()
}

/// First-match-wins intent classifier
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(BUILTIN_RULES.to_vec())
    }
}

impl Classifier {
    /// Create a classifier over a custom rule list
    #[must_use]
    pub const fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classify a lowercase transcript
    ///
    /// Never fails: unmatched input yields [`Intent::Unrecognized`]
    #[must_use]
    pub fn classify(&self, transcript: &str) -> Intent {
        classify_with(&self.rules, transcript)
    }
}

/// Classify with the built-in rule table
#[must_use]
pub fn classify(transcript: &str) -> Intent {
    classify_with(&BUILTIN_RULES, transcript)
}

fn classify_with(rules: &[Rule], transcript: &str) -> Intent {
    let Some(rule) = rules.iter().find(|r| r.matches(transcript)) else {
        tracing::debug!(transcript, "no rule matched");
        return Intent::Unrecognized;
    };

    let intent = rule.build(transcript);
    tracing::debug!(rule = rule.name(), intent = intent.label(), "classified transcript");
    intent
}
