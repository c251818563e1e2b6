//! Interpreter integration tests
//!
//! Drives transcripts through classification and response with a fixed clock

use sofia_voice::interpreter::responder::{EMPTY_SEARCH, UNRECOGNIZED, WEATHER_UNAVAILABLE};
use sofia_voice::interpreter::{OpenPurpose, Site};
use sofia_voice::{Context, Intent, Interpreter, SideEffect, classify, extract_numbers};

mod common;

fn ask(transcript: &str) -> sofia_voice::Interpretation {
    Interpreter::default().interpret(transcript, &Context::new(common::now()))
}

#[test]
fn test_greeting_wins_over_every_later_rule() {
    for transcript in [
        "hello what is the time",
        "hi there, open youtube",
        "hi, add 2 and 3",
        "hello tell me a joke",
    ] {
        assert_eq!(classify(transcript), Intent::Greeting, "{transcript}");
    }
}

#[test]
fn test_classification_is_case_sensitive_substring() {
    // Transcripts are normalized before they get here
    assert_eq!(classify("HELLO"), Intent::Unrecognized);
    assert_eq!(classify("othello"), Intent::Greeting);
}

#[test]
fn test_extract_numbers_from_phrase() {
    assert_eq!(extract_numbers("add 12.5 and 3 and 0.25"), vec![12.5, 3.0, 0.25]);
    assert_eq!(extract_numbers("minus -4"), vec![4.0]);
    assert!(extract_numbers("no digits here").is_empty());
}

#[test]
fn test_arithmetic_replies() {
    assert_eq!(ask("add 2 and 3 and 4").reply.text, "2 plus 3 plus 4 equals 9");
    assert_eq!(ask("subtract 10 and 3 and 2").reply.text, "10 minus 3 minus 2 equals 5");
    assert_eq!(ask("multiply 1.5 and 4").reply.text, "1.5 times 4 equals 6");
    assert_eq!(ask("divide 7 by 2").reply.text, "7 divided by 2 equals 3.50");
    assert_eq!(ask("divide 10 by 4 by 5").reply.text, "10 divided by 4 equals 2.50");
}

#[test]
fn test_division_half_cent_rounds_up() {
    assert_eq!(ask("divide 1 by 8").reply.text, "1 divided by 8 equals 0.13");
    assert_eq!(ask("divide 5 by 8").reply.text, "5 divided by 8 equals 0.63");
}

#[test]
fn test_arithmetic_errors_are_spoken() {
    assert_eq!(ask("divide 5 by 0").reply.text, "Cannot divide by zero!");
    assert_eq!(
        ask("multiply 5").reply.text,
        "Please provide at least two numbers to multiply."
    );
    assert_eq!(
        ask("add some numbers").reply.text,
        "Please provide at least two numbers to add."
    );
}

#[test]
fn test_arithmetic_has_no_side_effects() {
    for transcript in ["add 1 and 2", "divide 1 by 0", "subtract 3"] {
        assert!(!ask(transcript).reply.has_effects(), "{transcript}");
    }
}

#[test]
fn test_weather_without_snapshot_requests_refresh() {
    let profile = common::test_profile();
    let ctx = Context::new(common::now()).with_profile(Some(&profile));

    let result = Interpreter::default().interpret("what's the weather like", &ctx);

    assert_eq!(result.intent, Intent::AskWeather);
    assert_eq!(result.reply.text, WEATHER_UNAVAILABLE);
    assert_eq!(
        result.reply.effects,
        vec![SideEffect::RefreshWeather {
            location: "London".to_string()
        }]
    );
}

#[test]
fn test_weather_without_profile_requests_nothing() {
    let result = ask("weather please");
    assert_eq!(result.reply.text, WEATHER_UNAVAILABLE);
    assert!(result.reply.effects.is_empty());
}

#[test]
fn test_weather_with_snapshot_is_described() {
    let snapshot = common::kelvin_snapshot("London");
    let ctx = Context::new(common::now()).with_weather(Some(&snapshot));

    let result = Interpreter::default().interpret("weather", &ctx);

    assert_eq!(
        result.reply.text,
        "Today's weather in London: broken clouds, temperature 16°C, feels like 14°C."
    );
    assert!(result.reply.effects.is_empty());
}

#[test]
fn test_open_github_emits_one_open() {
    let result = ask("open github");

    assert_eq!(result.intent, Intent::OpenSite(Site::GitHub));
    assert_eq!(result.reply.text, "Opening GitHub for you.");
    assert_eq!(
        result.reply.effects,
        vec![SideEffect::OpenUrl {
            url: "https://github.com/".to_string(),
            purpose: OpenPurpose::Site,
        }]
    );
}

#[test]
fn test_search_encodes_query() {
    let result = ask("search for rust & tokio");

    assert_eq!(result.intent, Intent::Search("rust & tokio".to_string()));
    assert_eq!(result.reply.text, "Searching for rust & tokio");
    assert_eq!(
        result.reply.effects,
        vec![SideEffect::OpenUrl {
            url: "https://www.google.com/search?q=rust%20%26%20tokio".to_string(),
            purpose: OpenPurpose::Search,
        }]
    );
}

#[test]
fn test_empty_search_opens_nothing() {
    let result = ask("search for   ");
    assert_eq!(result.reply.text, EMPTY_SEARCH);
    assert!(result.reply.effects.is_empty());
}

#[test]
fn test_time_and_date_use_supplied_clock() {
    assert_eq!(ask("what time is it").reply.text, "The current time is 3:04:05 PM");
    assert_eq!(ask("what's the date").reply.text, "Today's date is Mon Oct 05 2026");
}

#[test]
fn test_date_with_time_answers_time() {
    assert_eq!(ask("date and time").intent, Intent::AskTime);
}

#[test]
fn test_joke_is_deferred() {
    let result = ask("tell me a joke");
    assert_eq!(result.intent, Intent::Joke);
    assert_eq!(result.reply.effects, vec![SideEffect::FetchJoke]);
}

#[test]
fn test_unrecognized() {
    let result = ask("sing me a song");
    assert_eq!(result.intent, Intent::Unrecognized);
    assert_eq!(result.reply.text, UNRECOGNIZED);
    assert!(result.reply.effects.is_empty());
}

#[test]
fn test_interpretation_is_deterministic() {
    let profile = common::test_profile();
    let snapshot = common::kelvin_snapshot("London");
    let ctx = Context::new(common::now())
        .with_profile(Some(&profile))
        .with_weather(Some(&snapshot));
    let interpreter = Interpreter::default();

    for transcript in [
        "hello",
        "what's my name",
        "weather",
        "open linkedin",
        "search for crabs",
        "add 4 and 5",
        "help",
    ] {
        let first = interpreter.interpret(transcript, &ctx);
        let second = interpreter.interpret(transcript, &ctx);
        assert_eq!(first, second, "{transcript}");
    }

    // Context is borrowed and left as it was
    assert_eq!(profile, common::test_profile());
    assert_eq!(snapshot, common::kelvin_snapshot("London"));
}

#[test]
fn test_personalized_replies() {
    let profile = common::test_profile();
    let ctx = Context::new(common::now()).with_profile(Some(&profile));
    let interpreter = Interpreter::default();

    assert_eq!(
        interpreter.interpret("hello", &ctx).reply.text,
        "Hello Ada! I'm SOFIA, how can I assist you today?"
    );
    assert_eq!(
        interpreter.interpret("what's my name", &ctx).reply.text,
        "Your name is Ada"
    );
}
