use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use sofia_voice::assistant::PROCESSING_ERROR;
use sofia_voice::interpreter::{Classifier, Interpreter};
use sofia_voice::weather::fetch_or_placeholder;
use sofia_voice::{
    Assistant, Collaborators, Config, ConsoleSpeech, JokeApiClient, OpenWeatherClient,
    PrintOpener, ProfileRepo, SpeechSink, SystemOpener, UrlOpener, db, setup,
};

/// SOFIA - voice command assistant
#[derive(Parser)]
#[command(name = "sofia", version, about)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print URLs instead of opening them
    #[arg(long, env = "SOFIA_HEADLESS")]
    headless: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Handle a single command and exit
    Ask {
        /// What you would say, e.g. "add 2 and 3"
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Interactive profile setup
    Setup,
    /// Clear the saved profile
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the saved profile
    Profile,
    /// Fetch and show the weather for the saved location
    Weather,
    /// Test speech output
    TestSpeech,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn,sofia_voice=info",
        1 => "info,sofia_voice=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    config.headless |= cli.headless;
    tracing::debug!(?config, "loaded configuration");

    let mut assistant = build_assistant(&config)?;

    let Some(cmd) = cli.command else {
        return interactive(&mut assistant).await;
    };

    match cmd {
        Command::Ask { words } => {
            let raw = words.join(" ");
            if let Some(location) = assistant.profile().map(|p| p.location.clone()) {
                // Prime the cache so a weather question can be answered directly
                let provider = weather_provider(&config)?;
                let snapshot = fetch_or_placeholder(&provider, &location).await;
                tracing::debug!(placeholder = snapshot.placeholder, "weather primed");
                assistant.prime_weather(snapshot);
            }
            let now = chrono::Local::now().naive_local();
            if assistant.hear(&raw, now).await?.is_none() {
                anyhow::bail!("recognition session discarded the command");
            }
        }
        Command::Setup => {
            let profile = setup::prompt_profile(assistant.profile())?;
            assistant.complete_setup(profile).await?;
        }
        Command::Reset { yes } => {
            if yes || setup::confirm_reset()? {
                assistant.reset()?;
            }
        }
        Command::Profile => match assistant.profile() {
            Some(p) => println!("{}", serde_json::to_string_pretty(p)?),
            None => println!("No profile saved. Run `sofia setup`."),
        },
        Command::Weather => {
            let Some(location) = assistant.profile().map(|p| p.location.clone()) else {
                anyhow::bail!("no profile saved; run `sofia setup` first");
            };
            let provider = weather_provider(&config)?;
            let snapshot = fetch_or_placeholder(&provider, &location).await;
            println!("{}", snapshot.summary());
        }
        Command::TestSpeech => {
            assistant.test_speech()?;
        }
    }

    Ok(())
}

/// Read transcripts from stdin until EOF
async fn interactive(assistant: &mut Assistant) -> anyhow::Result<()> {
    if assistant.profile().is_none() {
        println!("No profile found, starting setup.\n");
        let profile = setup::prompt_profile(None)?;
        assistant.complete_setup(profile).await?;
    }

    assistant.start().await?;
    println!("Type a command (Ctrl-D to quit).");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let now = chrono::Local::now().naive_local();
        if let Err(e) = assistant.hear(&line, now).await {
            tracing::error!(error = %e, "error processing voice command");
            assistant.speak_error(PROCESSING_ERROR);
        }
    }

    tracing::info!("input closed, exiting");
    Ok(())
}

fn weather_provider(config: &Config) -> anyhow::Result<OpenWeatherClient> {
    Ok(OpenWeatherClient::new(
        config.weather.api_url.clone(),
        config.weather.api_key.clone(),
        config.weather.units.clone(),
        config.http_timeout,
    )?)
}

fn build_assistant(config: &Config) -> anyhow::Result<Assistant> {
    let pool = db::init(config.db_path())?;

    let opener: Arc<dyn UrlOpener> = if config.headless {
        Arc::new(PrintOpener)
    } else {
        Arc::new(SystemOpener)
    };
    let speech: Arc<dyn SpeechSink> = Arc::new(ConsoleSpeech::new(config.assistant.name.clone()));

    let collaborators = Collaborators {
        weather: Arc::new(weather_provider(config)?),
        jokes: Arc::new(JokeApiClient::new(config.joke_url.clone(), config.http_timeout)?),
        opener,
        speech,
    };

    let interpreter = Interpreter::new(Classifier::default(), config.responder());
    Ok(Assistant::new(interpreter, ProfileRepo::new(pool), collaborators)?)
}
