use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{CustomType, Select, Text};
use meteo_core::{BackgroundChannel, Config, Language, resolver_from_config};
use tracing::debug;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "City weather from Open-Meteo")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively set language, endpoints and timeout.
    Configure,

    /// Show current weather and forecast for a city.
    Show {
        /// City name, e.g. "Paris" or "Saint-Étienne".
        city: String,

        /// Print the summary as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Override the configured display language.
        #[arg(long, value_enum)]
        lang: Option<LangArg>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LangArg {
    Fr,
    En,
}

impl From<LangArg> for Language {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::Fr => Language::Fr,
            LangArg::En => Language::En,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json, lang } => show(&city, json, lang).await,
        }
    }
}

async fn show(city: &str, json: bool, lang: Option<LangArg>) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    if let Some(lang) = lang {
        config.set_language(lang.into());
    }

    let resolver = resolver_from_config(&config)?;
    let background = BackgroundChannel::new();
    let rx = background.subscribe();

    let summary = resolver
        .resolve(city)
        .await
        .with_context(|| format!("Could not get the weather for \"{}\"", city.trim()))?;
    background.publish(&summary);

    if json {
        let out = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{out}");
    } else {
        let bg = rx.borrow().clone();
        debug!(background = %bg, "rendering summary");
        print!("{}", render::summary(&summary, resolver.language(), &bg));
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let languages = Language::all().to_vec();
    let start = languages.iter().position(|l| *l == config.language).unwrap_or(0);
    let language = Select::new("Display language:", languages)
        .with_starting_cursor(start)
        .prompt()
        .context("Language selection aborted")?;
    config.set_language(language);

    config.endpoints.geocoding_url = Text::new("Geocoding endpoint:")
        .with_default(&config.endpoints.geocoding_url)
        .prompt()
        .context("Geocoding endpoint input aborted")?;

    config.endpoints.forecast_url = Text::new("Forecast endpoint:")
        .with_default(&config.endpoints.forecast_url)
        .prompt()
        .context("Forecast endpoint input aborted")?;

    let timeout = CustomType::<u64>::new("Request timeout in seconds (0 = none):")
        .with_default(config.timeout_secs.unwrap_or(0))
        .with_error_message("Please enter a whole number of seconds")
        .prompt()
        .context("Timeout input aborted")?;
    config.timeout_secs = (timeout > 0).then_some(timeout);

    config.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());

    Ok(())
}
