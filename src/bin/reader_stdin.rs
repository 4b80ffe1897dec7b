//! CLI that reads HTML from stdin and prints the reader view.
//!
//! `--format json` (default) prints a summary of the activation, `html` prints
//! the page with the reader view mounted, `text` prints what a speech engine
//! would read.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use accessible_reader::{dom, isolate_document, markers, speech, AccessibilitySettings, Options};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Html,
    Text,
}

#[derive(Parser)]
#[command(name = "reader_stdin")]
#[command(about = "Isolate the main content of an HTML page read from stdin")]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: Format,

    /// Accessibility settings JSON; marker classes are applied to the page
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Extra CSS selector to hide on the page (repeatable)
    #[arg(long = "hide")]
    hide: Vec<String>,

    /// Extra CSS selector to remove from the isolated copy (repeatable)
    #[arg(long = "remove")]
    remove: Vec<String>,
}

#[derive(Serialize)]
struct Output<'a> {
    strategy: &'a str,
    #[serde(flatten)]
    result: &'a accessible_reader::IsolateResult,
    badge: String,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn run(cli: &Cli) -> accessible_reader::Result<()> {
    let mut html = String::new();
    io::stdin().read_to_string(&mut html)?;

    let settings = match &cli.settings {
        Some(path) => AccessibilitySettings::from_json(&fs::read_to_string(path)?)?,
        None => AccessibilitySettings::default(),
    };

    let options = Options {
        extra_distraction_selectors: cli.hide.clone(),
        extra_removal_selectors: cli.remove.clone(),
        ..Options::default()
    };
    options.validate()?;

    let doc = dom::parse(&html);

    if let Format::Text = cli.format {
        println!("{}", speech::page_text(&doc));
        return Ok(());
    }

    markers::apply_markers(&doc, &settings);
    let result = isolate_document(&doc, &options)?;

    match cli.format {
        Format::Html => println!("{}", result.document_html),
        _ => {
            let output = Output {
                strategy: result.strategy_name(),
                result: &result,
                badge: settings.badge_text(),
            };
            println!("{}", serde_json::to_string(&output)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
