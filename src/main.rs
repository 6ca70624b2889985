use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader, BufWriter};
use tracing::info;

use zuban::{LanguageDetector, Settings, TextInputHandler};

#[derive(Parser, Debug)]
#[command(name = "zuban")]
#[command(about = "English/Urdu language detection for the TTS voice agent")]
#[command(version)]
struct Args {
    /// Settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Detect the language of text given as arguments, a file, or stdin
    Detect {
        /// Text to analyze (joined with spaces)
        text: Vec<String>,

        /// Read text from a UTF-8 file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Skip whitespace normalization and character cleanup
        #[arg(long)]
        raw: bool,
    },
    /// Report whether text is a genuine mix of English and Urdu
    Mixed {
        text: Vec<String>,

        /// Band width around 50%; defaults to the configured value
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// List supported language codes
    Languages,
    /// Detect every line of a JSON-lines file, one JSON result per output line
    Batch {
        path: PathBuf,
    },
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let settings = match path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings.with_env_overrides()
}

fn init_logging(settings: &Settings) {
    // WHY: stdout carries results, so logs go to stderr
    let builder = tracing_subscriber::fmt()
        .with_max_level(settings.tracing_level())
        .with_target(false)
        .with_writer(std::io::stderr);

    if settings.log_json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

async fn read_input(text: Vec<String>, file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }
    if !text.is_empty() {
        return Ok(text.join(" "));
    }
    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .context("Failed to read stdin")?;
    Ok(buffer)
}

async fn run_batch(detector: &LanguageDetector, path: &Path) -> Result<()> {
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open batch file: {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();
    let mut writer = BufWriter::new(tokio::io::stdout());

    let mut processed = 0usize;
    let mut failed = 0usize;
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        // Lines that are not JSON are taken as plain text
        let value: Value = serde_json::from_str(&line).unwrap_or_else(|_| Value::String(line.clone()));
        let result = detector.detect_value(&value);
        if !result.success {
            failed += 1;
        }
        processed += 1;

        let formatted = serde_json::to_string(&result)?;
        writer.write_all(formatted.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await?;

    info!(processed, failed, "Batch detection completed");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(args.config.as_deref())?;
    init_logging(&settings);

    info!(app = %settings.app_name, version = %settings.app_version, "Starting zuban");
    info!(?args, "Parsed CLI arguments");

    let detector = LanguageDetector::from_settings(&settings);

    match args.command {
        Command::Detect { text, file, raw } => {
            let input = read_input(text, file.as_deref()).await?;
            let text = if raw {
                input
            } else {
                let processed = TextInputHandler::from_settings(&settings).process(&input);
                match processed.error {
                    Some(error) => anyhow::bail!("Invalid input: {error}"),
                    None => processed.text,
                }
            };
            let result = detector.detect(&text);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Mixed { text, threshold } => {
            let input = read_input(text, None).await?;
            let mixed = match threshold {
                Some(threshold) => zuban::is_mixed_language(&input, threshold),
                None => detector.is_mixed(&input),
            };
            println!("{mixed}");
        }
        Command::Languages => {
            for language in detector.supported_languages() {
                println!("{language}");
            }
        }
        Command::Batch { path } => {
            run_batch(&detector, &path).await?;
        }
    }

    Ok(())
}
