use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use quiz_tui::{config, logging, QuestionSource, Quiz};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// URL to fetch the questions from
    #[arg(short, long, conflicts_with = "questions")]
    endpoint: Option<String>,

    /// JSON file to load the questions from instead of the endpoint
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Config file (default: <config dir>/quiz-tui/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file (default: <data dir>/quiz-tui/quiz-tui.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut cfg = config::load_config(args.config.as_deref()).context("Failed to load config")?;
    if let Some(log_file) = args.log_file {
        cfg.logging.file = Some(log_file);
    }
    let _log_guard = logging::init(&cfg.logging).context("Failed to set up logging")?;

    let source = match (args.questions, args.endpoint) {
        (Some(path), _) => QuestionSource::File(path),
        (None, Some(url)) => QuestionSource::Http(url),
        (None, None) => QuestionSource::Http(cfg.endpoint),
    };

    Quiz::new(source).run().await.context("Error running quiz")?;

    Ok(())
}
