use std::fmt;
use std::path::{Path, PathBuf};

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::LoadError;
use crate::event::AppEvent;
use crate::models::Question;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:9000/questions";

/// Where the questions come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    /// JSON array served over HTTP.
    Http(String),
    /// JSON array in a local file.
    File(PathBuf),
}

impl Default for QuestionSource {
    fn default() -> Self {
        QuestionSource::Http(DEFAULT_ENDPOINT.to_string())
    }
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSource::Http(url) => f.write_str(url),
            QuestionSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse a JSON array of questions and check that every one is playable.
pub fn parse_questions(json: &[u8]) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_slice(json)?;

    for (index, question) in questions.iter().enumerate() {
        question
            .validate()
            .map_err(|reason| LoadError::InvalidQuestion { index, reason })?;
    }

    Ok(questions)
}

pub async fn fetch_questions(client: &reqwest::Client, url: &str) -> Result<Vec<Question>, LoadError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    parse_questions(&body)
}

pub async fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_questions(&json_content)
}

pub async fn load_questions(source: &QuestionSource) -> Result<Vec<Question>, LoadError> {
    match source {
        QuestionSource::Http(url) => fetch_questions(&reqwest::Client::new(), url).await,
        QuestionSource::File(path) => load_questions_from_json(path).await,
    }
}

/// Load questions in the background and report the outcome on `tx`.
///
/// Exactly one [`AppEvent::Loaded`] is sent. The task cannot be cancelled
/// once spawned.
pub fn spawn_load(source: QuestionSource, tx: UnboundedSender<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(%source, "loading questions");

        let outcome = load_questions(&source).await;
        match &outcome {
            Ok(questions) => info!(count = questions.len(), "questions loaded"),
            Err(e) => warn!(%source, error = %e, "failed to load questions"),
        }

        // The receiver is gone only if the app already quit.
        let _ = tx.send(AppEvent::Loaded(outcome));
    })
}
