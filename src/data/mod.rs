mod loader;

pub use loader::{
    fetch_questions, load_questions, load_questions_from_json, parse_questions, spawn_load,
    QuestionSource, DEFAULT_ENDPOINT,
};
