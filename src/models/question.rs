use serde::{Deserialize, Serialize};

/// A single quiz question as served by the question endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question", alias = "text")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correctOption", alias = "correct_option")]
    pub correct_option: usize,
    pub points: u32,
}

impl Question {
    pub fn new(text: impl Into<String>, options: Vec<String>, correct_option: usize, points: u32) -> Self {
        Self {
            text: text.into(),
            options,
            correct_option,
            points,
        }
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_option
    }

    /// Checks that the record can be played: it has options and the correct
    /// option points at one of them.
    pub fn validate(&self) -> Result<(), String> {
        if self.options.is_empty() {
            return Err("question has no options".to_string());
        }

        if self.correct_option >= self.options.len() {
            return Err(format!(
                "correctOption {} is out of range for {} options",
                self.correct_option,
                self.options.len()
            ));
        }

        Ok(())
    }
}
