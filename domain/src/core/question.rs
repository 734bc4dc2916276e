//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question to be routed through the specialist roles (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Question cannot be empty");
        Self { content }
    }

    /// Try to create a new question, rejecting blank input
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question cannot be empty".to_string(),
            ));
        }
        Ok(Self { content })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lower-cased content, the form every keyword table is matched against.
    pub fn normalized(&self) -> String {
        self.content.to_lowercase()
    }

    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Question::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_from_str() {
        let q: Question = "Jaká třída betonu pro základy?".into();
        assert_eq!(q.content(), "Jaká třída betonu pro základy?");
    }

    #[test]
    #[should_panic]
    fn test_empty_question_panics() {
        Question::new("");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(matches!(
            Question::try_new(""),
            Err(DomainError::InvalidQuestion(_))
        ));
        assert!(Question::try_new("   ").is_err());
        assert!(Question::try_new("Slab thickness?").is_ok());
    }

    #[test]
    fn test_word_count_ignores_repeated_whitespace() {
        let q = Question::new("  check   the\tslab  ");
        assert_eq!(q.word_count(), 3);
    }

    #[test]
    fn test_normalized_lowercases_unicode() {
        let q = Question::new("ČSN EN 206");
        assert_eq!(q.normalized(), "čsn en 206");
    }
}
