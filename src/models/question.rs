use std::fmt;

use serde::{Deserialize, Serialize};

/// Difficulty label attached to every question by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Wire name, as used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "BEGINNER",
            Difficulty::Intermediate => "INTERMEDIATE",
            Difficulty::Advanced => "ADVANCED",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    pub difficulty_level: Difficulty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_payload_shape() {
        let json = r#"{
            "id": 7,
            "questionText": "x = [1, 2]",
            "answer": "Creates a list",
            "codeSnippet": "x = [1, 2]",
            "difficultyLevel": "INTERMEDIATE"
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.id, 7);
        assert_eq!(question.code_snippet.as_deref(), Some("x = [1, 2]"));
        assert_eq!(question.difficulty_level, Difficulty::Intermediate);
    }

    #[test]
    fn test_code_snippet_is_optional() {
        let json = r#"{"id":1,"questionText":"q","answer":"a","difficultyLevel":"BEGINNER"}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert!(question.code_snippet.is_none());
    }
}
