//! Question records and validated question input

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{CategoryId, IntOrString, QuestionId, ValidationError};

/// Question as stored and as rendered to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// Raw add-question body; every field optional so absence is reported
/// as a validation error rather than a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<IntOrString>,
    pub category: Option<IntOrString>,
}

/// Validated question ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: i32,
}

impl NewQuestion {
    /// Validate a raw request.
    ///
    /// # Rules
    /// - question and answer non-empty after trimming whitespace
    /// - difficulty and category present and integral
    pub fn new(req: CreateQuestionRequest) -> Result<Self, ValidationError> {
        let question = required_text(req.question, "question")?;
        let answer = required_text(req.answer, "answer")?;

        let difficulty = req
            .difficulty
            .ok_or(ValidationError::Missing { field: "difficulty" })?
            .to_i32("difficulty")?;
        let category = req
            .category
            .ok_or(ValidationError::Missing { field: "category" })?
            .to_i32("category")?;

        Ok(Self {
            question,
            answer,
            category: CategoryId(category),
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// Attach the store-assigned id.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

/// Raw search body
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Trimmed search term
///
/// An empty term is allowed and matches every question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(req: SearchRequest) -> Result<Self, ValidationError> {
        let term = req
            .search_term
            .ok_or(ValidationError::Missing { field: "searchTerm" })?;
        Ok(Self(term.trim().to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test used by in-memory stores.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0.to_lowercase())
    }

    /// `ILIKE` pattern with `%`, `_` and `\` escaped so the term is literal.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}
