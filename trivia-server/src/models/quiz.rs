//! Quiz play: request shape and next-question selection

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use super::{CategoryId, IntOrString, Question, QuestionId, ValidationError};

/// Quiz category as sent by the client (`{"id": 2, "type": "Art"}`)
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategoryRequest {
    pub id: IntOrString,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Raw play-quiz body
#[derive(Debug, Clone, Deserialize)]
pub struct PlayQuizRequest {
    pub quiz_category: Option<QuizCategoryRequest>,
    #[serde(default)]
    pub previous_questions: Vec<IntOrString>,
}

/// Normalized quiz round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    /// `None` when every category is in play
    pub category: Option<CategoryId>,
    /// Category name as shown to the player, for logs only
    pub label: Option<String>,
    pub previous: HashSet<QuestionId>,
}

impl QuizRound {
    pub fn new(req: PlayQuizRequest) -> Result<Self, ValidationError> {
        let category = req
            .quiz_category
            .ok_or(ValidationError::Missing { field: "quiz_category" })?;
        let label = category.kind;
        let category = CategoryId(category.id.to_i32("quiz_category.id")?);

        let previous = req
            .previous_questions
            .iter()
            .map(|id| id.to_i32("previous_questions").map(QuestionId))
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(Self {
            category: (!category.is_all()).then_some(category),
            label,
            previous,
        })
    }
}

/// Pick a question from `pool` uniformly at random, skipping `previous`.
///
/// Returns `None` once the pool is exhausted.
pub fn pick_next<R>(
    pool: Vec<Question>,
    previous: &HashSet<QuestionId>,
    rng: &mut R,
) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let candidates: Vec<Question> = pool
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    candidates.choose(rng).cloned()
}
