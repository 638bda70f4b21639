//! Domain models with validation at construction
//!
//! Client input is normalized and validated when these types are built.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod id;
pub mod pagination;
pub mod question;
pub mod category;
pub mod quiz;

pub use validation::ValidationError;
pub use id::{CategoryId, IntOrString, QuestionId};
pub use pagination::{PageParams, Paginated, Pagination, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use question::{CreateQuestionRequest, NewQuestion, Question, SearchRequest, SearchTerm};
pub use category::{Category, CategoryMap, CategoryOrder};
pub use quiz::{pick_next, PlayQuizRequest, QuizRound};
