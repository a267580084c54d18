//! Domain models and request shapes
//!
//! Request bodies are validated into these types before any handler
//! touches storage. Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod category;
pub mod question;
pub mod requests;
pub mod pagination;

pub use validation::ValidationError;
pub use category::Category;
pub use question::{NewQuestion, Question};
pub use requests::{QuestionsRequest, QuizRequest};
pub use pagination::{Page, QUESTIONS_PER_PAGE};
