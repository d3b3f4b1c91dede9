mod ids;
mod option_key;
mod question;
mod test_document;

pub use ids::{QuestionId, TestId, UserId};
pub use option_key::{OptionKey, OptionKeyError};
pub use question::{DifficultyLevel, Question, QuestionError};
pub use test_document::{TestDocument, TestDocumentError};
