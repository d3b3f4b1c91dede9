#![forbid(unsafe_code)]

pub mod engine;
pub mod ledger;
pub mod model;
pub mod scorer;
pub mod time;

pub use engine::{AttemptEngine, AttemptEvent, AttemptPhase, Effect};
pub use ledger::AnswerLedger;
pub use scorer::{AttemptResult, QuestionOutcome, score};
pub use time::Clock;
