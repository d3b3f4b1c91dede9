#![forbid(unsafe_code)]

pub mod attempt_service;
pub mod content;
pub mod error;
pub mod identity;
pub mod proctor;
pub mod timer;

pub use quiz_core::Clock;

pub use attempt_service::AttemptService;
pub use content::{ContentConfig, HttpTestContent, TestContentProvider, TestSummary};
pub use error::{AttemptError, ContentError};
pub use identity::{Identity, StaticIdentity};
pub use proctor::{ExclusiveModeGuard, NoopGuard};
pub use timer::CountdownTimer;
