mod attempt_vm;

pub use attempt_vm::{AttemptVm, format_clock, performance_message};
