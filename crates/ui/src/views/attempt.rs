mod attempt;
mod guard;
mod scripts;

pub use attempt::AttemptView;
