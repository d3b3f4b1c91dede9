mod access;
mod attempt;
mod collection;
mod home;
mod instruction;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use attempt::AttemptView;
pub use collection::CollectionView;
pub use home::HomeView;
pub use instruction::InstructionView;
pub use new_test::NewTestView;
pub use state::{ViewError, ViewState, view_state_from_resource};
