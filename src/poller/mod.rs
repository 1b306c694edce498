mod cycle;
mod state;

#[allow(unused_imports)]
pub use cycle::{CycleOutcome, failure_message, run_cycle};
pub use state::PollState;
