pub mod deck;
pub mod engine;
pub mod stats;

pub use deck::{build_library, build_library_ordered};
pub use engine::{run_trial, TrialConfig, TrialResult};
pub use stats::{LandConfigResults, SweepResults};
