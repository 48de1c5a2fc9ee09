// Draft engine: registration, quotas, shuffled pool, turn sequencing.

pub mod engine;
pub mod error;
pub mod pool;
pub mod quota;
pub mod registry;
pub mod snapshot;

pub use engine::{DraftEngine, Phase};
pub use error::DraftError;
pub use snapshot::DraftSnapshot;
