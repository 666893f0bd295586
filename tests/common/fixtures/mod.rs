
// Re-export test fixtures
pub use physics::*;
