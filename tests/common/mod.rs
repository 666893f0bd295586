#![allow(dead_code)]

mod assertions;
mod fixtures;
mod helpers;
mod test_app;

// Re-export
pub use assertions::{assert_field_matches_speed, assert_phases_wrapped, assert_state_valid};

pub use helpers::*;

pub use fixtures::*;
pub use test_app::TestSimBuilder;
