//! test data shared between the kern crates.

pub mod kern;
