//! A directory of all the font tables.

pub mod kern;
