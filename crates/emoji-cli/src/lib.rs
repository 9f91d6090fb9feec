//! Library components of the emoji data generator CLI.

pub mod logging;
pub mod pipeline;
pub mod types;
