//! Run configuration.
//!
//! Resolved once from the command line and never changed afterwards.

use std::path::PathBuf;

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "random.png";

/// Number of objects drawn when none is given.
pub const DEFAULT_COUNT: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the PNG is written.
    pub output: PathBuf,

    /// Number of objects to draw.
    pub count: usize,

    /// Seed the sampler from the clock instead of the fixed default.
    pub reseed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            count: DEFAULT_COUNT,
            reseed: false,
        }
    }
}
