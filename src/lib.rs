pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod output;
pub mod readme;
pub mod stats;

pub use error::{LangStatsError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_API_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;
