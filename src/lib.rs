pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod isrc;
pub mod output;
pub mod report;
pub mod scanner;

pub use error::{IsrcError, Result};
pub use isrc::{Isrc, is_valid};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID_FOUND: i32 = 1;
pub const EXIT_FATAL: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
