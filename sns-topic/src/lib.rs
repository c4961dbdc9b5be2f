pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod tests;

// Re-export commonly used item
pub use core::topic::Topic;
pub use error::{TopicError, TopicResult};
