pub mod error;
pub mod sqs;

pub use error::QueueError;
