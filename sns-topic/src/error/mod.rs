use thiserror::Error;

use crate::core::client::notification::NotificationError;
use crate::core::client::queue::QueueError;

/// Result type for topic operations
pub type TopicResult<T> = Result<T, TopicError>;

/// Error types for the topic manager
#[derive(Error, Debug)]
pub enum TopicError {
    /// Ensuring the topic exists failed while constructing the manager
    #[error("Failed to provision topic {topic_name}: {source}")]
    Provisioning {
        topic_name: String,
        #[source]
        source: NotificationError,
    },

    #[error(
        "Invalid topic name: {0}. Topic names must be made up of letters, numbers, hyphens, and underscores, optionally followed by .fifo."
    )]
    InvalidTopicName(String),

    #[error("Provider returned an invalid topic ARN {arn}: {reason}")]
    InvalidTopicArn { arn: String, reason: String },

    /// A provider call failed after construction
    #[error("Transport error: {0}")]
    Transport(#[from] NotificationError),

    /// A provider call failed while ensuring an SQS subscription
    #[error("Subscription error for endpoint {endpoint}: {source}")]
    Subscription {
        endpoint: String,
        #[source]
        source: NotificationError,
    },

    #[error("Operation cancelled")]
    Cancelled,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),
}
