pub mod error;
pub mod sns;

use async_trait::async_trait;

use crate::types::subscription::SubscriptionPage;
pub use error::NotificationError;

/// NotificationClient trait
///
/// The subset of the notification service the topic manager relies on.
/// Implemented by [`sns::SNS`] for AWS and mocked in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationClient: Send + Sync {
    /// create_topic creates the topic if it does not exist yet.
    ///
    /// # Arguments
    ///
    /// * `name` - The physical topic name.
    ///
    /// # Returns
    ///
    /// * `Result<String, NotificationError>` - The topic ARN, whether the topic was
    ///   created by this call or already existed.
    async fn create_topic(&self, name: String) -> Result<String, NotificationError>;

    /// publish sends a message to the topic.
    async fn publish(&self, topic_arn: String, message: Option<String>) -> Result<(), NotificationError>;

    /// subscribe binds `endpoint` to the topic using the given delivery protocol.
    async fn subscribe(&self, topic_arn: String, endpoint: String, protocol: String) -> Result<(), NotificationError>;

    /// list_subscriptions_by_topic fetches a single page of subscriptions.
    /// Pass the `next_token` of the previous page to continue a listing.
    async fn list_subscriptions_by_topic(
        &self,
        topic_arn: String,
        next_token: Option<String>,
    ) -> Result<SubscriptionPage, NotificationError>;
}
