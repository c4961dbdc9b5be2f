use aws_sdk_sns::error::SdkError;
use aws_sdk_sns::operation::create_topic::CreateTopicError;
use aws_sdk_sns::operation::list_subscriptions_by_topic::ListSubscriptionsByTopicError;
use aws_sdk_sns::operation::publish::PublishError;
use aws_sdk_sns::operation::subscribe::SubscribeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Failed to create topic: {0}")]
    CreateTopic(#[from] SdkError<CreateTopicError>),

    #[error("Failed to publish message: {0}")]
    Publish(#[from] SdkError<PublishError>),

    #[error("Failed to subscribe endpoint: {0}")]
    Subscribe(#[from] SdkError<SubscribeError>),

    #[error("Failed to list subscriptions: {0}")]
    ListSubscriptions(#[from] SdkError<ListSubscriptionsByTopicError>),

    #[error("Topic ARN missing from create topic response for topic: {0}")]
    MissingTopicArn(String),
}
