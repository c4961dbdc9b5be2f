use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::Client;

use super::{NotificationClient, NotificationError};
use crate::types::subscription::{Subscription, SubscriptionPage};

/// SNS is a thin [`NotificationClient`] over the AWS SNS SDK client.
#[derive(Clone, Debug)]
pub struct SNS(Client);

impl SNS {
    /// Creates a new instance of SNS with the provided AWS configuration.
    /// # Arguments
    /// * `aws_config` - The AWS configuration.
    ///
    /// # Returns
    /// * `Self` - The new instance of SNS.
    pub fn new(aws_config: &SdkConfig) -> Self {
        Self(Client::new(aws_config))
    }

    pub fn client(&self) -> &Client {
        &self.0
    }
}

#[async_trait]
impl NotificationClient for SNS {
    async fn create_topic(&self, name: String) -> Result<String, NotificationError> {
        let response = self.client().create_topic().name(&name).send().await?;
        response.topic_arn().map(str::to_string).ok_or(NotificationError::MissingTopicArn(name))
    }

    async fn publish(&self, topic_arn: String, message: Option<String>) -> Result<(), NotificationError> {
        self.client().publish().topic_arn(topic_arn).set_message(message).send().await?;
        Ok(())
    }

    async fn subscribe(&self, topic_arn: String, endpoint: String, protocol: String) -> Result<(), NotificationError> {
        self.client().subscribe().topic_arn(topic_arn).endpoint(endpoint).protocol(protocol).send().await?;
        Ok(())
    }

    async fn list_subscriptions_by_topic(
        &self,
        topic_arn: String,
        next_token: Option<String>,
    ) -> Result<SubscriptionPage, NotificationError> {
        let output =
            self.client().list_subscriptions_by_topic().topic_arn(topic_arn).set_next_token(next_token).send().await?;

        Ok(SubscriptionPage {
            subscriptions: output.subscriptions().iter().map(Subscription::from).collect(),
            next_token: output.next_token().map(str::to_string),
        })
    }
}
