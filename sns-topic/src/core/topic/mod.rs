pub mod pagination;

use std::future::Future;
use std::sync::Arc;

use futures::{Stream, TryStreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::ConfigProvider;
use crate::core::client::notification::NotificationClient;
use crate::error::{TopicError, TopicResult};
use crate::types::params::{TopicSettings, ARN};
use crate::types::subscription::{Subscription, SQS_PROTOCOL};

/// Topic owns the identity of one SNS topic and the client used to reach it.
pub struct Topic {
    client: Arc<dyn NotificationClient>,
    settings: TopicSettings,
}

impl Topic {
    /// Builds a topic manager and makes sure the topic exists.
    ///
    /// Identity fields missing from `settings` are filled from the configuration
    /// provider, which also supplies the notification client. Creating a topic
    /// is idempotent on the provider side, so this returns the ARN of an
    /// existing topic with the same name.
    ///
    /// # Errors
    /// Returns an error if the client can't be built or the topic can't be
    /// provisioned. No manager exists in that case; callers are expected to
    /// treat it as fatal.
    pub async fn new(config: &dyn ConfigProvider, mut settings: TopicSettings) -> TopicResult<Self> {
        settings.pad_from(&config.app_id());

        let client = config.notification_client().await?;
        settings.arn = Self::create_topic(client.as_ref(), &settings).await?;

        Ok(Self::with_interfaces(client, settings))
    }

    /// Builds a topic manager around an existing client and fully populated
    /// settings. Nothing is provisioned.
    pub fn with_interfaces(client: Arc<dyn NotificationClient>, settings: TopicSettings) -> Self {
        Self { client, settings }
    }

    /// create_topic - ensure the topic named after `settings` exists and return its ARN
    pub async fn create_topic(client: &dyn NotificationClient, settings: &TopicSettings) -> TopicResult<String> {
        let topic_name = settings.topic_name();
        if !TopicSettings::is_valid_topic_name(&topic_name) {
            return Err(TopicError::InvalidTopicName(topic_name));
        }

        let arn = match client.create_topic(topic_name.clone()).await {
            Ok(arn) => arn,
            Err(e) => {
                error!(topic_name = %topic_name, error = %e, "could not create sns topic");
                return Err(TopicError::Provisioning { topic_name, source: e });
            }
        };

        ARN::parse_for_service(&arn, "sns").map_err(|reason| TopicError::InvalidTopicArn { arn: arn.clone(), reason })?;

        info!(topic_name = %topic_name, topic_arn = %arn, "sns topic is ready");
        Ok(arn)
    }

    pub fn arn(&self) -> &str {
        &self.settings.arn
    }

    pub fn settings(&self) -> &TopicSettings {
        &self.settings
    }

    /// Forwards a message to the topic. Failures are logged and returned.
    pub async fn publish(&self, cancel: &CancellationToken, message: Option<String>) -> TopicResult<()> {
        let publish = async move {
            self.client.publish(self.settings.arn.clone(), message).await.map_err(|e| {
                error!(topic_arn = %self.settings.arn, error = %e, "could not publish message to topic");
                TopicError::Transport(e)
            })
        };

        cancellable(cancel, publish).await
    }

    /// Subscribes an SQS queue to the topic unless a subscription with exactly
    /// this endpoint already exists.
    pub async fn subscribe_sqs(&self, cancel: &CancellationToken, queue_arn: &str) -> TopicResult<()> {
        let topic_arn = self.arn();

        let exists = match self.subscription_exists(cancel, queue_arn).await {
            Ok(exists) => exists,
            Err(TopicError::Transport(source)) => {
                error!(
                    topic_arn = %topic_arn,
                    queue_arn = %queue_arn,
                    error = %source,
                    "can not check if subscription already exists"
                );
                return Err(TopicError::Subscription { endpoint: queue_arn.to_string(), source });
            }
            Err(e) => return Err(e),
        };

        if exists {
            info!(topic_arn = %topic_arn, queue_arn = %queue_arn, "already subscribed to sns topic");
            return Ok(());
        }

        let subscribe = async move {
            self.client
                .subscribe(topic_arn.to_string(), queue_arn.to_string(), SQS_PROTOCOL.to_string())
                .await
                .map_err(|source| {
                    error!(
                        topic_arn = %topic_arn,
                        queue_arn = %queue_arn,
                        error = %source,
                        "could not subscribe for sqs queue"
                    );
                    TopicError::Subscription { endpoint: queue_arn.to_string(), source }
                })
        };
        cancellable(cancel, subscribe).await?;

        info!(topic_arn = %topic_arn, queue_arn = %queue_arn, "successfully subscribed to sns topic");
        Ok(())
    }

    /// Every subscription of the topic, in the order the provider returns them.
    /// A failure on any page discards what was collected so far.
    pub async fn list_subscriptions(&self, cancel: &CancellationToken) -> TopicResult<Vec<Subscription>> {
        cancellable(cancel, self.subscription_pages().try_concat()).await
    }

    /// The subscription listing as a lazy stream of pages.
    pub fn subscription_pages(&self) -> impl Stream<Item = TopicResult<Vec<Subscription>>> + Send + 'static {
        pagination::subscription_pages(Arc::clone(&self.client), self.settings.arn.clone()).map_err(TopicError::from)
    }

    async fn subscription_exists(&self, cancel: &CancellationToken, queue_arn: &str) -> TopicResult<bool> {
        let subscriptions = self.list_subscriptions(cancel).await?;
        Ok(subscriptions.iter().any(|subscription| subscription.has_endpoint(queue_arn)))
    }
}

/// Runs `operation` unless `cancel` fires first. An already cancelled token
/// wins without polling the operation.
async fn cancellable<T>(cancel: &CancellationToken, operation: impl Future<Output = TopicResult<T>>) -> TopicResult<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(TopicError::Cancelled),
        result = operation => result,
    }
}
