use aws_config::SdkConfig;
use aws_sdk_sqs::types::QueueAttributeName;
use aws_sdk_sqs::Client;

use crate::core::client::queue::QueueError;
use crate::types::params::ARN;

/// Queue lookups needed to subscribe an SQS queue to a topic.
#[derive(Clone, Debug)]
pub struct InnerSQS(Client);

impl InnerSQS {
    /// Creates a new instance of InnerSQS with the provided AWS configuration.
    /// # Arguments
    /// * `aws_config` - The AWS configuration.
    ///
    /// # Returns
    /// * `Self` - The new instance of InnerSQS.
    pub fn new(aws_config: &SdkConfig) -> Self {
        let sqs_config_builder = aws_sdk_sqs::config::Builder::from(aws_config);
        let client = Client::from_conf(sqs_config_builder.build());
        Self(client)
    }

    pub fn client(&self) -> &Client {
        &self.0
    }

    /// get_queue_arn_from_url - Get the queue ARN from the queue URL
    /// This function returns the queue ARN based on the queue URL.
    pub async fn get_queue_arn_from_url(&self, queue_url: &str) -> Result<ARN, QueueError> {
        let attributes = self
            .client()
            .get_queue_attributes()
            .queue_url(queue_url)
            .attribute_names(QueueAttributeName::QueueArn)
            .send()
            .await?;

        match attributes.attributes().and_then(|attributes| attributes.get(&QueueAttributeName::QueueArn)) {
            Some(arn) => parse_queue_arn(arn),
            None => Err(QueueError::FailedToGetQueueArn(queue_url.to_string())),
        }
    }
}

/// parse_queue_arn - Validate that the given string is an SQS ARN
pub fn parse_queue_arn(queue_arn: &str) -> Result<ARN, QueueError> {
    ARN::parse_for_service(queue_arn, "sqs").map_err(|reason| QueueError::InvalidArn(format!("{queue_arn}: {reason}")))
}
