use std::time::Duration;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use rstest::*;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::config::{AWSCredentials, AwsConfigProvider};
use crate::core::client::SNS;
use crate::types::params::{AppId, TopicSettings};
use crate::Topic;

pub const SNS_TOPIC_TEST_QUEUE: &str = "sns_topic_testing_queue";

#[rstest]
#[tokio::test]
async fn sns_client_is_built_from_provided_config() {
    let aws_config = SdkConfig::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("eu-west-1"))
        .build();

    let sns = SNS::new(&aws_config);
    let cloned = sns.clone();

    assert_eq!(sns.client().config().region(), Some(&Region::new("eu-west-1")));
    assert_eq!(cloned.client().config().region(), sns.client().config().region());
}

/// Runs against a real SNS/SQS endpoint, e.g. LocalStack with
/// `AWS_ENDPOINT_URL=http://localhost:4566`.
#[rstest]
#[tokio::test]
#[ignore = "requires an SNS/SQS endpoint"]
async fn sns_topic_subscribe_and_publish_works() {
    let credentials = AWSCredentials {
        region: Some("us-east-1".to_string()),
        endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
    };
    let aws_config = credentials.get_aws_config().await;
    let run_id = Uuid::new_v4().simple().to_string();
    let provider = AwsConfigProvider::new(AppId::new("snstopic", "test", "e2e", run_id.as_str()), aws_config);

    let topic = Topic::new(&provider, TopicSettings::new(AppId::default(), "orders")).await.unwrap();
    // Provisioning the same topic again resolves to the same ARN
    let again = Topic::new(&provider, TopicSettings::new(AppId::default(), "orders")).await.unwrap();
    assert_eq!(topic.arn(), again.arn());

    let sqs = provider.sqs();
    let queue = sqs.client().create_queue().queue_name(format!("{}_{}", SNS_TOPIC_TEST_QUEUE, run_id)).send().await.unwrap();
    let queue_url = queue.queue_url().unwrap();
    let queue_arn = sqs.get_queue_arn_from_url(queue_url).await.unwrap().to_string();

    let cancel = CancellationToken::new();
    topic.subscribe_sqs(&cancel, &queue_arn).await.unwrap();
    topic.subscribe_sqs(&cancel, &queue_arn).await.unwrap();

    let subscriptions = topic.list_subscriptions(&cancel).await.unwrap();
    assert_eq!(subscriptions.iter().filter(|subscription| subscription.has_endpoint(&queue_arn)).count(), 1);

    let message_to_send = "order created";
    topic.publish(&cancel, Some(message_to_send.to_string())).await.unwrap();

    sleep(Duration::from_secs(2)).await;

    let received = sqs
        .client()
        .receive_message()
        .queue_url(queue_url)
        .max_number_of_messages(1)
        .wait_time_seconds(5)
        .send()
        .await
        .unwrap();
    let messages = received.messages();

    assert_eq!(messages.len(), 1, "published message should reach the subscribed queue");
    assert!(messages[0].body().unwrap_or_default().contains(message_to_send));
}
