use std::sync::Arc;

use assert_matches::assert_matches;
use futures::StreamExt;
use rstest::*;
use tokio_util::sync::CancellationToken;

use crate::core::client::notification::{MockNotificationClient, NotificationError};
use crate::core::topic::pagination::subscription_pages;
use crate::error::TopicError;
use crate::tests::common::*;
use crate::types::subscription::SubscriptionPage;

fn queue_arn(page: usize, position: usize) -> String {
    format!("arn:aws:sqs:us-east-1:000000000000:queue-{}-{}", page, position)
}

fn token_for(page: usize) -> String {
    format!("token-{}", page)
}

/// A client serving `pages` pages of two subscriptions each. Every page but
/// the last one carries a token pointing to the next page.
fn paged_client(pages: usize) -> MockNotificationClient {
    let mut client = MockNotificationClient::new();
    client.expect_list_subscriptions_by_topic().times(pages).returning(move |arn, token| {
        assert_eq!(arn, TEST_TOPIC_ARN);
        let index = match token {
            None => 0,
            Some(token) => token.trim_start_matches("token-").parse::<usize>().unwrap(),
        };
        let endpoints = [queue_arn(index, 0), queue_arn(index, 1)];
        let endpoints: Vec<&str> = endpoints.iter().map(String::as_str).collect();
        let next_token = (index + 1 < pages).then(|| token_for(index + 1));
        Ok(page(&endpoints, next_token.as_deref()))
    });
    client
}

#[rstest]
#[case::single_page(1)]
#[case::two_pages(2)]
#[case::many_pages(7)]
#[tokio::test]
async fn list_subscriptions_concatenates_all_pages_in_order(#[case] pages: usize) {
    let topic = topic_with(paged_client(pages));

    let subscriptions = topic.list_subscriptions(&CancellationToken::new()).await.unwrap();

    let endpoints: Vec<String> = subscriptions.into_iter().filter_map(|subscription| subscription.endpoint).collect();
    let expected: Vec<String> = (0..pages).flat_map(|page| [queue_arn(page, 0), queue_arn(page, 1)]).collect();
    assert_eq!(endpoints, expected);
}

#[rstest]
#[tokio::test]
async fn list_subscriptions_of_topic_without_subscriptions_is_empty() {
    let mut client = MockNotificationClient::new();
    client.expect_list_subscriptions_by_topic().times(1).returning(|_, _| Ok(SubscriptionPage::default()));
    let topic = topic_with(client);

    let subscriptions = topic.list_subscriptions(&CancellationToken::new()).await.unwrap();

    assert!(subscriptions.is_empty());
}

#[rstest]
#[tokio::test]
async fn list_subscriptions_keeps_following_tokens_past_empty_pages() {
    let mut client = MockNotificationClient::new();
    client.expect_list_subscriptions_by_topic().times(3).returning(|_, token| match token.as_deref() {
        None => Ok(page(&[], Some("token-1"))),
        Some("token-1") => Ok(page(&[], Some("token-2"))),
        Some("token-2") => Ok(page(&[TEST_QUEUE_ARN], None)),
        Some(other) => panic!("unexpected token {}", other),
    });
    let topic = topic_with(client);

    let subscriptions = topic.list_subscriptions(&CancellationToken::new()).await.unwrap();

    assert_eq!(subscriptions, vec![sqs_subscription(TEST_QUEUE_ARN)]);
}

#[rstest]
#[tokio::test]
async fn list_subscriptions_discards_partial_results_on_page_failure() {
    let mut client = MockNotificationClient::new();
    client.expect_list_subscriptions_by_topic().times(2).returning(|_, token| match token {
        None => Ok(page(&[TEST_QUEUE_ARN], Some("token-1"))),
        Some(_) => Err(list_error()),
    });
    let topic = topic_with(client);

    let result = topic.list_subscriptions(&CancellationToken::new()).await;

    assert_matches!(result, Err(TopicError::Transport(NotificationError::ListSubscriptions(_))));
}

#[rstest]
#[tokio::test]
async fn list_subscriptions_returns_cancelled_without_calling_provider() {
    let mut client = MockNotificationClient::new();
    client.expect_list_subscriptions_by_topic().never();
    let topic = topic_with(client);

    let cancel = CancellationToken::new();
    cancel.cancel();

    assert_matches!(topic.list_subscriptions(&cancel).await, Err(TopicError::Cancelled));
}

#[rstest]
#[tokio::test]
async fn subscription_pages_are_fetched_lazily() {
    // A next page exists, but nothing asks for it
    let mut client = MockNotificationClient::new();
    client
        .expect_list_subscriptions_by_topic()
        .times(1)
        .returning(|_, _| Ok(page(&[TEST_QUEUE_ARN], Some("token-1"))));
    let topic = topic_with(client);

    let mut pages = Box::pin(topic.subscription_pages());
    let first = pages.next().await.unwrap().unwrap();

    assert_eq!(first, vec![sqs_subscription(TEST_QUEUE_ARN)]);
}

#[rstest]
#[tokio::test]
async fn subscription_pages_stop_after_page_without_token() {
    let mut client = MockNotificationClient::new();
    client.expect_list_subscriptions_by_topic().times(2).returning(|_, token| match token {
        None => Ok(page(&[OTHER_QUEUE_ARN], Some("token-1"))),
        Some(_) => Ok(page(&[TEST_QUEUE_ARN], None)),
    });

    let pages: Vec<_> = subscription_pages(Arc::new(client), TEST_TOPIC_ARN.to_string()).collect().await;

    assert_eq!(pages.len(), 2);
    assert!(pages.iter().all(Result::is_ok));
}

#[rstest]
#[tokio::test]
async fn subscription_pages_end_after_first_error() {
    let mut client = MockNotificationClient::new();
    client.expect_list_subscriptions_by_topic().times(1).returning(|_, _| Err(list_error()));

    let pages: Vec<_> = subscription_pages(Arc::new(client), TEST_TOPIC_ARN.to_string()).collect().await;

    assert_eq!(pages.len(), 1);
    assert_matches!(pages[0], Err(NotificationError::ListSubscriptions(_)));
}
