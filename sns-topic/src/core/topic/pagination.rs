use std::sync::Arc;

use futures::stream::{self, Stream};

use crate::core::client::notification::{NotificationClient, NotificationError};
use crate::types::subscription::Subscription;

/// Position of a listing between two page requests.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cursor {
    Start,
    Next(String),
    Exhausted,
}

/// Lazily walks every `ListSubscriptionsByTopic` page of a topic.
///
/// The first request carries no token; each following request carries the
/// token returned by the previous page. The stream ends after the first page
/// that comes back without a token, and yields the error of a failed request
/// before ending.
pub fn subscription_pages(
    client: Arc<dyn NotificationClient>,
    topic_arn: String,
) -> impl Stream<Item = Result<Vec<Subscription>, NotificationError>> + Send + 'static {
    stream::try_unfold(Cursor::Start, move |cursor| fetch_page(Arc::clone(&client), topic_arn.clone(), cursor))
}

async fn fetch_page(
    client: Arc<dyn NotificationClient>,
    topic_arn: String,
    cursor: Cursor,
) -> Result<Option<(Vec<Subscription>, Cursor)>, NotificationError> {
    let next_token = match cursor {
        Cursor::Start => None,
        Cursor::Next(token) => Some(token),
        Cursor::Exhausted => return Ok(None),
    };

    let page = client.list_subscriptions_by_topic(topic_arn, next_token).await?;
    let cursor = match page.next_token {
        Some(token) => Cursor::Next(token),
        None => Cursor::Exhausted,
    };

    Ok(Some((page.subscriptions, cursor)))
}
