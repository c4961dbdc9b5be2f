use std::sync::Arc;

use async_trait::async_trait;
use aws_config::{Region, SdkConfig};

use crate::cli::app::AppIdCliArgs;
use crate::cli::provider::aws::AWSConfigCliArgs;
use crate::core::client::notification::NotificationClient;
use crate::core::client::{InnerSQS, SNS};
use crate::error::TopicResult;
use crate::types::params::AppId;

/// ConfigProvider trait
///
/// Supplies the process-wide application identity and builds the
/// notification client a [`crate::Topic`] talks to.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Identity used to fill the empty fields of a topic's settings.
    fn app_id(&self) -> AppId;

    async fn notification_client(&self) -> TopicResult<Arc<dyn NotificationClient>>;
}

#[derive(Debug, Clone)]
pub struct AWSCredentials {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl AWSCredentials {
    /// Loads the shared AWS configuration from the environment, applying the
    /// region and endpoint overrides when they are set.
    pub async fn get_aws_config(&self) -> SdkConfig {
        let mut loader = aws_config::from_env();
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        loader.load().await
    }
}

impl From<AWSConfigCliArgs> for AWSCredentials {
    fn from(args: AWSConfigCliArgs) -> Self {
        Self { region: args.aws_region, endpoint_url: args.aws_endpoint_url }
    }
}

/// Configuration provider backed by the AWS SDK.
#[derive(Debug, Clone)]
pub struct AwsConfigProvider {
    app_id: AppId,
    aws_config: SdkConfig,
}

impl AwsConfigProvider {
    pub fn new(app_id: AppId, aws_config: SdkConfig) -> Self {
        Self { app_id, aws_config }
    }

    pub async fn from_args(app_args: AppIdCliArgs, aws_config_args: AWSConfigCliArgs) -> Self {
        let aws_config = AWSCredentials::from(aws_config_args).get_aws_config().await;
        Self::new(AppId::from(app_args), aws_config)
    }

    pub fn aws_config(&self) -> &SdkConfig {
        &self.aws_config
    }

    pub fn sqs(&self) -> InnerSQS {
        InnerSQS::new(&self.aws_config)
    }
}

#[async_trait]
impl ConfigProvider for AwsConfigProvider {
    fn app_id(&self) -> AppId {
        self.app_id.clone()
    }

    async fn notification_client(&self) -> TopicResult<Arc<dyn NotificationClient>> {
        Ok(Arc::new(SNS::new(&self.aws_config)))
    }
}
