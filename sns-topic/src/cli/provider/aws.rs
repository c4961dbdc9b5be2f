use clap::Args;

/// Parameters used to config AWS.
#[derive(Debug, Clone, Default, Args)]
pub struct AWSConfigCliArgs {
    /// The region. Falls back to the default AWS provider chain when unset.
    #[arg(env = "AWS_REGION", long, global = true)]
    pub aws_region: Option<String>,

    /// Custom endpoint for AWS services, e.g. a LocalStack URL.
    #[arg(env = "AWS_ENDPOINT_URL", long, global = true)]
    pub aws_endpoint_url: Option<String>,
}
