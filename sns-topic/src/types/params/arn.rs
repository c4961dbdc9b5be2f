use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ARN {
    pub partition: String,  // Usually "aws" (e.g., "aws-us-gov", "aws-cn")
    pub service: String,    // AWS service (e.g., "sns", "sqs")
    pub region: String,     // AWS region (e.g., "us-east-1")
    pub account_id: String, // AWS account ID (12-digit number)
    pub resource: String,   // Resource identifier (e.g., "topic-name", "queue-name")
}

impl ARN {
    /// Parse an ARN string into its components
    /// Format: arn:partition:service:region:account-id:resource
    pub fn parse(arn_str: &str) -> Result<Self, &'static str> {
        if arn_str.trim().is_empty() {
            return Err("ARN string cannot be empty");
        }

        let parts: Vec<&str> = arn_str.split(':').collect();

        if parts.len() != 6 || parts[0] != "arn" {
            return Err("Invalid ARN format");
        }

        if parts[1].is_empty() {
            return Err("Partition cannot be empty");
        }

        if parts[2].is_empty() {
            return Err("Service cannot be empty");
        }

        if parts[5].is_empty() {
            return Err("Resource cannot be empty");
        }

        Ok(ARN {
            partition: parts[1].to_string(),
            service: parts[2].to_string(),
            region: parts[3].to_string(),
            account_id: parts[4].to_string(),
            resource: parts[5].to_string(),
        })
    }

    /// Parse and require a specific service, e.g. "sns" for topics.
    pub fn parse_for_service(arn_str: &str, service: &str) -> Result<Self, String> {
        let arn = Self::parse(arn_str).map_err(str::to_string)?;
        if arn.service != service {
            return Err(format!("Expected {} ARN but got service: {}", service, arn.service));
        }
        Ok(arn)
    }
}

impl fmt::Display for ARN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "arn:{}:{}:{}:{}:{}", self.partition, self.service, self.region, self.account_id, self.resource)
    }
}
