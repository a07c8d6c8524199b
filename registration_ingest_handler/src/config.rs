use anyhow::Context;

ingest_env_var::env_var!(
    #[derive(Debug, Clone)]
    pub struct TableName;
);

/// Used when neither the lambda environment nor the local profile provides a region
pub const DEFAULT_REGION: &str = "eu-west-3";

/// The configuration parameters for the lambda, read once at cold start.
///
/// `AWS_REGION` is resolved separately by the aws-config provider chain.
#[derive(Debug, Clone)]
pub struct Config {
    /// The DynamoDB table registrations are written to
    pub table_name: TableName,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let table_name = TableName::new().context("TABLE_NAME must be provided")?;
        Ok(Config { table_name })
    }
}
