use aws_config::SdkConfig;

mod registration;

pub use registration::registration_item;

#[derive(Debug, Clone)]
pub struct DynamodbClient {
    pub registrations: Registrations,
}

impl DynamodbClient {
    pub fn new(aws_config: &SdkConfig, registrations_table: &str) -> Self {
        let client = aws_sdk_dynamodb::Client::new(aws_config);

        Self::new_from_client(client, registrations_table)
    }

    pub fn new_from_client(client: aws_sdk_dynamodb::Client, registrations_table: &str) -> Self {
        Self {
            registrations: Registrations {
                table: registrations_table.to_string(),
                client,
            },
        }
    }
}

/// Access to the registrations table, keyed by `ID`
#[derive(Debug, Clone)]
pub struct Registrations {
    table: String,
    client: aws_sdk_dynamodb::Client,
}

impl Registrations {
    /// Writes a registration, replacing any existing item with the same id
    #[tracing::instrument(skip(self, name, email), fields(table = %self.table))]
    pub async fn put_registration(
        &self,
        id: &str,
        name: &str,
        email: &str,
        registration_date: &str,
    ) -> anyhow::Result<()> {
        registration::put_registration(
            &self.client,
            &self.table,
            id,
            name,
            email,
            registration_date,
        )
        .await
    }
}
