use std::collections::HashMap;

use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;

pub const ID_ATTRIBUTE: &str = "ID";
pub const NAME_ATTRIBUTE: &str = "Name";
pub const EMAIL_ATTRIBUTE: &str = "Email";
pub const REGISTRATION_DATE_ATTRIBUTE: &str = "RegistrationDate";

/// Builds the item stored for a registration
pub fn registration_item(
    id: &str,
    name: &str,
    email: &str,
    registration_date: &str,
) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (ID_ATTRIBUTE.to_string(), AttributeValue::S(id.to_string())),
        (NAME_ATTRIBUTE.to_string(), AttributeValue::S(name.to_string())),
        (EMAIL_ATTRIBUTE.to_string(), AttributeValue::S(email.to_string())),
        (
            REGISTRATION_DATE_ATTRIBUTE.to_string(),
            AttributeValue::S(registration_date.to_string()),
        ),
    ])
}

/// Puts the registration item. There is no condition expression so an existing item
/// with the same `ID` is overwritten.
#[tracing::instrument(skip(client, name, email))]
pub async fn put_registration(
    client: &Client,
    table: &str,
    id: &str,
    name: &str,
    email: &str,
    registration_date: &str,
) -> anyhow::Result<()> {
    client
        .put_item()
        .table_name(table)
        .set_item(Some(registration_item(id, name, email, registration_date)))
        .send()
        .await
        .context(format!("failed to put registration {id} into {table}"))?;

    tracing::trace!("registration written");

    Ok(())
}
