use anyhow::Context;
use aws_sdk_s3 as s3;

/// Downloads an object and collects its body into memory
#[tracing::instrument(skip(client))]
pub async fn get(client: &s3::Client, bucket: &str, key: &str) -> anyhow::Result<Vec<u8>> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .context(format!("could not get item {key} from bucket {bucket}"))?;

    let body = resp
        .body
        .collect()
        .await
        .context("could not collect body")?;

    let bytes = body.into_bytes().to_vec();
    tracing::trace!(size = bytes.len(), "collected object body");
    Ok(bytes)
}
