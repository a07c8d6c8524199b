use super::memory::{InMemoryObjects, InMemoryRegistrations};
use super::*;
use crate::{
    model::registration::RegistrationError,
    ports::{MockObjectStore, MockRegistrationTable},
};

const ANA: &str =
    r#"{"ID":"1","Name":"Ana","Email":"a@x.com","RegistrationDate":"2024-01-01"}"#;

fn location(key: &str) -> ObjectLocation {
    ObjectLocation {
        bucket: "uploads".to_string(),
        key: key.to_string(),
    }
}

fn object_store_returning(content: &'static [u8]) -> MockObjectStore {
    let mut objects = MockObjectStore::new();
    objects
        .expect_get_object()
        .times(1)
        .returning(move |_| Box::pin(async move { Ok(content.to_vec()) }));
    objects
}

fn table_never_written() -> MockRegistrationTable {
    let mut table = MockRegistrationTable::new();
    table.expect_put_registration().times(0);
    table
}

#[tokio::test]
async fn it_writes_exactly_one_registration() {
    let mut objects = MockObjectStore::new();
    objects
        .expect_get_object()
        .withf(|location| location.bucket == "uploads" && location.key == "users/1.json")
        .times(1)
        .returning(|_| Box::pin(async move { Ok(ANA.as_bytes().to_vec()) }));

    let mut table = MockRegistrationTable::new();
    table
        .expect_put_registration()
        .withf(|registration| {
            registration.id == "1"
                && registration.name == "Ana"
                && registration.email == "a@x.com"
                && registration.registration_date == "2024-01-01"
        })
        .times(1)
        .returning(|_| Box::pin(async move { Ok(()) }));

    let registration = IngestService::new(objects, table)
        .ingest(&location("users/1.json"))
        .await
        .unwrap();

    assert_eq!(registration.id, "1");
}

#[tokio::test]
async fn invalid_json_is_not_written() {
    let service = IngestService::new(
        object_store_returning(b"{\"ID\": \"1\", "),
        table_never_written(),
    );

    let err = service.ingest(&location("broken.json")).await.unwrap_err();
    assert!(matches!(err, IngestError::Parse(_)));
}

#[tokio::test]
async fn invalid_utf8_is_not_written() {
    let service = IngestService::new(
        object_store_returning(&[0x7b, 0xff, 0xfe, 0x7d]),
        table_never_written(),
    );

    let err = service.ingest(&location("binary.json")).await.unwrap_err();
    assert!(matches!(err, IngestError::Decode(_)));
}

#[tokio::test]
async fn missing_field_is_not_written() {
    let service = IngestService::new(
        object_store_returning(br#"{"ID":"1","Name":"Ana","Email":"a@x.com"}"#),
        table_never_written(),
    );

    let err = service.ingest(&location("partial.json")).await.unwrap_err();
    assert!(matches!(
        err,
        IngestError::Registration(RegistrationError::MissingFields(fields)) if fields == vec!["RegistrationDate"]
    ));
}

#[tokio::test]
async fn missing_object_is_not_written() {
    let mut objects = MockObjectStore::new();
    objects
        .expect_get_object()
        .times(1)
        .returning(|_| Box::pin(async move { Err(anyhow::anyhow!("NoSuchKey")) }));

    let service = IngestService::new(objects, table_never_written());

    let err = service.ingest(&location("missing.json")).await.unwrap_err();
    assert!(matches!(
        &err,
        IngestError::Fetch { bucket, key, .. } if bucket == "uploads" && key == "missing.json"
    ));
    assert_eq!(
        err.to_string(),
        "could not fetch object missing.json from bucket uploads"
    );
}

#[tokio::test]
async fn write_failures_are_surfaced() {
    let mut table = MockRegistrationTable::new();
    table
        .expect_put_registration()
        .times(1)
        .returning(|_| Box::pin(async move { Err(anyhow::anyhow!("ResourceNotFoundException")) }));

    let service = IngestService::new(object_store_returning(ANA.as_bytes()), table);

    let err = service.ingest(&location("users/1.json")).await.unwrap_err();
    assert!(matches!(err, IngestError::Write { id, .. } if id == "1"));
}

#[tokio::test]
async fn last_write_wins() {
    let objects = InMemoryObjects::default()
        .with_object("uploads", "first.json", ANA)
        .with_object(
            "uploads",
            "second.json",
            r#"{"ID":"1","Name":"Ana Maria","Email":"am@x.com","RegistrationDate":"2024-06-01"}"#,
        );
    let service = IngestService::new(objects, InMemoryRegistrations::default());

    service.ingest(&location("first.json")).await.unwrap();
    service.ingest(&location("second.json")).await.unwrap();

    let table = &service.table;
    assert_eq!(table.puts(), 2);
    assert_eq!(table.len(), 1);
    assert_eq!(
        table.get("1"),
        Some(Registration {
            id: "1".to_string(),
            name: "Ana Maria".to_string(),
            email: "am@x.com".to_string(),
            registration_date: "2024-06-01".to_string(),
        })
    );
}

#[tokio::test]
async fn failed_ingest_leaves_table_untouched() {
    let objects = InMemoryObjects::default().with_object("uploads", "bad.json", "not json");
    let service = IngestService::new(objects, InMemoryRegistrations::default());

    assert!(service.ingest(&location("bad.json")).await.is_err());
    assert!(service.ingest(&location("absent.json")).await.is_err());

    assert_eq!(service.table.puts(), 0);
    assert_eq!(service.table.len(), 0);
}
