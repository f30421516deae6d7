//! Tests for the in-memory repository contract: organization scoping,
//! exact-match title lookups, and the duplicate-title constraint.

use bulletin::application_port::MessageError;
use bulletin::domain_model::{MessageId, MessageRecord, OrganizationId};
use bulletin::domain_port::MessageRepo;
use bulletin::infra_memory::InMemoryMessageRepo;
use chrono::Utc;
use uuid::Uuid;

fn record(organization_id: OrganizationId, title: &str) -> MessageRecord {
    let now = Utc::now();
    MessageRecord {
        message_id: MessageId(Uuid::new_v4()),
        organization_id,
        title: title.to_string(),
        content: "some content long enough".to_string(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

fn org() -> OrganizationId {
    OrganizationId(Uuid::new_v4())
}

#[tokio::test]
async fn insert_then_get_by_id() {
    let repo = InMemoryMessageRepo::new();
    let org = org();
    let record = record(org, "Title");

    repo.insert(&record).await.expect("insert");

    let found = repo
        .get_by_id(org, record.message_id)
        .await
        .expect("get")
        .expect("present");
    assert_eq!(found.title, "Title");
}

#[tokio::test]
async fn get_by_id_does_not_cross_organizations() {
    let repo = InMemoryMessageRepo::new();
    let record = record(org(), "Title");

    repo.insert(&record).await.expect("insert");

    let found = repo.get_by_id(org(), record.message_id).await.expect("get");
    assert!(found.is_none());
}

#[tokio::test]
async fn get_by_title_is_exact_and_case_sensitive() {
    let repo = InMemoryMessageRepo::new();
    let org = org();

    repo.insert(&record(org, "Title")).await.expect("insert");

    assert!(repo.get_by_title(org, "Title").await.expect("get").is_some());
    assert!(repo.get_by_title(org, "title").await.expect("get").is_none());
    assert!(repo.get_by_title(org, "Titl").await.expect("get").is_none());
}

#[tokio::test]
async fn duplicate_title_in_same_organization_is_rejected() {
    let repo = InMemoryMessageRepo::new();
    let org = org();

    repo.insert(&record(org, "Title")).await.expect("insert");

    let err = repo
        .insert(&record(org, "Title"))
        .await
        .expect_err("duplicate");
    assert!(matches!(err, MessageError::DuplicateTitle));
}

#[tokio::test]
async fn duplicate_title_across_organizations_is_allowed() {
    let repo = InMemoryMessageRepo::new();

    repo.insert(&record(org(), "Title")).await.expect("insert");
    repo.insert(&record(org(), "Title")).await.expect("insert");
}

#[tokio::test]
async fn update_overwrites_the_row() {
    let repo = InMemoryMessageRepo::new();
    let org = org();
    let mut record = record(org, "Title");

    repo.insert(&record).await.expect("insert");

    record.content = "rewritten content, still long enough".to_string();
    record.is_active = false;
    record.updated_at = Utc::now();
    repo.update(&record).await.expect("update");

    let found = repo
        .get_by_id(org, record.message_id)
        .await
        .expect("get")
        .expect("present");
    assert_eq!(found.content, "rewritten content, still long enough");
    assert!(!found.is_active);
}

#[tokio::test]
async fn list_filters_by_organization() {
    let repo = InMemoryMessageRepo::new();
    let org_a = org();
    let org_b = org();

    repo.insert(&record(org_a, "First")).await.expect("insert");
    repo.insert(&record(org_a, "Second")).await.expect("insert");
    repo.insert(&record(org_b, "Other")).await.expect("insert");

    let listed = repo.list(org_a).await.expect("list");
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|r| r.organization_id == org_a));
}
