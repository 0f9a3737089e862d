//! Integration tests for `SqliteStore` against an in-memory database.

use afi_core::{
  customer::{Customer, Submission},
  store::CustomerStore,
};
use chrono::{TimeZone, Utc};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn rob() -> Submission {
  Submission {
    first_name:    Some("Rob".into()),
    surname:       Some("Carson".into()),
    policy_number: Some("AF-123456".into()),
    date_of_birth: Some(Utc.with_ymd_and_hms(1985, 3, 12, 0, 0, 0).unwrap()),
    email_address: None,
  }
}

fn scott() -> Submission {
  Submission {
    first_name:    Some("Scott".into()),
    surname:       Some("Rickman".into()),
    policy_number: Some("ZA-654321".into()),
    date_of_birth: None,
    email_address: Some("scottrickman@afi.co.uk".into()),
  }
}

// ─── Insert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_sequential_ids() {
  let s = store().await;

  let first = s.insert(rob()).await.unwrap();
  let second = s.insert(scott()).await.unwrap();

  assert_eq!(first.customer_id, 1);
  assert_eq!(second.customer_id, 2);
  assert_eq!(first.details, rob());
  assert_eq!(second.details, scott());
}

#[tokio::test]
async fn insert_sets_created_to_now() {
  let s = store().await;
  let before = Utc::now();
  let customer = s.insert(rob()).await.unwrap();
  let after = Utc::now();
  assert!(before <= customer.created && customer.created <= after);
}

#[tokio::test]
async fn insert_then_get_roundtrip() {
  let s = store().await;
  let inserted = s.insert(rob()).await.unwrap();

  let fetched = s.get(inserted.customer_id).await.unwrap();
  assert_eq!(fetched, Some(inserted));
}

#[tokio::test]
async fn insert_keeps_absent_fields_absent() {
  let s = store().await;
  let inserted = s.insert(Submission::default()).await.unwrap();

  let fetched = s.get(inserted.customer_id).await.unwrap().unwrap();
  assert_eq!(fetched.details, Submission::default());
}

// ─── Reads ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(99).await.unwrap().is_none());
}

#[tokio::test]
async fn list_returns_all_in_id_order() {
  let s = store().await;
  s.insert(rob()).await.unwrap();
  s.insert(scott()).await.unwrap();

  let all = s.list().await.unwrap();
  let ids: Vec<_> = all.iter().map(|c| c.customer_id).collect();
  assert_eq!(ids, vec![1, 2]);
  assert_eq!(all[1].details, scott());
}

#[tokio::test]
async fn list_empty_store() {
  let s = store().await;
  assert!(s.list().await.unwrap().is_empty());
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_replaces_fields_and_keeps_created() {
  let s = store().await;
  let inserted = s.insert(scott()).await.unwrap();

  let mut changed = inserted.clone();
  changed.details.email_address = Some("scottrickman@afi.com".into());
  changed.created = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();

  let updated = s.update(changed).await.unwrap();
  assert_eq!(updated.details.email_address.as_deref(), Some("scottrickman@afi.com"));
  assert_eq!(updated.created, inserted.created);

  let fetched = s.get(inserted.customer_id).await.unwrap();
  assert_eq!(fetched, Some(updated));
}

#[tokio::test]
async fn update_can_clear_a_field() {
  let s = store().await;
  let inserted = s.insert(rob()).await.unwrap();

  let mut changed = inserted.clone();
  changed.details.date_of_birth = None;
  changed.details.email_address = Some("robcarson@afi.com".into());

  let updated = s.update(changed).await.unwrap();
  assert_eq!(updated.details.date_of_birth, None);
}

#[tokio::test]
async fn update_missing_customer_errors() {
  let s = store().await;
  let ghost = Customer {
    customer_id: 7,
    created:     Utc::now(),
    details:     rob(),
  };
  assert!(matches!(
    s.update(ghost).await,
    Err(Error::CustomerNotFound(7))
  ));
}

#[tokio::test]
async fn update_leaves_other_rows_alone() {
  let s = store().await;
  let rob_row = s.insert(rob()).await.unwrap();
  let scott_row = s.insert(scott()).await.unwrap();

  let mut changed = rob_row.clone();
  changed.details.surname = Some("Carsons".into());
  s.update(changed).await.unwrap();

  assert_eq!(s.get(scott_row.customer_id).await.unwrap(), Some(scott_row));
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn reopening_file_store_keeps_rows() {
  let stamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
  let path = std::env::temp_dir()
    .join(format!("afi-store-{}-{stamp}.db", std::process::id()));

  let inserted = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert(rob()).await.unwrap()
  };

  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(s.get(inserted.customer_id).await.unwrap(), Some(inserted));

  drop(s);
  for suffix in ["", "-wal", "-shm"] {
    let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
  }
}
