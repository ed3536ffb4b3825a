//! Seed utility tests

use member_registry::members::store::{MemberStore, SqliteMemberStore};
use member_registry::{db, seed};

#[tokio::test]
async fn seed_inserts_fixed_members_and_is_idempotent() {
    let pool = db::connect("sqlite::memory:", 1).await.unwrap();
    db::run_migrations(&pool).await.unwrap();

    let inserted = seed::seed_members(&pool).await.unwrap();
    assert_eq!(inserted, seed::SEED_MEMBERS.len() as u64);

    // Second run skips every row
    let inserted = seed::seed_members(&pool).await.unwrap();
    assert_eq!(inserted, 0);

    let store = SqliteMemberStore::new(pool);
    let members = store.list().await.unwrap();
    let numbers: Vec<&str> = members.iter().map(|m| m.member_no.as_str()).collect();
    assert_eq!(numbers, vec!["M001", "M002", "M003"]);
}

#[tokio::test]
async fn seed_skips_existing_member_no_without_touching_it() {
    let pool = db::connect("sqlite::memory:", 1).await.unwrap();
    db::run_migrations(&pool).await.unwrap();

    let store = SqliteMemberStore::new(pool.clone());
    store.insert("M002", "Pre-existing").await.unwrap();

    let inserted = seed::seed_members(&pool).await.unwrap();
    assert_eq!(inserted, 2);

    let members = store.list().await.unwrap();
    assert_eq!(members.len(), 3);
    let m002 = members.iter().find(|m| m.member_no == "M002").unwrap();
    assert_eq!(m002.name, "Pre-existing");
}
