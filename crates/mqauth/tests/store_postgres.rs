//! Store tests against a live PostgreSQL instance.
//!
//! Set `MQAUTH_TEST_DATABASE_URL` to a scratch database to run these; they
//! drop and recreate the `account` and `acl` tables. Without the variable
//! they skip cleanly.

use mqauth::{credential, permissions, AuthDbError, Store};

fn test_database_url() -> Option<String> {
    std::env::var("MQAUTH_TEST_DATABASE_URL").ok()
}

// One sequential test covers the whole lifecycle: the flow exercises
// drop_schema, which would race against any other test sharing the database.
#[tokio::test]
async fn account_and_acl_lifecycle() -> anyhow::Result<()> {
    let Some(url) = test_database_url() else {
        eprintln!("MQAUTH_TEST_DATABASE_URL not set; skipping");
        return Ok(());
    };

    let store = Store::connect(&url).await?;
    store.drop_schema().await?;
    store.ensure_schema().await?;
    // Re-running the DDL against existing tables must be a no-op.
    store.ensure_schema().await?;

    // Accounts start empty.
    assert!(store.list_accounts().await?.is_empty());

    // add-account alice secret yes
    let encoded = credential::encode_password("secret")?;
    let alice = store.create_account("alice", &encoded, true).await?;
    assert_eq!(alice.username, "alice");
    assert!(alice.superuser);

    let accounts = store.list_accounts().await?;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].username, "alice");
    assert!(accounts[0].superuser);
    assert!(accounts[0].password.starts_with("PBKDF2$sha256$"));
    assert!(credential::verify_password("secret", &accounts[0].password));

    // Re-adding the username fails with a duplicate-key error and leaves the
    // original row unmodified.
    let other = credential::encode_password("other")?;
    let dup = store.create_account("alice", &other, false).await;
    assert!(matches!(dup, Err(AuthDbError::Duplicate { .. })));

    let unchanged = store.find_account("alice").await?.expect("alice exists");
    assert_eq!(unchanged.password, encoded);
    assert!(unchanged.superuser);

    // add-acl alice sensor/# 3
    let acl = store.create_acl("alice", "sensor/#", 3).await?;
    assert_eq!(acl.topic, "sensor/#");

    let acls = store.list_acls().await?;
    assert_eq!(acls.len(), 1);
    assert_eq!(permissions::describe(acls[0].permissions), "read and write");

    // The unique index on acl.username limits each user to one ACL row,
    // even for a different topic.
    let second = store.create_acl("alice", "actuators/#", 7).await;
    assert!(matches!(second, Err(AuthDbError::Duplicate { .. })));

    // Point lookups.
    assert!(store.find_acl("alice", "sensor/#").await?.is_some());
    assert!(store.find_acl("alice", "other/#").await?.is_none());
    assert!(store.find_account("ghost").await?.is_none());

    // Out-of-range permission levels are stored as-is; only the codec
    // rejects them, and only at display time.
    let lax = store.create_acl("eve", "anything/#", 99).await?;
    assert_eq!(
        store
            .find_acl("eve", "anything/#")
            .await?
            .expect("row stored")
            .permissions,
        99
    );
    store.delete_acl(&lax).await?;

    // remove-acl alice sensor/#
    store.delete_acl(&acl).await?;
    assert!(store.list_acls().await?.is_empty());

    // Deleting an already-gone row is a silent no-op.
    store.delete_acl(&acl).await?;
    store.delete_account(&alice).await?;
    store.delete_account(&alice).await?;
    assert!(store.list_accounts().await?.is_empty());

    // drop-all, then a fresh schema starts empty.
    store.drop_schema().await?;
    store.ensure_schema().await?;
    assert!(store.list_accounts().await?.is_empty());
    assert!(store.list_acls().await?.is_empty());

    store.close().await;
    Ok(())
}
