use anyhow::Result;
use mqauth::Store;

/// Drops both tables. The caller exits right after this; no other operation
/// runs in the same invocation.
pub async fn drop_all(store: &Store) -> Result<()> {
    store.drop_schema().await?;
    println!("Dropped all tables.");
    Ok(())
}
