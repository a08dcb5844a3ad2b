use anyhow::Result;
use clap::Args;
use mqauth::{permissions, Store};

#[derive(Args)]
pub struct AddAclCommand {
    #[arg(help = "Username the grant applies to (one ACL entry per username)")]
    pub username: String,

    #[arg(help = "Topic filter, wildcards allowed (stored opaquely)")]
    pub topic: String,

    #[arg(
        help = "Permission level: bit 0 read, bit 1 write, bit 2 subscribe",
        allow_hyphen_values = true
    )]
    pub permissions: i32,
}

#[derive(Args)]
pub struct RemoveAclCommand {
    #[arg(help = "Username the entry belongs to")]
    pub username: String,

    #[arg(help = "Topic filter of the entry")]
    pub topic: String,
}

pub async fn add(store: &Store, cmd: AddAclCommand) -> Result<()> {
    // The level is stored without range validation; values outside 0-7 only
    // fail later, when a listing renders them.
    store
        .create_acl(&cmd.username, &cmd.topic, cmd.permissions)
        .await?;

    println!(
        "Added acl {} topic {} permissions {}.",
        cmd.username, cmd.topic, cmd.permissions
    );
    Ok(())
}

pub async fn remove(store: &Store, cmd: RemoveAclCommand) -> Result<()> {
    if let Some(acl) = store.find_acl(&cmd.username, &cmd.topic).await? {
        store.delete_acl(&acl).await?;
        println!("Removed acl {} topic {}.", cmd.username, cmd.topic);
    }
    Ok(())
}

pub async fn list(store: &Store) -> Result<()> {
    for acl in store.list_acls().await? {
        println!(
            "Username: {} Topic: {} Permissions: {}",
            acl.username,
            acl.topic,
            permissions::describe(acl.permissions)
        );
    }
    Ok(())
}
