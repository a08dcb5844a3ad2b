use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mqauth::Store;

mod commands;

use commands::{account_cmd, acl_cmd, schema_cmd};

#[derive(Parser)]
#[command(
    name = "mqauth",
    version,
    about = "Administer accounts and ACLs for the broker's PostgreSQL auth backend",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account with a freshly hashed credential
    AddAccount(account_cmd::AddAccountCommand),

    /// Delete an account by username (silently succeeds if absent)
    RemoveAccount(account_cmd::RemoveAccountCommand),

    /// Print every account
    ListAccounts,

    /// Grant a topic pattern to a username
    AddAcl(acl_cmd::AddAclCommand),

    /// Delete the ACL entry for a username and topic (silently succeeds if absent)
    RemoveAcl(acl_cmd::RemoveAclCommand),

    /// Print every ACL entry
    ListAcls,

    /// Drop the account and acl tables and exit
    DropAll,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mqauth=warn")),
        )
        .init();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL")
        .context("DATABASE_URL must be set to a PostgreSQL connection string")?;

    let store = Store::connect(&database_url)
        .await
        .context("failed to connect to the auth database")?;

    let result = run(&store, cli.command).await;
    store.close().await;
    result
}

async fn run(store: &Store, command: Commands) -> Result<()> {
    store.ensure_schema().await?;

    match command {
        Commands::AddAccount(cmd) => account_cmd::add(store, cmd).await,
        Commands::RemoveAccount(cmd) => account_cmd::remove(store, cmd).await,
        Commands::ListAccounts => account_cmd::list(store).await,
        Commands::AddAcl(cmd) => acl_cmd::add(store, cmd).await,
        Commands::RemoveAcl(cmd) => acl_cmd::remove(store, cmd).await,
        Commands::ListAcls => acl_cmd::list(store).await,
        Commands::DropAll => schema_cmd::drop_all(store).await,
    }
}
