use anyhow::{Context, Result};
use clap::Args;
use mqauth::{credential, Store};

#[derive(Args)]
pub struct AddAccountCommand {
    #[arg(help = "Login username (unique)")]
    pub username: String,

    #[arg(help = "Plaintext password; only its hash is stored")]
    pub password: String,

    #[arg(help = "Superuser flag: anything starting with y/Y, or 1, means yes")]
    pub superuser: String,

    #[arg(
        long,
        short = 'i',
        help = "PBKDF2 iteration count embedded in the credential",
        default_value_t = credential::DEFAULT_ITERATIONS
    )]
    pub iterations: u32,
}

#[derive(Args)]
pub struct RemoveAccountCommand {
    #[arg(help = "Username to remove")]
    pub username: String,
}

pub async fn add(store: &Store, cmd: AddAccountCommand) -> Result<()> {
    let encoded = credential::encode_password_with_iterations(&cmd.password, cmd.iterations)
        .context("failed to encode credential")?;
    let superuser = parse_superuser_flag(&cmd.superuser);

    store
        .create_account(&cmd.username, &encoded, superuser)
        .await?;

    println!("Added account {}.", cmd.username);
    Ok(())
}

pub async fn remove(store: &Store, cmd: RemoveAccountCommand) -> Result<()> {
    if let Some(account) = store.find_account(&cmd.username).await? {
        store.delete_account(&account).await?;
        println!("Removed account {}.", cmd.username);
    }
    Ok(())
}

pub async fn list(store: &Store) -> Result<()> {
    for account in store.list_accounts().await? {
        let superuser = if account.superuser { "YES" } else { "NO" };
        println!("Username: {} Superuser: {}", account.username, superuser);
    }
    Ok(())
}

/// `y…`/`Y…` and `1` opt in; anything else, including empty, is no. There is
/// deliberately no error path for unrecognized input.
fn parse_superuser_flag(raw: &str) -> bool {
    raw.to_lowercase().starts_with('y') || raw == "1"
}
