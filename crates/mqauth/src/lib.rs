//! # Broker auth database administration
//!
//! Library backing the `mqauth` tool: it manages the account and ACL rows an
//! MQTT broker's password auth plugin reads at connect time, in PostgreSQL.
//!
//! Three pieces:
//!
//! - [`credential`] encodes plaintext passwords as
//!   `PBKDF2$sha256$<iterations>$<salt>$<derived_key>` strings, the exact
//!   format the broker's verifier parses.
//! - [`store`] owns the two-table schema (`account`, `acl`) and its CRUD.
//! - [`permissions`] renders the 3-bit ACL permission levels as labels.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use mqauth::{credential, Store};
//!
//! # async fn demo() -> mqauth::Result<()> {
//! let store = Store::connect("postgres://localhost/mqtt").await?;
//! store.ensure_schema().await?;
//!
//! let encoded = credential::encode_password("hunter2")?;
//! store.create_account("alice", &encoded, false).await?;
//! store.create_acl("alice", "sensors/#", 3).await?;
//! store.close().await;
//! # Ok(())
//! # }
//! ```

pub mod credential;
pub mod error;
pub mod permissions;
pub mod store;

pub use error::{AuthDbError, Result};
pub use store::{Account, Acl, Store};
