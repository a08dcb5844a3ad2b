pub mod account_cmd;
pub mod acl_cmd;
pub mod schema_cmd;
