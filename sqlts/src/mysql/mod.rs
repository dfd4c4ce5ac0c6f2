//! MySQL implementation for sqlts

mod options;
mod row;
mod schema;

pub use options::{ConnectOptions, DEFAULT_PORT};
pub use schema::{quote_identifier, MySqlSchema};
