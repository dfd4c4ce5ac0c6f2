//! sqlts - MySQL schema introspection
//!
//! A thin layer over `mysql_async` that answers the two questions a model
//! generator asks of a database: which tables exist, and what columns each
//! table has.
//!
//! # Features
//!
//! - **Schema Source Trait**: `SchemaSource` abstracts the backend so generators
//!   can be driven from a live server or from memory
//! - **Column Metadata**: `SHOW COLUMNS` rows decoded into `Column`, with field
//!   names and types lower-cased
//! - **Error Classification**: unknown databases and unreadable tables surface
//!   as dedicated error variants
//!
//! # Example
//!
//! ```ignore
//! use sqlts::{ConnectOptions, MySqlSchema, SchemaSource};
//!
//! async fn describe(options: &ConnectOptions) -> sqlts::Result<()> {
//!     let schema = MySqlSchema::connect(options, "shop").await?;
//!     let columns = schema.fetch_columns("shop", "users").await?;
//!     for col in &columns {
//!         println!("{} {}", col.field, col.sql_type);
//!     }
//!     schema.disconnect().await
//! }
//! ```

pub mod column;
pub mod error;
pub mod mysql;
pub mod source;

// Re-export main types
pub use column::Column;
pub use error::{Error, Result};
pub use mysql::{ConnectOptions, MySqlSchema};
pub use source::SchemaSource;
