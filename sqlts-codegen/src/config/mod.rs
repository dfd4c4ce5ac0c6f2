//! Configuration loading and validation

pub mod defaults;
mod options;
mod settings;
mod table;

pub use settings::{parse_config, ClassOptions, Config, Driver};
pub use table::{derive_file_name, resolve_table, table_from_name, OutputKind, TableDescriptor};
