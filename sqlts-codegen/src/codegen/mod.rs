//! Code generation module

mod declaration;
mod field;
mod naming;
mod writer;

pub use declaration::*;
pub use field::*;
pub use naming::*;
pub use writer::FileWriter;
