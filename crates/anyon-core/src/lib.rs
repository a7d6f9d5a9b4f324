#![deny(missing_docs)]
#![doc = "Core types and the canonical error surface for the anyon chain engine."]

pub mod errors;
pub mod schema;
mod types;

pub use errors::{AnyonError, ErrorInfo};
pub use schema::SchemaVersion;
pub use types::{BasisState, CouplingTable, Window};
