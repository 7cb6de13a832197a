//! Name-keyed, append-only record storage.
//!
//! Records are appended one per line and looked up by a first-match linear scan
//! of their name. There is no update or delete. A lookup that finds nothing is
//! an explicit `None` (or [`Lookup::Defaulted`]), never an error.

pub mod codec;
pub mod flat_file;
pub mod in_memory;
pub mod r#trait;

pub use flat_file::FlatFileStore;
pub use in_memory::InMemoryRecordStore;
pub use r#trait::{Lookup, Record, RecordError, RecordStore, RecordStoreError, RecordStoreResult};
