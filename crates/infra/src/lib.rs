//! Infrastructure layer: flat-file record storage and its configuration.

pub mod config;
pub mod record_store;

pub use config::StoreConfig;
pub use record_store::{
    FlatFileStore, InMemoryRecordStore, Lookup, Record, RecordError, RecordStore,
    RecordStoreError, RecordStoreResult,
};
