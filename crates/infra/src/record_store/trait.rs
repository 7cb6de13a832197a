use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use tillbook_core::{DomainError, Entity};

/// An entity that can be written to and rebuilt from one record line.
///
/// A line is a sequence of whitespace-separated fields whose first field is the
/// record's name.
pub trait Record: Entity + Clone {
    /// Record kind, used in log fields.
    const KIND: &'static str;

    /// Fields of the record line, name first.
    fn to_fields(&self) -> Vec<String>;

    /// Rebuild a record from the fields of one line (name first, never empty).
    fn from_fields(fields: &[&str]) -> Result<Self, RecordError>;

    /// Placeholder handed out when a lookup finds nothing.
    fn fallback() -> Self;

    /// The full record line, without a trailing newline.
    fn encode(&self) -> String {
        self.to_fields().join(" ")
    }
}

/// Failure to rebuild a record from its fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The category token names no known product category.
    #[error("unknown product category: {0}")]
    UnknownCategory(String),

    /// Missing, extra, or unparsable fields.
    #[error("{0}")]
    Malformed(String),

    /// The fields parsed but describe an invalid entity.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl RecordError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

/// Record store error.
#[derive(Debug, Error)]
pub enum RecordStoreError {
    /// The backing file could not be opened, read, or written.
    #[error("unable to open {} for {access}: {source}", .path.display())]
    FileUnavailable {
        path: PathBuf,
        access: &'static str,
        #[source]
        source: io::Error,
    },

    /// A matching product record carries an unrecognized category token.
    #[error("unknown product category {category:?} at {}:{line}", .path.display())]
    UnknownProductCategory {
        category: String,
        path: PathBuf,
        line: usize,
    },

    /// A matching record could not be parsed.
    #[error("malformed record at {}:{line}: {reason}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl RecordStoreError {
    pub(crate) fn file_unavailable(path: &Path, access: &'static str, source: io::Error) -> Self {
        Self::FileUnavailable {
            path: path.to_path_buf(),
            access,
            source,
        }
    }

    /// Attach the location of the offending line to a decoding failure.
    pub(crate) fn at_line(err: RecordError, path: &Path, line: usize) -> Self {
        match err {
            RecordError::UnknownCategory(category) => Self::UnknownProductCategory {
                category,
                path: path.to_path_buf(),
                line,
            },
            other => Self::MalformedRecord {
                path: path.to_path_buf(),
                line,
                reason: other.to_string(),
            },
        }
    }
}

/// Result type used by record stores.
pub type RecordStoreResult<T> = Result<T, RecordStoreError>;

/// Outcome of a lookup that always yields a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<R> {
    /// A stored record matched the name.
    Found(R),
    /// Nothing matched; this is the record's fallback placeholder.
    Defaulted(R),
}

impl<R> Lookup<R> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn record(&self) -> &R {
        match self {
            Lookup::Found(r) | Lookup::Defaulted(r) => r,
        }
    }

    pub fn into_record(self) -> R {
        match self {
            Lookup::Found(r) | Lookup::Defaulted(r) => r,
        }
    }

    /// The stored record, or `None` for a placeholder.
    pub fn found(self) -> Option<R> {
        match self {
            Lookup::Found(r) => Some(r),
            Lookup::Defaulted(_) => None,
        }
    }
}

/// Append-only record store keyed by name.
pub trait RecordStore<R: Record> {
    /// Append one record. Saving a name twice stores two records.
    fn save(&self, record: &R) -> RecordStoreResult<()>;

    /// First stored record named `name`, in storage order.
    fn load(&self, name: &str) -> RecordStoreResult<Option<R>>;

    /// All stored records, in storage order.
    fn records(&self) -> RecordStoreResult<Vec<R>>;

    /// Like [`RecordStore::load`], substituting [`Record::fallback`] when
    /// nothing matches.
    fn load_or_default(&self, name: &str) -> RecordStoreResult<Lookup<R>> {
        Ok(match self.load(name)? {
            Some(record) => Lookup::Found(record),
            None => Lookup::Defaulted(R::fallback()),
        })
    }
}
