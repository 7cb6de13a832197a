use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::marker::PhantomData;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use tillbook_parties::Customer;
use tillbook_products::Product;

use crate::config::StoreConfig;

use super::r#trait::{Record, RecordStore, RecordStoreError, RecordStoreResult};

/// Text-file record store: one record per line, appended, scanned from the top.
///
/// Every operation opens the file, works on it and closes it before returning.
/// A file that does not exist yet, or cannot be opened for reading, reads as
/// empty. Failures to write are always returned to the caller.
#[derive(Debug, Clone)]
pub struct FlatFileStore<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R> FlatFileStore<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FlatFileStore<Product> {
    /// Product store at the configured products file.
    pub fn products(config: &StoreConfig) -> Self {
        Self::new(config.products_path())
    }
}

impl FlatFileStore<Customer> {
    /// Customer store at the configured customers file.
    pub fn customers(config: &StoreConfig) -> Self {
        Self::new(config.customers_path())
    }
}

impl<R: Record> FlatFileStore<R> {
    fn open_for_read(&self) -> Option<BufReader<File>> {
        match File::open(&self.path) {
            Ok(file) => Some(BufReader::new(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(kind = R::KIND, path = %self.path.display(), "record file missing; reads as empty");
                None
            }
            Err(e) => {
                warn!(kind = R::KIND, path = %self.path.display(), error = %e, "unable to open record file for reading");
                None
            }
        }
    }

    /// Visit every non-blank line with its 1-based line number and fields.
    ///
    /// Lines are decoded lossily, so a stray non-UTF-8 byte only affects its
    /// own line. The reader is dropped before returning on every path.
    fn scan<F>(&self, mut visit: F) -> RecordStoreResult<()>
    where
        F: FnMut(usize, &[&str]) -> RecordStoreResult<ControlFlow<()>>,
    {
        let Some(reader) = self.open_for_read() else {
            return Ok(());
        };

        for (idx, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes
                .map_err(|source| RecordStoreError::file_unavailable(&self.path, "reading", source))?;
            let line = String::from_utf8_lossy(&bytes);
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if visit(idx + 1, &fields)?.is_break() {
                break;
            }
        }
        Ok(())
    }

    fn decode(&self, line: usize, fields: &[&str]) -> RecordStoreResult<R> {
        R::from_fields(fields).map_err(|e| RecordStoreError::at_line(e, &self.path, line))
    }
}

impl<R: Record> RecordStore<R> for FlatFileStore<R> {
    fn save(&self, record: &R) -> RecordStoreResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|source| RecordStoreError::file_unavailable(&self.path, "writing", source))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| RecordStoreError::file_unavailable(&self.path, "writing", source))?;

        let line = format!("{}\n", record.encode());
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| RecordStoreError::file_unavailable(&self.path, "writing", source))?;

        debug!(kind = R::KIND, name = record.name(), path = %self.path.display(), "record appended");
        Ok(())
    }

    fn load(&self, name: &str) -> RecordStoreResult<Option<R>> {
        let mut found = None;
        self.scan(|line, fields| {
            if fields[0] != name {
                return Ok(ControlFlow::Continue(()));
            }
            found = Some(self.decode(line, fields)?);
            Ok(ControlFlow::Break(()))
        })?;

        debug!(kind = R::KIND, name, found = found.is_some(), "record lookup");
        Ok(found)
    }

    fn records(&self) -> RecordStoreResult<Vec<R>> {
        let mut records = Vec::new();
        self.scan(|line, fields| {
            records.push(self.decode(line, fields)?);
            Ok(ControlFlow::Continue(()))
        })?;
        Ok(records)
    }
}
