//! Log - CSV-backed append-only event log
//!
//! The log is a single UTF-8 CSV file with a fixed three-column header.
//! Rows are only ever appended; nothing here rewrites or reorders them.
//!
//! Every access to one log goes through the mutex owned by its [`EventLog`]
//! handle, so appends never interleave and a read never observes a half
//! written row. Clone the handle to share it; two handles created
//! separately for the same path do not coordinate with each other.

use crate::error::{Error, Result};
use crate::record::LogRecord;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Canonical column names, in file order
pub const HEADER: [&str; 3] = ["datetime", "ip_address", "user_agent"];

/// Handle to an append-only CSV event log
#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl EventLog {
    /// Create a handle for the log at `path`; the file is created lazily
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file has been created
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append one record, writing the header first if the file is new
    #[instrument(skip(self, record), fields(path = %self.path.display()))]
    pub async fn append(&self, record: LogRecord) -> Result<()> {
        self.with_file(move |path| append_row(path, &record)).await
    }

    /// Read every record after the header, in file order
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn read_all(&self) -> Result<Vec<LogRecord>> {
        self.with_file(read_rows).await
    }

    /// Append one record and read the whole log back without releasing the lock
    #[instrument(skip(self, record), fields(path = %self.path.display()))]
    pub async fn append_and_read(&self, record: LogRecord) -> Result<Vec<LogRecord>> {
        self.with_file(move |path| {
            append_row(path, &record)?;
            read_rows(path)
        })
        .await
    }

    /// Run blocking file work on the blocking pool while holding the log lock.
    ///
    /// The guard moves into the blocking task so it stays held even if the
    /// calling future is dropped mid-operation.
    async fn with_file<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Path) -> Result<T> + Send + 'static,
    {
        let guard = Arc::clone(&self.lock).lock_owned().await;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || {
            let _guard = guard;
            op(&path)
        })
        .await
        .map_err(|e| Error::Storage(format!("log task failed: {e}")))?
    }
}

fn append_row(path: &Path, record: &LogRecord) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let needs_header = file.metadata()?.len() == 0;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    if needs_header {
        debug!("Writing log header");
        writer.write_record(HEADER)?;
    }
    writer.write_record([&record.timestamp, &record.client_id, &record.agent])?;
    writer.flush()?;

    Ok(())
}

fn read_rows(path: &Path) -> Result<Vec<LogRecord>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    // Created but never written (e.g. interrupted first append)
    if file.metadata()?.len() == 0 {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = reader.headers()?;
    if headers.iter().ne(HEADER.iter().copied()) {
        return Err(Error::Storage(format!(
            "unexpected log header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let records = reader
        .deserialize::<LogRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    debug!(rows = records.len(), "Read event log");
    Ok(records)
}
