use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::error::AppendFailure;
use crate::record::TelemetryRecord;

/// Append-only destination for telemetry rows.
///
/// An append either lands one complete row at the end of the store or fails
/// leaving the store as it was. Existing rows are never read or changed.
pub trait RowSink: Send + Sync {
    fn append(&self, record: &TelemetryRecord) -> Result<(), AppendFailure>;
}

/// CSV file standing in for the spreadsheet. The header row is provisioned
/// out of band; this type only ever appends data rows.
pub struct CsvSheet {
    path: PathBuf,
    // Serializes appends so rollback never truncates another writer's row.
    lock: Mutex<()>,
}

impl CsvSheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSink for CsvSheet {
    fn append(&self, record: &TelemetryRecord) -> Result<(), AppendFailure> {
        let line = encode_row(record)?;
        let _guard = self
            .lock
            .lock()
            .map_err(|_| AppendFailure::new("sheet lock poisoned"))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let committed_len = file.metadata()?.len();

        commit_row(&mut file, &line, committed_len).inspect_err(|err| {
            tracing::debug!(path = %self.path.display(), error = %err, "sheet append failed");
        })
    }
}

/// The parts of an open sheet file an append touches.
trait RowFile: Write {
    fn sync(&mut self) -> io::Result<()>;
    fn truncate(&mut self, len: u64) -> io::Result<()>;
}

impl RowFile for File {
    fn sync(&mut self) -> io::Result<()> {
        self.sync_data()
    }

    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

/// Writes and syncs `line`; on failure cuts the file back to `committed_len`.
fn commit_row<F: RowFile>(
    file: &mut F,
    line: &[u8],
    committed_len: u64,
) -> Result<(), AppendFailure> {
    let written = file.write_all(line).and_then(|()| file.sync());
    if let Err(err) = written {
        if let Err(rollback) = file.truncate(committed_len) {
            tracing::error!(error = %rollback, "sheet rollback failed");
            return Err(AppendFailure::new(format!(
                "sheet write failed: {err}; rollback failed: {rollback}"
            )));
        }
        return Err(err.into());
    }
    Ok(())
}

fn encode_row(record: &TelemetryRecord) -> Result<Vec<u8>, AppendFailure> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(record.row())?;
    writer
        .into_inner()
        .map_err(|err| AppendFailure::new(format!("row encoding failed: {}", err.error())))
}

/// Rows held in memory. Used for dry runs and tests.
#[derive(Default)]
pub struct MemorySheet {
    rows: Mutex<Vec<[String; 7]>>,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<[String; 7]> {
        match self.rows.lock() {
            Ok(rows) => rows.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl RowSink for MemorySheet {
    fn append(&self, record: &TelemetryRecord) -> Result<(), AppendFailure> {
        self.rows
            .lock()
            .map_err(|_| AppendFailure::new("sheet lock poisoned"))?
            .push(record.row());
        Ok(())
    }
}
