use log::{debug, error};
use std::{collections::BTreeSet, fs::{self, OpenOptions}, io::{self, Write}, path::{Path, PathBuf}};

use crate::error::WriteError;
use crate::types::*;

/// Where rendered payloads end up. Every call is one complete write.
pub trait LineSink {
    fn reset(&mut self, path: &Path, policy: TruncatePolicy) -> io::Result<()>;
    fn append(&mut self, path: &Path, data: &str) -> io::Result<()>;
}

/// Plain-text files on the local filesystem.
#[derive(Default)]
pub struct FileSink;

impl LineSink for FileSink {
    fn reset(&mut self, path: &Path, policy: TruncatePolicy) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true);
        match policy {
            TruncatePolicy::Truncate => options.truncate(true),
            TruncatePolicy::Append => options.append(true),
        };
        options.open(path).map(|_| ())
    }

    fn append(&mut self, path: &Path, data: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(data.as_bytes())
    }
}

pub struct OutputRouter<S: LineSink> {
    config: OutputConfig,
    sink: S,
    written: BTreeSet<OutputKind>,
    failures: u64,
}

impl<S: LineSink> OutputRouter<S> {
    pub fn new(config: OutputConfig, sink: S) -> Self {
        Self { config, sink, written: BTreeSet::new(), failures: 0 }
    }

    /// Prepares the file of every selected kind before the first wallet.
    /// Unselected files are left alone.
    pub fn initialize(&mut self, selection: &OutputSelection) {
        for &kind in selection {
            let path = self.config.path_for(kind);
            if let Err(e) = self.sink.reset(&path, self.config.policy) {
                self.record_failure(WriteError::new(path, e));
            }
        }
    }

    pub fn try_emit(&mut self, record: &WalletRecord, kind: OutputKind) -> Result<(), WriteError> {
        let path = self.config.path_for(kind);
        let payload = record.render(kind);
        self.sink.append(&path, &payload).map_err(|e| WriteError::new(path, e))?;
        self.written.insert(kind);
        Ok(())
    }

    /// Like [`Self::try_emit`], but a failure is logged and the run goes on.
    pub fn emit(&mut self, record: &WalletRecord, kind: OutputKind) {
        match self.try_emit(record, kind) {
            Ok(()) => debug!("wallet {} written to {}", record.index, kind.file_name()),
            Err(e) => self.record_failure(e),
        }
    }

    pub fn files_written(&self) -> Vec<PathBuf> {
        self.written.iter().map(|&kind| self.config.path_for(kind)).collect()
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }

    #[cfg(test)]
    pub(crate) fn into_sink(self) -> S {
        self.sink
    }

    fn record_failure(&mut self, err: WriteError) {
        self.failures += 1;
        error!("{}", err);
    }
}

pub fn ensure_out_dir(config: &OutputConfig) -> Result<(), Box<dyn std::error::Error>> {
    let dir = config.dir();
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| format!("Could not create output directory {}: {}", dir.display(), e))?;
    }
    Ok(())
}
