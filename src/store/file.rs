//! Newline-delimited flat-file ledger.
//!
//! Every append writes exactly one line, so a process killed mid-session
//! never leaves a half-rewritten file behind. Blank lines (for example from
//! hand edits) are skipped on read and never written.

use super::{LedgerStore, check_record};
use crate::errors::AppResult;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug)]
pub struct FileLedgerStore {
    path: PathBuf,
}

impl FileLedgerStore {
    /// Open the ledger at `path`, creating it (and its directory) empty if absent.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if !path.exists() {
            File::create(&path)?;
            info!(path = %path.display(), "created empty ledger");
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the file is non-empty and its last byte is not a newline.
    fn needs_separator(file: &mut File) -> AppResult<bool> {
        let len = file.metadata()?.len();
        if len == 0 {
            return Ok(false);
        }
        file.seek(SeekFrom::Start(len - 1))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)?;
        Ok(last[0] != b'\n')
    }
}

impl LedgerStore for FileLedgerStore {
    fn append(&mut self, record: &str) -> AppResult<()> {
        check_record(record)?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)?;

        let mut line = String::with_capacity(record.len() + 2);
        if Self::needs_separator(&mut file)? {
            line.push('\n');
        }
        line.push_str(record);
        line.push('\n');

        file.write_all(line.as_bytes())?;
        file.flush()?;

        debug!(path = %self.path.display(), "appended ledger record");
        Ok(())
    }

    fn read_all(&self) -> AppResult<Vec<String>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(content
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}
