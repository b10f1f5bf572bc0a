//! Helpers shared by the integration tests of the workspace crates.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use tempfile::TempDir;

/// A cloneable in-memory writer.
///
/// Clones share one buffer, so a test can hand one clone to a handler and
/// read the output through another.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bytes written so far as text.
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Returns the written text split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A value whose `Display` implementation panics.
///
/// Passing it as a message argument proves the message was never formatted.
#[derive(Clone, Copy, Debug, Default)]
pub struct Exploding;

impl fmt::Display for Exploding {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        panic!("message was formatted although its level is disabled");
    }
}

/// A temporary directory holding a log file path.
///
/// The directory is removed when the value is dropped.
#[derive(Debug)]
pub struct TempLog {
    dir: TempDir,
}

impl TempLog {
    /// Creates a fresh temporary directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Path of the log file inside the directory. The file is not created.
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("test.log")
    }

    /// Reads the log file, returning an empty string if it does not exist.
    pub fn read(&self) -> String {
        std::fs::read_to_string(self.path()).unwrap_or_default()
    }
}
