// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process stdout/stderr capture.

use crate::error::CaptureError;
use crate::snapshot::CapturedOutput;
use crate::stream::CaptureStream;
use parking_lot::{Mutex, MutexGuard};
use std::io::{self, Write};

/// Serializes redirection of the process-wide standard streams.
static REDIRECT_LOCK: Mutex<()> = Mutex::new(());

/// Captures everything written to the process's stdout and stderr.
///
/// At most one capture is live at a time; [`StdioCapture::redirect`]
/// blocks until any earlier guard has dropped. Dropping the guard
/// restores both streams.
pub struct StdioCapture {
    stdout: CaptureStream,
    stderr: CaptureStream,
    _lock: MutexGuard<'static, ()>,
}

impl StdioCapture {
    /// Redirect stdout and stderr into capture buffers.
    pub fn redirect() -> Result<Self, CaptureError> {
        let lock = REDIRECT_LOCK.lock();
        // Anything still buffered in the handle belongs to the
        // pre-capture stream.
        io::stdout().flush()?;
        let stdout = CaptureStream::divert(&io::stdout())?;
        let stderr = CaptureStream::divert(&io::stderr())?;
        Ok(Self {
            stdout,
            stderr,
            _lock: lock,
        })
    }

    /// Captured stdout bytes so far.
    pub fn stdout_bytes(&self) -> Result<Vec<u8>, CaptureError> {
        self.stdout.contents()
    }

    /// Captured stderr bytes so far.
    pub fn stderr_bytes(&self) -> Result<Vec<u8>, CaptureError> {
        self.stderr.contents()
    }

    /// Captured stdout decoded as UTF-8.
    pub fn stdout_utf8(&self) -> Result<String, CaptureError> {
        self.stdout.contents_utf8()
    }

    /// Captured stderr decoded as UTF-8.
    pub fn stderr_utf8(&self) -> Result<String, CaptureError> {
        self.stderr.contents_utf8()
    }

    /// Snapshot both streams without ending the capture.
    pub fn snapshot(&self) -> Result<CapturedOutput, CaptureError> {
        Ok(CapturedOutput {
            stdout: String::from_utf8_lossy(&self.stdout.contents()?).into_owned(),
            stderr: String::from_utf8_lossy(&self.stderr.contents()?).into_owned(),
        })
    }

    /// Flush, take the final snapshot, and restore both streams.
    pub fn finish(self) -> Result<CapturedOutput, CaptureError> {
        io::stdout().flush()?;
        self.snapshot()
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
