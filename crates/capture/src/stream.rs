// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-descriptor redirection guard.

use crate::error::CaptureError;
use nix::unistd::dup2;
use std::fs::File;
use std::os::fd::{AsFd, AsRawFd, OwnedFd, RawFd};
use std::os::unix::fs::FileExt;

/// Diverts one file descriptor into a capture buffer.
///
/// While the guard is alive, every write issued against the target
/// descriptor lands in the buffer instead of the original destination.
/// Dropping the guard re-points the descriptor at its original
/// destination.
pub struct CaptureStream {
    backing: File,
    saved: OwnedFd,
    target: RawFd,
}

impl CaptureStream {
    /// Divert `target` into a fresh capture buffer.
    ///
    /// Whatever owns `target` must stay alive at least as long as the
    /// guard, so that restoration on drop re-points a valid descriptor.
    pub fn divert<F: AsFd>(target: &F) -> Result<Self, CaptureError> {
        let fd = target.as_fd();
        let saved = fd.try_clone_to_owned()?;
        let backing = tempfile::tempfile()?;
        dup2(backing.as_raw_fd(), fd.as_raw_fd())?;
        Ok(Self {
            backing,
            saved,
            target: fd.as_raw_fd(),
        })
    }

    /// Everything written to the diverted descriptor so far.
    ///
    /// A byte is observable once the writer has flushed its own userspace
    /// buffering down to the descriptor; bytes still held in a userspace
    /// buffer are not.
    pub fn contents(&self) -> Result<Vec<u8>, CaptureError> {
        let len = self.backing.metadata()?.len();
        let mut buf = vec![0u8; len as usize];
        self.backing.read_exact_at(&mut buf, 0)?;
        Ok(buf)
    }

    /// Captured bytes decoded as UTF-8.
    pub fn contents_utf8(&self) -> Result<String, CaptureError> {
        Ok(String::from_utf8(self.contents()?)?)
    }
}

impl Drop for CaptureStream {
    fn drop(&mut self) {
        let _ = dup2(self.saved.as_raw_fd(), self.target);
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
