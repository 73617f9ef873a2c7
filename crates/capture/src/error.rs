// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture error types.

use nix::errno::Errno;
use thiserror::Error;

/// Errors raised while installing, reading, or restoring a capture.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Re-pointing a descriptor failed.
    #[error("failed to redirect descriptor: {0}")]
    Redirect(#[from] Errno),

    /// Reading or flushing through the capture failed.
    #[error("capture i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Captured bytes are not valid UTF-8.
    #[error("captured output is not valid UTF-8: {0}")]
    NonUtf8(#[from] std::string::FromUtf8Error),
}
