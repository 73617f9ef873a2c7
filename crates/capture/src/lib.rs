// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Standard-stream redirection and capture for test assertions.
//!
//! The test harness's own capture shim only intercepts the `print!`
//! family of macros. This crate redirects the process-level descriptors,
//! so writes issued against the real stdout/stderr handles are
//! observable from the test that made them.
//!
//! ```
//! use std::io::Write;
//!
//! let capture = siphon_capture::StdioCapture::redirect()?;
//! std::io::stdout().write_all(b"test\n")?;
//! std::io::stdout().flush()?;
//! siphon_capture::assert_stdout_eq!(capture, "test\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod capture;
mod error;
mod snapshot;
mod stream;
mod verify;

pub use capture::StdioCapture;
pub use error::CaptureError;
pub use snapshot::CapturedOutput;
pub use stream::CaptureStream;
pub use verify::{check_stderr, check_stdout, AssertFailure, Mismatch};
