// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Equality verification for captured streams.

use crate::capture::StdioCapture;
use crate::error::CaptureError;
use similar::TextDiff;
use std::fmt;
use thiserror::Error;

/// Expected vs. actual content of a failed equality check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Which stream was checked.
    pub stream: &'static str,
    /// The literal the check expected.
    pub expected: String,
    /// What the capture actually held.
    pub actual: String,
}

impl Mismatch {
    /// Unified diff of expected against actual.
    pub fn diff(&self) -> String {
        TextDiff::from_lines(self.expected.as_str(), self.actual.as_str())
            .unified_diff()
            .header("expected", "actual")
            .to_string()
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "captured {} does not match\nexpected: {:?}\nactual:   {:?}\n{}",
            self.stream,
            self.expected,
            self.actual,
            self.diff()
        )
    }
}

/// Why a stream assertion did not hold.
#[derive(Debug, Error)]
pub enum AssertFailure {
    /// The capture itself could not be read.
    #[error(transparent)]
    Capture(#[from] CaptureError),

    /// The captured content differs from the expected literal.
    #[error("{0}")]
    Mismatch(Mismatch),
}

/// Check captured stdout against an expected literal, byte-for-byte.
pub fn check_stdout(capture: &StdioCapture, expected: &str) -> Result<(), AssertFailure> {
    check("stdout", capture.stdout_utf8()?, expected)
}

/// Check captured stderr against an expected literal, byte-for-byte.
pub fn check_stderr(capture: &StdioCapture, expected: &str) -> Result<(), AssertFailure> {
    check("stderr", capture.stderr_utf8()?, expected)
}

fn check(stream: &'static str, actual: String, expected: &str) -> Result<(), AssertFailure> {
    if actual == expected {
        Ok(())
    } else {
        Err(AssertFailure::Mismatch(Mismatch {
            stream,
            expected: expected.to_string(),
            actual,
        }))
    }
}

/// Assert that captured stdout equals the expected literal exactly.
///
/// Panics with the rendered mismatch (expected, actual, unified diff)
/// when the contents differ in any byte.
#[macro_export]
macro_rules! assert_stdout_eq {
    ($capture:expr, $expected:expr $(,)?) => {
        match $crate::check_stdout(&$capture, $expected) {
            Ok(()) => {}
            Err(failure) => panic!("{}", failure),
        }
    };
}

/// Assert that captured stderr equals the expected literal exactly.
#[macro_export]
macro_rules! assert_stderr_eq {
    ($capture:expr, $expected:expr $(,)?) => {
        match $crate::check_stderr(&$capture, $expected) {
            Ok(()) => {}
            Err(failure) => panic!("{}", failure),
        }
    };
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
