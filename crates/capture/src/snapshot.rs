// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured output snapshot.

use serde::{Deserialize, Serialize};

/// Owned record of both captured streams.
///
/// Contents are decoded lossily so a snapshot can always be rendered or
/// serialized for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedOutput {
    /// Everything captured from stdout.
    pub stdout: String,
    /// Everything captured from stderr.
    pub stderr: String,
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
