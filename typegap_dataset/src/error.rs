// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fatal decode errors.

use core::fmt;

/// Error returned when the dataset payload is structurally unusable.
///
/// This fires for JSON that does not parse, or that lacks the required
/// top-level `scripts`/`fonts` keys. It is fatal for the whole build and is
/// surfaced before any visualization gets data; per-record problems never
/// raise it (they degrade to documented defaults instead).
#[derive(Debug)]
pub struct MalformedDatasetError(serde_json::Error);

impl MalformedDatasetError {
    pub(crate) fn new(source: serde_json::Error) -> Self {
        Self(source)
    }
}

impl fmt::Display for MalformedDatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed dataset: {}", self.0)
    }
}

impl core::error::Error for MalformedDatasetError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.0)
    }
}
