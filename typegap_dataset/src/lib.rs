// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typegap Dataset: typed records and lookups over the master dataset.
//!
//! The master dataset is a JSON document describing writing scripts, the
//! fonts that support them, and precomputed inequality metrics. This crate
//! decodes it **once**, at the boundary, into strongly typed records with
//! documented defaults, so downstream transforms never re-check for missing
//! fields.
//!
//! # Decode policy
//!
//! - The top-level `scripts` and `fonts` keys are required; a payload
//!   without them fails with [`MalformedDatasetError`] before anything is
//!   indexed.
//! - Everything below that degrades gracefully: missing per-record fields
//!   resolve to documented defaults (see [`DecodeOptions`]), unknown extra
//!   fields are ignored, and font records referencing unknown script codes
//!   simply lose those references rather than failing the build.
//! - Scripts supported by no font are excluded from the index; every
//!   [`ScriptRecord`] you can obtain has `font_count > 0`.
//!
//! # Lookups
//!
//! [`DatasetIndex`] offers O(1) script lookup by code and a stable,
//! input-ordered font filter per script:
//!
//! ```rust
//! use typegap_dataset::DatasetIndex;
//!
//! let index = DatasetIndex::from_json(r#"{
//!     "scripts": {
//!         "Latn": { "name": "Latin", "font_count": 2, "speakers": 5000000000 },
//!         "Cher": { "name": "Cherokee", "font_count": 1 }
//!     },
//!     "fonts": [
//!         { "family": "Inter", "category": "sans-serif", "scripts": ["Latn"] },
//!         { "family": "Noto Sans Cherokee", "category": "sans-serif",
//!           "scripts": ["Cher", "Latn"] }
//!     ]
//! }"#)?;
//!
//! assert_eq!(index.script("Latn").unwrap().name, "Latin");
//! assert!(index.script("Xxxx").is_none());
//! assert_eq!(index.fonts_for_script("Cher").count(), 1);
//! # Ok::<(), typegap_dataset::MalformedDatasetError>(())
//! ```
//!
//! The index is a read-only snapshot; a fresh dataset fetch produces a
//! fresh, independent index. There is no mutation or incremental update.

mod coverage;
mod error;
mod index;
mod raw;
mod records;

pub use coverage::{STANDARD_WEIGHTS, WeightCell, WeightCoverage};
pub use error::MalformedDatasetError;
pub use index::{DatasetIndex, DecodeOptions};
pub use raw::{
    RawDataset, RawFont, RawInequalityMetric, RawScript, RawTimeline, RawTimelineEntry, RawWeight,
    RawYearRef,
};
pub use records::{FontCategory, FontRecord, ScriptRecord};
