// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typegap Encode: deterministic value-to-visual encoding scales.
//!
//! This crate provides the numeric and color mappers that turn raw data
//! magnitudes into renderable quantities: pixel offsets, radii, font sizes,
//! and colors. It is the mathematical layer of the Typegap stack; it knows
//! nothing about datasets, documents, or drawing APIs.
//!
//! # Scales
//!
//! A scale maps a *domain* (data values) onto a *range* (visual values) and
//! is a pure function of its configuration and input:
//!
//! - [`LinearScale`] - affine interpolation, extrapolating outside the
//!   domain unless clamping is requested via [`LinearScale::clamped`].
//! - [`LogScale`] - the same contract in log space, for quantities spanning
//!   several orders of magnitude. Construction fails with
//!   [`InvalidDomainError`] when a domain bound is not strictly positive.
//! - [`SqrtScale`] - area-proportional sizing: doubling the input does not
//!   double the rendered linear size, which keeps circle areas honest.
//! - [`SequentialColor`] - a piecewise-linear color ramp over descending
//!   anchor stops, blending [`peniko::Color`] channels independently.
//!
//! Every scale is total over its accepted inputs: construction rejects the
//! configurations that would make evaluation produce NaN, and evaluation
//! never returns NaN for finite input.
//!
//! # Proportional sizing
//!
//! [`ProportionalSizer`] implements the deliberately *uncompressed* size
//! mapping used by "eye test" style visualizations:
//!
//! ```text
//! rendered = max(min_size, round(value / reference * max_size))
//! ```
//!
//! Rejecting log/sqrt compression here is a feature, not an oversight: the
//! point is to make magnitude disparities viscerally visible, accepting that
//! small values collapse onto the floor.
//!
//! # Examples
//!
//! ```rust
//! use typegap_encode::{LinearScale, ProportionalSizer};
//!
//! let x = LinearScale::new(1980.0..2020.0, 0.0..1060.0).unwrap();
//! assert_eq!(x.scale(2000.0), 530.0);
//! assert_eq!(x.invert(530.0), Some(2000.0));
//!
//! let sizer = ProportionalSizer::new(1900.0, 1.0, 100.0).unwrap();
//! assert_eq!(sizer.size(1900.0), 100.0);
//! assert_eq!(sizer.size(0.0), 1.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod color;
mod error;
mod linear;
mod log;
mod math;
mod sizer;
mod sqrt;

pub use color::{ColorStop, SequentialColor};
pub use error::{EmptyRampError, InvalidDomainError, InvalidDomainKind, InvalidReferenceError};
pub use linear::LinearScale;
pub use log::LogScale;
pub use sizer::ProportionalSizer;
pub use sqrt::SqrtScale;
