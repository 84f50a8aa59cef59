// Copyright 2026 the Pathloop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pathloop turns the outline of a vector drawing into an evenly sampled
//! polyline.
//!
//! The pipeline has three stages:
//!
//! - [`find_path_data`] scans a markup document for the `d` attribute of
//!   the first `path` inside a `g` inside the root `svg` tag.
//! - [`parse_path`] turns that path data into a [`Path`]: one closed contour
//!   of [`Line`], [`QuadBez`] and [`CubicBez`] segments, in absolute
//!   coordinates.
//! - [`tessellate`] estimates the arc length of every segment and resamples
//!   the contour so that samples are spread in proportion to length.
//!
//! All geometry is generic over the coordinate type through [`Scalar`],
//! which is implemented for `f32` and `f64`.
//!
//! ```
//! use pathloop::{find_path_data, parse_path, tessellate, Path, Vec2};
//!
//! let doc = r#"<svg><g><path d="M0,0 L10,0 L10,10 L0,10 Z"/></g></svg>"#;
//! let path: Path<f64> = parse_path(find_path_data(doc)?)?;
//! let points = tessellate(&path, 4);
//! assert_eq!(points.len(), 8);
//! assert_eq!(points[1], Vec2::new(5.0, 0.0));
//! # Ok::<(), pathloop::Error>(())
//! ```
//!
//! With the `std` feature, the [`document`] module also reads files and
//! produces flat coordinate buffers at a chosen precision.
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. However, note that the `libm` crate is not as
//! efficient as the standard library, and that this crate still uses the
//! `alloc` crate regardless.
//!
//! The `mint` feature provides conversions between [`Vec2`] and the `mint`
//! point and vector types. The `serde` feature derives serialization for the
//! geometry types and options.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("pathloop requires either the `std` or `libm` feature");

extern crate alloc;

pub mod bezier;
pub mod common;
mod cubicbez;
#[cfg(feature = "std")]
pub mod document;
mod error;
mod line;
pub mod markup;
mod param_curve;
mod path;
mod quadbez;
mod segment;
mod svg;
pub mod tessellate;
mod vec2;

pub use crate::common::Scalar;
pub use crate::cubicbez::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::markup::find_path_data;
pub use crate::param_curve::*;
pub use crate::path::*;
pub use crate::quadbez::*;
pub use crate::segment::*;
pub use crate::svg::*;
pub use crate::tessellate::{flatten, tessellate, tessellate_with, TessellateOpts, Tessellation};
pub use crate::vec2::*;
