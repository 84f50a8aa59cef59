// Copyright 2026 the Pathloop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-document entry points.
//!
//! These glue the markup scanner, the path parser and the tessellator
//! together, and read files. They are what a language binding would wrap:
//! a file name and a sample count in, a flat coordinate buffer out.

use std::path::Path as FsPath;

use crate::common::Scalar;
use crate::{find_path_data, parse_path, tessellate, Path, Result};

/// The floating point precision of a [`Samples`] buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    /// 32-bit `f32` coordinates.
    F32,
    /// 64-bit `f64` coordinates.
    #[default]
    F64,
}

/// An interleaved `x0, y0, x1, y1, …` coordinate buffer.
#[derive(Clone, Debug, PartialEq)]
pub enum Samples {
    /// Single precision coordinates.
    F32(Vec<f32>),
    /// Double precision coordinates.
    F64(Vec<f64>),
}

impl Samples {
    /// The precision of the buffer.
    pub fn precision(&self) -> Precision {
        match self {
            Samples::F32(_) => Precision::F32,
            Samples::F64(_) => Precision::F64,
        }
    }

    /// The number of points, half the number of coordinates.
    pub fn point_count(&self) -> usize {
        match self {
            Samples::F32(v) => v.len() / 2,
            Samples::F64(v) => v.len() / 2,
        }
    }
}

/// Parse the contour of a document.
///
/// # Errors
///
/// Any markup or path error; see [`find_path_data`] and [`parse_path`].
pub fn parse_document<T: Scalar>(text: &str) -> Result<Path<T>> {
    parse_path(find_path_data(text)?)
}

/// Read a file and parse its contour.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read, and
/// otherwise fails like [`parse_document`].
pub fn load_path<T: Scalar>(file: impl AsRef<FsPath>) -> Result<Path<T>> {
    let file = file.as_ref();
    let text = std::fs::read_to_string(file)?;
    log::debug!("read {} bytes from {}", text.len(), file.display());
    parse_document(&text)
}

/// Tessellate the text of a document into a flat coordinate buffer.
///
/// # Errors
///
/// Fails like [`parse_document`].
pub fn tessellate_document<T: Scalar>(text: &str, sample_count: usize) -> Result<Vec<T>> {
    let path = parse_document(text)?;
    Ok(crate::flatten(&tessellate(&path, sample_count)))
}

/// Read a file and tessellate its contour at the requested precision.
///
/// The buffer holds about `sample_count` points; see
/// [`tessellate_with`](crate::tessellate_with) for exactly how many.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read, and
/// otherwise fails like [`parse_document`].
pub fn tessellate_file(
    file: impl AsRef<FsPath>,
    sample_count: usize,
    precision: Precision,
) -> Result<Samples> {
    let file = file.as_ref();
    let text = std::fs::read_to_string(file)?;
    log::debug!("read {} bytes from {}", text.len(), file.display());
    Ok(match precision {
        Precision::F32 => Samples::F32(tessellate_document(&text, sample_count)?),
        Precision::F64 => Samples::F64(tessellate_document(&text, sample_count)?),
    })
}
