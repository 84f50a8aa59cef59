// Copyright 2026 the Pathloop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use alloc::string::String;

/// A `Result` with [`Error`] as the default error type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything that can go wrong between the document text and the polyline.
///
/// Offsets are byte offsets into the text being scanned: the whole document
/// for markup errors, the `d` attribute value for path errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The markup ended in the middle of a tag or attribute.
    #[error("malformed markup: expected `{expected}` before end of input (scan began at byte {offset})")]
    MalformedMarkup {
        /// Where the unterminated construct starts.
        offset: usize,
        /// The character that was never found.
        expected: char,
    },

    /// A required tag or attribute does not appear in the document.
    #[error("{0} not found")]
    NotFound(String),

    /// The path data does not follow the path grammar.
    #[error("malformed path data at byte {offset}: {reason}")]
    MalformedPath {
        /// Where the problem was detected.
        offset: usize,
        /// What was wrong.
        reason: &'static str,
    },

    /// The path data uses a command letter this crate does not implement.
    #[error("unsupported path command `{command}` at byte {offset}")]
    UnsupportedCommand {
        /// The command letter.
        command: char,
        /// Where the command appears.
        offset: usize,
    },

    /// The contour does not return to its starting point.
    #[error("path is not closed: starts at {start:?} but ends at {end:?}")]
    UnclosedPath {
        /// The moveto point.
        start: (f64, f64),
        /// The end point of the last segment.
        end: (f64, f64),
    },

    /// The source text could not be read.
    #[cfg(feature = "std")]
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn messages() {
        let err = Error::MalformedPath {
            offset: 3,
            reason: "expected a number",
        };
        assert_eq!(
            err.to_string(),
            "malformed path data at byte 3: expected a number"
        );
        let err = Error::UnsupportedCommand {
            command: 'A',
            offset: 7,
        };
        assert_eq!(err.to_string(), "unsupported path command `A` at byte 7");
        let err = Error::NotFound("attribute `d`".into());
        assert_eq!(err.to_string(), "attribute `d` not found");
    }

    #[cfg(feature = "std")]
    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error as _;
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.source().unwrap().to_string(), "gone");
    }
}
