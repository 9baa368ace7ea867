//! Crate-level error types.
//!
//! [`VantageError`] covers failures that stop an operation outright
//! (unreadable options, a missing marker directory). [`LoadError`] and
//! [`ResolutionError`] are recoverable: the store skips the offending record
//! and the controller ignores the offending request.

use std::fmt;
use std::path::PathBuf;

/// Errors produced by the vantage crate.
#[derive(Debug)]
pub enum VantageError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but describe an unusable envelope, fog or timing.
    InvalidOptions(String),
    /// The marker directory could not be listed.
    MarkerDirectory {
        /// Directory that was requested.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::MarkerDirectory { path, source } => {
                write!(
                    f,
                    "cannot read marker directory {}: {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::MarkerDirectory { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Why a single marker record was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// A camera position was given without a look-at target.
    MissingTarget,
    /// Neither a `(camera, target)` pair nor a subject point was given.
    MissingPlacement,
    /// A coordinate was not a finite number.
    InvalidCoordinate {
        /// Field that failed, e.g. `camera.y`.
        field: String,
        /// Raw value as it appeared in the record.
        value: String,
    },
    /// Another record with the same id was already loaded.
    DuplicateId,
    /// The record file could not be read.
    Unreadable(String),
    /// The record was not valid JSON for a marker.
    Malformed(String),
}

/// A marker record that was skipped during load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    /// Marker id (file stem when loading from a directory).
    pub marker: String,
    /// Failure reason.
    pub kind: LoadErrorKind,
}

impl LoadError {
    pub(crate) fn new(marker: impl Into<String>, kind: LoadErrorKind) -> Self {
        Self {
            marker: marker.into(),
            kind,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = &self.marker;
        match &self.kind {
            LoadErrorKind::MissingTarget => {
                write!(f, "marker {marker}: camera given without a target")
            }
            LoadErrorKind::MissingPlacement => write!(
                f,
                "marker {marker}: needs either camera and target, or subject"
            ),
            LoadErrorKind::InvalidCoordinate { field, value } => {
                write!(f, "marker {marker}: {field} = {value:?} is not a number")
            }
            LoadErrorKind::DuplicateId => {
                write!(f, "marker {marker}: duplicate id, keeping the first")
            }
            LoadErrorKind::Unreadable(msg) => {
                write!(f, "marker {marker}: unreadable: {msg}")
            }
            LoadErrorKind::Malformed(msg) => {
                write!(f, "marker {marker}: malformed record: {msg}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Why a navigation request could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionErrorKind {
    /// No camera marker matches the requested name.
    UnknownTarget,
    /// The matching camera marker only carries a subject point.
    NoPlacement,
    /// Neither the camera marker nor any matching subject marker has a
    /// subject point.
    MissingSubject,
}

/// A navigation request that resolved to nothing. The camera stays put.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionError {
    /// Requested district or page name.
    pub target: String,
    /// Failure reason.
    pub kind: ResolutionErrorKind,
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ResolutionErrorKind::UnknownTarget => {
                write!(f, "no camera marker found for {:?}", self.target)
            }
            ResolutionErrorKind::NoPlacement => write!(
                f,
                "camera marker for {:?} has no camera placement",
                self.target
            ),
            ResolutionErrorKind::MissingSubject => {
                write!(f, "no subject marker found for {:?}", self.target)
            }
        }
    }
}

impl std::error::Error for ResolutionError {}
