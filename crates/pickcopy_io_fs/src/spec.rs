//! Copy specification models and top-level error types.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Progress notification emitted while a copy run is executing.
///
/// Events are delivered in list order, before the run returns, so a caller
/// can surface them even when a later entry aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumCopyEvent {
    /// Pre-existing destination root was removed.
    DestinationReset {
        /// Removed destination root.
        path: PathBuf,
    },
    /// Listed source file does not exist and was skipped.
    Missing {
        /// Unresolved source path.
        path_src: PathBuf,
    },
    /// File was copied.
    Copied {
        /// Source file path.
        path_src: PathBuf,
        /// Destination file path.
        path_dst: PathBuf,
    },
    /// Dry-run only: file would have been copied.
    Planned {
        /// Source file path.
        path_src: PathBuf,
        /// Destination file path.
        path_dst: PathBuf,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for `copy_listed_with`.
#[derive(Debug, Clone)]
pub struct SpecCopyOptions {
    /// Remove the destination root before copying.
    pub if_reset_destination: bool,
    /// Do not mutate filesystem; record what would happen.
    pub if_dry_run: bool,
}

impl Default for SpecCopyOptions {
    fn default() -> Self {
        Self {
            if_reset_destination: true,
            if_dry_run: false,
        }
    }
}

/// One validated include-list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecIncludePath {
    /// Platform path relative to source/destination roots.
    pub path_rel: PathBuf,
}

impl SpecIncludePath {
    /// Validate one forward-slash relative entry.
    ///
    /// Empty segments and `.` segments are dropped. Absolute entries and
    /// entries containing `..` are rejected.
    pub fn parse(raw: &str) -> Result<Self, CopyListError> {
        let invalid = |reason: &str| CopyListError::InvalidIncludePath {
            raw: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.trim().is_empty() {
            return Err(invalid("entry is empty"));
        }
        if raw.starts_with('/') || Path::new(raw).has_root() {
            return Err(invalid("entry must be relative"));
        }

        let mut path_rel = PathBuf::new();
        for segment in raw.split('/') {
            if segment.is_empty() || segment == "." {
                continue;
            }
            if segment == ".." {
                return Err(invalid("entry must not contain `..`"));
            }
            // Windows prefixes (`C:`) only show up when parsed as a path.
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(_)), None) => path_rel.push(segment),
                _ => return Err(invalid("entry must be relative")),
            }
        }

        if path_rel.as_os_str().is_empty() {
            return Err(invalid("entry does not name a file"));
        }
        Ok(Self { path_rel })
    }

    /// Validate every entry, keeping order.
    pub fn parse_all<S: AsRef<str>>(l_raw: &[S]) -> Result<Vec<Self>, CopyListError> {
        l_raw.iter().map(|raw| Self::parse(raw.as_ref())).collect()
    }
}

/// Fatal errors. Any of these aborts the run.
#[derive(Debug)]
pub enum CopyListError {
    /// Include entry is empty, absolute, or escapes the roots.
    InvalidIncludePath {
        /// Entry as written.
        raw: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Resetting the destination would delete the source.
    SourceInsideDestination {
        /// Normalized source root.
        source: PathBuf,
        /// Normalized destination root.
        destination: PathBuf,
    },
    /// Destination root could not be removed.
    DestinationResetFailed {
        /// Destination root.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Parent directory of a destination file could not be created.
    CreateDirectoryFailed {
        /// Directory that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// File copy (or metadata transfer) failed.
    CopyFailed {
        /// Source file.
        path_src: PathBuf,
        /// Destination file.
        path_dst: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Source and destination resolve to the same file.
    SameFile {
        /// Source file.
        path: PathBuf,
    },
    /// Include manifest could not be read.
    ManifestReadFailed {
        /// Manifest path.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
}

impl fmt::Display for CopyListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIncludePath { raw, reason } => {
                write!(f, "Invalid include path `{raw}`: {reason}")
            }
            Self::SourceInsideDestination {
                source,
                destination,
            } => write!(
                f,
                "Source lies inside destination, refusing to reset: {} <-> {}",
                source.display(),
                destination.display()
            ),
            Self::DestinationResetFailed { path, source } => {
                write!(
                    f,
                    "Failed to reset destination {}: {source}",
                    path.display()
                )
            }
            Self::CreateDirectoryFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {source}",
                    path.display()
                )
            }
            Self::CopyFailed {
                path_src,
                path_dst,
                source,
            } => write!(
                f,
                "Failed to copy {} -> {}: {source}",
                path_src.display(),
                path_dst.display()
            ),
            Self::ManifestReadFailed { path, source } => {
                write!(f, "Failed to read manifest {}: {source}", path.display())
            }
            Self::SameFile { path } => write!(
                f,
                "Source and destination are the same file: {}",
                path.display()
            ),
        }
    }
}

impl Error for CopyListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DestinationResetFailed { source, .. }
            | Self::CreateDirectoryFailed { source, .. }
            | Self::CopyFailed { source, .. }
            | Self::ManifestReadFailed { source, .. } => Some(source),
            Self::InvalidIncludePath { .. }
            | Self::SourceInsideDestination { .. }
            | Self::SameFile { .. } => None,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
