//! `pickcopy_io_fs` v1:
//! Include-list filesystem copy engine.
//!
//! Modules:
//! - `conf`   : default roots, default include list, manifest loading
//! - `copy`   : reset + copy orchestration
//! - `spec`   : options/events/errors
//! - `report` : run-time report model
//! - `util`   : shared helper functions

pub mod conf;
pub mod copy;
pub mod report;
pub mod spec;
mod util;

#[cfg(test)]
mod testing;

pub use conf::{
    C_DESTINATION_ROOT_DEFAULT, C_SOURCE_ROOT_DEFAULT, L_INCLUDE_PATHS_DEFAULT,
    derive_default_include_paths, load_include_manifest, parse_include_manifest,
};
pub use copy::copy_listed_with;
pub use report::{ReportCopy, ReportCopyBuilder};
pub use spec::{CopyListError, EnumCopyEvent, SpecCopyOptions, SpecIncludePath};
