//! Default roots, default include list, and include-manifest loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::spec::CopyListError;

/// Default source root.
pub const C_SOURCE_ROOT_DEFAULT: &str = ".";
/// Default destination root.
pub const C_DESTINATION_ROOT_DEFAULT: &str = "./cold_email_copy";
/// Manifest line prefix marking a comment.
pub const C_MANIFEST_COMMENT_PREFIX: &str = "#";

/// Cold-email backend and frontend files, in copy order.
pub const L_INCLUDE_PATHS_DEFAULT: [&str; 15] = [
    // Backend
    "server/index.js",
    "server/middleware/auth.js",
    "server/models/ColdEmail.js",
    "server/models/ColdEmailSystem.js",
    "server/models/LeadCategory.js",
    "server/routes/coldEmail.js",
    "server/routes/coldEmailSystem.js",
    // Frontend
    "src/components/ColdEmail/AnalyticsTab.tsx",
    "src/components/ColdEmail/CampaignsTab.tsx",
    "src/components/ColdEmail/ColdEmailManager.tsx",
    "src/components/ColdEmail/EmailAccountsTab.tsx",
    "src/components/ColdEmail/InboxTab.tsx",
    "src/components/ColdEmail/LeadsTab.tsx",
    "src/data/coldEmailMockData.ts",
    "src/services/api.ts",
];

/// Build the default include list as owned strings.
pub fn derive_default_include_paths() -> Vec<String> {
    L_INCLUDE_PATHS_DEFAULT
        .iter()
        .map(|v| v.to_string())
        .collect()
}

/// Split manifest text into include entries.
///
/// One entry per line, trimmed. Blank lines and `#` comments are dropped;
/// order and duplicates are kept.
pub fn parse_include_manifest(txt: &str) -> Vec<String> {
    txt.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(C_MANIFEST_COMMENT_PREFIX))
        .map(str::to_string)
        .collect()
}

/// Read and parse an include manifest file.
pub fn load_include_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CopyListError> {
    let path = path.as_ref();
    let txt = fs::read_to_string(path).map_err(|source| CopyListError::ManifestReadFailed {
        path: PathBuf::from(path),
        source,
    })?;
    Ok(parse_include_manifest(&txt))
}
