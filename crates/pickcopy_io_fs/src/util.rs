use std::fs;
use std::io;
use std::path::{Path, PathBuf};

////////////////////////////////////////////////////////////////////////////////
// #region PathUtilities

fn _absolutize_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}

fn _normalize_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }
    // Destination usually does not exist yet: resolve the nearest existing
    // ancestor and re-append the remainder.
    let path_abs = _absolutize_path(path);
    let mut path_cursor = path_abs.as_path();
    let mut l_tail = Vec::new();
    while let Some(name) = path_cursor.file_name() {
        l_tail.push(name.to_os_string());
        let Some(parent) = path_cursor.parent() else {
            break;
        };
        path_cursor = parent;
        if let Ok(resolved) = fs::canonicalize(path_cursor) {
            let mut path_out = resolved;
            path_out.extend(l_tail.iter().rev());
            return path_out;
        }
    }
    path_abs
}

/// Whether `path` equals `base` or lies under it, after resolving symlinks.
pub(crate) fn is_within(path: &Path, base: &Path) -> bool {
    _normalize_path(path).starts_with(_normalize_path(base))
}

/// Remove `path` if present. Directories go recursively; a symlink is
/// unlinked without touching its target.
///
/// Returns whether anything was removed.
pub(crate) fn remove_destination_root(path: &Path) -> Result<bool, io::Error> {
    let meta = match fs::symlink_metadata(path) {
        Ok(v) => v,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if meta.file_type().is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(true)
}

/// Whether both paths exist and resolve to the same file.
pub(crate) fn is_same_file(path_a: &Path, path_b: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        match (fs::metadata(path_a), fs::metadata(path_b)) {
            (Ok(stat_a), Ok(stat_b)) => {
                stat_a.dev() == stat_b.dev() && stat_a.ino() == stat_b.ino()
            }
            _ => false,
        }
    }
    #[cfg(not(unix))]
    {
        match (fs::canonicalize(path_a), fs::canonicalize(path_b)) {
            (Ok(resolved_a), Ok(resolved_b)) => resolved_a == resolved_b,
            _ => false,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FileCopy

pub(crate) fn copy_file_with_metadata(
    path_file_src: &Path,
    path_file_dst: &Path,
) -> Result<(), io::Error> {
    fs::copy(path_file_src, path_file_dst)?;
    apply_metadata(path_file_src, path_file_dst)?;
    Ok(())
}

fn apply_metadata(path_file_src: &Path, path_file_dst: &Path) -> Result<(), io::Error> {
    use filetime::{FileTime, set_file_times};

    let stat_src = fs::metadata(path_file_src)?;
    fs::set_permissions(path_file_dst, stat_src.permissions())?;

    let file_time_access = FileTime::from_last_access_time(&stat_src);
    let file_time_modify = FileTime::from_last_modification_time(&stat_src);
    set_file_times(path_file_dst, file_time_access, file_time_modify)?;

    #[cfg(target_os = "linux")]
    copy_xattrs_linux(path_file_src, path_file_dst);
    Ok(())
}

#[cfg(target_os = "linux")]
fn copy_xattrs_linux(path_file_src: &Path, path_file_dst: &Path) {
    let iter_xattr_names = match xattr::list(path_file_src) {
        Ok(v) => v,
        Err(_) => return,
    };

    for name in iter_xattr_names {
        let Some(raw_value) = xattr::get(path_file_src, &name).ok().flatten() else {
            continue;
        };
        let _ = xattr::set(path_file_dst, &name, &raw_value);
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
