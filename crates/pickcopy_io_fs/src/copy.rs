//! Include-list copy orchestration.

use std::fs;
use std::path::{Path, PathBuf};

use crate::report::{ReportCopy, ReportCopyBuilder};
use crate::spec::{CopyListError, EnumCopyEvent, SpecCopyOptions, SpecIncludePath};
use crate::util::{copy_file_with_metadata, is_same_file, is_within, remove_destination_root};

#[derive(Debug)]
struct SpecCopyContext {
    path_dir_src: PathBuf,
    path_dir_dst: PathBuf,
    spec_cp_options: SpecCopyOptions,
    builder_cp_report: ReportCopyBuilder,
}

/// Copy every listed file from `dir_source` into `dir_destination`, reporting
/// progress through `on_event`.
///
/// This function performs:
/// 1. Validation of every include entry and of the root layout. Nothing on
///    disk is touched when this fails.
/// 2. Destination reset (recursive removal), unless disabled.
/// 3. One pass over the list in order: missing sources are reported and
///    skipped, existing ones are copied with metadata into the mirrored path.
///
/// Returns [`CopyListError`] on the first IO failure; files copied before
/// the failure stay in place.
pub fn copy_listed_with<P, Q, S, F>(
    dir_source: P,
    dir_destination: Q,
    include_paths: &[S],
    spec_cp_options: SpecCopyOptions,
    mut on_event: F,
) -> Result<ReportCopy, CopyListError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: AsRef<str>,
    F: FnMut(&EnumCopyEvent),
{
    let l_spec_include = SpecIncludePath::parse_all(include_paths)?;

    let path_dir_src = dir_source.as_ref().to_path_buf();
    let path_dir_dst = dir_destination.as_ref().to_path_buf();

    if spec_cp_options.if_reset_destination && is_within(&path_dir_src, &path_dir_dst) {
        return Err(CopyListError::SourceInsideDestination {
            source: path_dir_src,
            destination: path_dir_dst,
        });
    }

    let mut spec_cp_ctx = SpecCopyContext {
        path_dir_src,
        path_dir_dst,
        spec_cp_options,
        builder_cp_report: ReportCopyBuilder::default(),
    };

    if spec_cp_ctx.spec_cp_options.if_reset_destination && !spec_cp_ctx.spec_cp_options.if_dry_run
    {
        reset_destination(&spec_cp_ctx.path_dir_dst, &mut on_event)?;
    }

    for spec_include in &l_spec_include {
        handle_include_entry(spec_include, &mut spec_cp_ctx, &mut on_event)?;
    }

    Ok(spec_cp_ctx.builder_cp_report.build())
}

fn reset_destination<F>(path_dir_dst: &Path, on_event: &mut F) -> Result<(), CopyListError>
where
    F: FnMut(&EnumCopyEvent),
{
    let b_removed = remove_destination_root(path_dir_dst).map_err(|source| {
        CopyListError::DestinationResetFailed {
            path: path_dir_dst.to_path_buf(),
            source,
        }
    })?;
    if b_removed {
        on_event(&EnumCopyEvent::DestinationReset {
            path: path_dir_dst.to_path_buf(),
        });
    }
    Ok(())
}

fn handle_include_entry<F>(
    spec_include: &SpecIncludePath,
    spec_cp_ctx: &mut SpecCopyContext,
    on_event: &mut F,
) -> Result<(), CopyListError>
where
    F: FnMut(&EnumCopyEvent),
{
    spec_cp_ctx.builder_cp_report.add_listed();

    let path_file_src = spec_cp_ctx.path_dir_src.join(&spec_include.path_rel);
    let path_file_dst = spec_cp_ctx.path_dir_dst.join(&spec_include.path_rel);

    // `exists` follows symlinks, so a dangling link counts as missing.
    if !path_file_src.exists() {
        spec_cp_ctx.builder_cp_report.add_missing();
        on_event(&EnumCopyEvent::Missing {
            path_src: path_file_src,
        });
        return Ok(());
    }

    if spec_cp_ctx.spec_cp_options.if_dry_run {
        spec_cp_ctx.builder_cp_report.add_skipped();
        on_event(&EnumCopyEvent::Planned {
            path_src: path_file_src,
            path_dst: path_file_dst,
        });
        return Ok(());
    }

    if let Some(path_parent_dst) = path_file_dst.parent() {
        fs::create_dir_all(path_parent_dst).map_err(|source| {
            CopyListError::CreateDirectoryFailed {
                path: path_parent_dst.to_path_buf(),
                source,
            }
        })?;
    }

    // Copying a file onto itself truncates it before reading.
    if is_same_file(&path_file_src, &path_file_dst) {
        return Err(CopyListError::SameFile {
            path: path_file_src,
        });
    }

    copy_file_with_metadata(&path_file_src, &path_file_dst).map_err(|source| {
        CopyListError::CopyFailed {
            path_src: path_file_src.clone(),
            path_dst: path_file_dst.clone(),
            source,
        }
    })?;
    spec_cp_ctx.builder_cp_report.add_copied();
    on_event(&EnumCopyEvent::Copied {
        path_src: path_file_src,
        path_dst: path_file_dst,
    });
    Ok(())
}
