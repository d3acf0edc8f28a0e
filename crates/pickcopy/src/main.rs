use std::path::PathBuf;

use clap::Parser;
use pickcopy_io_fs::{
    C_DESTINATION_ROOT_DEFAULT, C_SOURCE_ROOT_DEFAULT, CopyListError, EnumCopyEvent,
    SpecCopyOptions, copy_listed_with, derive_default_include_paths, load_include_manifest,
};

#[derive(Parser)]
#[command(name = "pickcopy")]
#[command(version)]
#[command(
    about = "Copy a fixed list of files into a freshly reset mirror directory",
    long_about = None
)]
struct Cli {
    /// Root the include paths are resolved against for reading
    #[arg(short, long, default_value = C_SOURCE_ROOT_DEFAULT)]
    source: PathBuf,
    /// Mirror root; removed and rebuilt on every run
    #[arg(short, long, default_value = C_DESTINATION_ROOT_DEFAULT)]
    destination: PathBuf,
    /// Text file with one relative path per line (`#` starts a comment)
    #[arg(short, long)]
    manifest: Option<PathBuf>,
    /// Copy into the existing destination instead of removing it first
    #[arg(long)]
    keep_destination: bool,
    /// Report what would be copied without touching the filesystem
    #[arg(long)]
    dry_run: bool,
    /// Print one line per reset and copied file, plus the run counters
    #[arg(short, long)]
    verbose: bool,
}

fn render_event(event: &EnumCopyEvent, if_verbose: bool) {
    match event {
        EnumCopyEvent::Missing { path_src } => {
            println!("[⚠️ MISSING] {}", path_src.display());
        }
        EnumCopyEvent::DestinationReset { path } if if_verbose => {
            println!("[RESET] {}", path.display());
        }
        EnumCopyEvent::Copied { path_src, path_dst } if if_verbose => {
            println!("[COPY] {} -> {}", path_src.display(), path_dst.display());
        }
        EnumCopyEvent::Planned { path_src, path_dst } if if_verbose => {
            println!("[PLAN] {} -> {}", path_src.display(), path_dst.display());
        }
        _ => {}
    }
}

fn run(cli: Cli) -> Result<(), CopyListError> {
    let l_include = match &cli.manifest {
        Some(path) => load_include_manifest(path)?,
        None => derive_default_include_paths(),
    };
    let spec_cp_options = SpecCopyOptions {
        if_reset_destination: !cli.keep_destination,
        if_dry_run: cli.dry_run,
    };

    let if_verbose = cli.verbose;
    let report = copy_listed_with(
        &cli.source,
        &cli.destination,
        &l_include,
        spec_cp_options,
        |event| render_event(event, if_verbose),
    )?;

    if if_verbose {
        println!("{report}");
    }
    if cli.dry_run {
        println!(
            "[DRY-RUN] Would copy {} files to '{}'",
            report.cnt_skipped,
            cli.destination.display()
        );
    } else {
        println!(
            "✅ Copied {} files to '{}'",
            report.cnt_copied,
            cli.destination.display()
        );
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
