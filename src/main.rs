use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, error, info};

use renametool::cli::{Args, Command, FolderArgs};
use renametool::config::{self, Config};
use renametool::error::AppError;
use renametool::filesystem::OsFileSystem;
use renametool::history::{self, LOG_FILE, UNDO_FILE};
use renametool::logging;
use renametool::operations::StepSpec;
use renametool::output::{
    display_apply_result, display_files, display_media, display_media_misses, display_patterns,
    display_preview, display_undo_preview, display_undo_result, should_use_colors,
};
use renametool::parser::parse_media_filename;
use renametool::patterns::detect_patterns;
use renametool::progress::Progress;
use renametool::rename::{apply_batch, build_candidates, build_plan, read_plan_file, select_files};
use renametool::scanner::{list_files, FileEntry, FileFilter};
use renametool::validator::{validate, ValidationSummary};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut progress = Progress::new(args.verbose > 0);

    let loaded = config::load(args.config.as_deref())?;
    if let Some(warning) = &loaded.warning {
        progress.warn(warning);
    }
    if let Some(path) = &loaded.path {
        debug!("Using config {:?}", path);
    }
    let config = loaded.config;

    match args.command {
        Command::Files(target) => {
            let (_, files) = list(&target, &config)?;
            print(display_files(&files, &mut io::stdout()))
        }
        Command::Patterns(target) => {
            let (_, files) = list(&target, &config)?;
            let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
            print(display_patterns(&detect_patterns(&names), &mut io::stdout()))
        }
        Command::Media(target) => {
            let (_, files) = list(&target, &config)?;
            let rows: Vec<_> = files
                .iter()
                .map(|f| (f.name.clone(), parse_media_filename(&f.name)))
                .collect();
            print(display_media(&rows, &mut io::stdout()))
        }
        Command::Rename {
            target,
            select,
            ops,
            plan,
            dry,
        } => {
            let mut steps = Vec::new();
            if let Some(path) = &plan {
                info!("Loading plan from {:?}", path);
                steps.extend(read_plan_file(path)?.into_iter().map(StepSpec::Op));
            }
            steps.extend(ops);

            run_rename(&target, &select, &steps, dry, &config, &mut progress)
        }
        Command::Undo { folder, dry } => {
            let folder = resolve_folder(folder.as_deref(), &config)?;
            run_undo(&folder, dry, &mut progress)
        }
    }
}

fn run_rename(
    target: &FolderArgs,
    select: &[String],
    steps: &[StepSpec],
    dry: bool,
    config: &Config,
    progress: &mut Progress,
) -> Result<(), AppError> {
    if steps.is_empty() {
        return Err(AppError::InvalidOperation {
            message: "No operations given; pass --op or --plan".to_string(),
        });
    }

    let (folder, files) = list(target, config)?;
    let (files, missing) = select_files(files, select);
    if !missing.is_empty() {
        return Err(AppError::UnknownSelection { names: missing });
    }

    let build = build_plan(steps, &files)?;
    let mut stdout = io::stdout();
    print(display_media_misses(&build.misses, &mut stdout))?;

    let candidates = build_candidates(&files, &build.plan);
    let results = validate(&candidates, &OsFileSystem);
    print(display_preview(&results, dry, should_use_colors(), &mut stdout))?;

    let summary = ValidationSummary::from_results(&results);
    if dry || summary.ok == 0 {
        return Ok(());
    }

    let report = apply_batch(&results, &OsFileSystem, progress);

    let log_path = history::write_log(&folder, &results)
        .map_err(|e| history_error(&folder, LOG_FILE, e))?;
    progress.log_written(&log_path);

    if !report.renamed.is_empty() {
        let ledger_path = history::record(&folder, &report.renamed)
            .map_err(|e| history_error(&folder, UNDO_FILE, e))?;
        progress.ledger_written(&ledger_path);
    }

    print(display_apply_result(&report, summary.skipped(), &mut stdout))?;

    if report.has_failures() {
        return Err(AppError::RenameError {
            action: "renames",
            failed: report.failed.len(),
            attempted: summary.ok,
        });
    }

    Ok(())
}

fn run_undo(folder: &Path, dry: bool, progress: &mut Progress) -> Result<(), AppError> {
    if !folder.is_dir() {
        return Err(AppError::DirectoryNotFound {
            path: folder.to_path_buf(),
        });
    }

    let entries = match history::load(folder) {
        Some(entries) => entries,
        None => {
            println!("No undo information found in {}", folder.display());
            return Ok(());
        }
    };

    let mut stdout = io::stdout();
    if dry {
        return print(display_undo_preview(&entries, &mut stdout));
    }

    let report = history::reverse(folder, &entries, &OsFileSystem, progress);
    history::clear(folder).map_err(|e| history_error(folder, UNDO_FILE, e))?;

    print(display_undo_result(&report, &mut stdout))?;

    if report.has_failures() {
        return Err(AppError::RenameError {
            action: "restores",
            failed: report.failed.len(),
            attempted: entries.len() - report.skipped_missing,
        });
    }

    Ok(())
}

/// Command-line folder, then the configured default, then the current directory
fn resolve_folder(folder: Option<&Path>, config: &Config) -> Result<PathBuf, AppError> {
    if let Some(folder) = folder.map(Path::to_path_buf).or_else(|| config.default_folder.clone()) {
        return Ok(folder);
    }
    std::env::current_dir()
        .map_err(|e| AppError::Other(format!("Cannot determine current directory: {}", e)))
}

fn list(target: &FolderArgs, config: &Config) -> Result<(PathBuf, Vec<FileEntry>), AppError> {
    let folder = resolve_folder(target.folder.as_deref(), config)?;
    let filter = FileFilter {
        extension: target
            .ext
            .clone()
            .or_else(|| config.default_extension_filter.clone()),
        excluded_names: config.excluded_files.clone(),
    };

    let files = list_files(&folder, &filter)?;
    info!("Found {} files in {:?}", files.len(), folder);

    Ok((folder, files))
}

fn history_error(folder: &Path, file: &str, err: history::HistoryError) -> AppError {
    AppError::HistoryError {
        path: Some(folder.join(file)),
        message: err.to_string(),
    }
}

fn print(result: io::Result<()>) -> Result<(), AppError> {
    result.map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))
}
