//! Human-facing tables written to stdout.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};

use crate::history::{UndoEntry, UndoReport};
use crate::parser::MediaInfo;
use crate::patterns::PatternMatch;
use crate::rename::{ApplyReport, MediaMiss};
use crate::scanner::FileEntry;
use crate::validator::{RenameStatus, ValidationResult, ValidationSummary};

const MAX_NAME_COLUMN: usize = 50;

/// Check if we should use colors on stdout
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stdout().is_terminal()
}

/// Human-readable byte count ("512 B", "1.5 KB", "3.2 MB")
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if size < 1024.0 {
            break;
        }
        size /= 1024.0;
        unit = next;
    }
    format!("{:.1} {}", size, unit)
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_COLUMN)
}

fn paint_status(status: &RenameStatus, colors: bool) -> String {
    let label = status.to_string();
    if !colors {
        return label;
    }
    match status {
        RenameStatus::Ok => label.green().to_string(),
        RenameStatus::NoChange => label.dimmed().to_string(),
        RenameStatus::Conflict => label.yellow().bold().to_string(),
        RenameStatus::Invalid(_) => label.red().bold().to_string(),
    }
}

/// List files with their sizes
pub fn display_files(files: &[FileEntry], writer: &mut impl Write) -> io::Result<()> {
    if files.is_empty() {
        writeln!(writer, "No files found.")?;
        return Ok(());
    }

    let width = name_width(files.iter().map(|f| f.name.as_str()));
    for (i, file) in files.iter().enumerate() {
        writeln!(
            writer,
            "{:>3}. {:<width$}  {:>10}",
            i + 1,
            file.name,
            format_size(file.size),
            width = width
        )?;
    }
    writeln!(writer)?;
    writeln!(writer, "{} files", files.len())?;

    Ok(())
}

/// Table of detected patterns
pub fn display_patterns(matches: &[PatternMatch], writer: &mut impl Write) -> io::Result<()> {
    if matches.is_empty() {
        writeln!(writer, "No recurring patterns found.")?;
        return Ok(());
    }

    let width = name_width(matches.iter().map(|m| m.name.as_str()));
    writeln!(
        writer,
        "{:<width$}  {:>5}  {}",
        "Pattern",
        "Files",
        "Examples",
        width = width
    )?;
    for m in matches {
        writeln!(
            writer,
            "{:<width$}  {:>5}  {}",
            m.name,
            m.match_count,
            m.examples.join(", "),
            width = width
        )?;
        writeln!(writer, "{:<width$}         regex: {}", "", m.regex, width = width)?;
    }

    Ok(())
}

/// Parsed media details for each file
pub fn display_media(
    rows: &[(String, Option<MediaInfo>)],
    writer: &mut impl Write,
) -> io::Result<()> {
    if rows.is_empty() {
        writeln!(writer, "No files found.")?;
        return Ok(());
    }

    for (name, info) in rows {
        writeln!(writer, "{}", name)?;
        if let Some(info) = info {
            writeln!(writer, "  Type:    {}", info.kind())?;
        }
        match info {
            Some(MediaInfo::Tv(tv)) => {
                writeln!(writer, "  Show:    {}", tv.show)?;
                writeln!(writer, "  Episode: S{:02}E{:02}", tv.season, tv.episode)?;
                if !tv.title.is_empty() {
                    writeln!(writer, "  Title:   {}", tv.title)?;
                }
            }
            Some(MediaInfo::Movie(movie)) => {
                writeln!(writer, "  Title:   {}", movie.title)?;
                writeln!(writer, "  Year:    {}", movie.year)?;
            }
            None => writeln!(writer, "  (not recognized)")?,
        }
    }

    let recognized = rows.iter().filter(|(_, info)| info.is_some()).count();
    writeln!(writer)?;
    writeln!(writer, "{} of {} files recognized", recognized, rows.len())?;

    Ok(())
}

/// Media suggestions that did not match a selected file
pub fn display_media_misses(misses: &[MediaMiss], writer: &mut impl Write) -> io::Result<()> {
    for miss in misses {
        writeln!(
            writer,
            "Not recognized as {}: {} (left unchanged by this step)",
            miss.kind, miss.file
        )?;
    }
    if !misses.is_empty() {
        writeln!(writer)?;
    }
    Ok(())
}

/// Preview of a validated batch
pub fn display_preview(
    results: &[ValidationResult],
    dry_run: bool,
    colors: bool,
    writer: &mut impl Write,
) -> io::Result<()> {
    if dry_run {
        writeln!(writer)?;
        writeln!(writer, "========================================")?;
        writeln!(writer, "              DRY RUN")?;
        writeln!(writer, "========================================")?;
    }
    writeln!(writer)?;

    if results.is_empty() {
        writeln!(writer, "No files to rename.")?;
        return Ok(());
    }

    let width = name_width(results.iter().map(|r| r.original_name()));
    for result in results {
        writeln!(
            writer,
            "  {:<width$}  ->  {}  [{}]",
            result.original_name(),
            result.new_name(),
            paint_status(&result.status, colors),
            width = width
        )?;
    }

    let summary = ValidationSummary::from_results(results);
    writeln!(writer)?;
    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    let verb = if dry_run { "would be renamed" } else { "to rename" };
    writeln!(writer, "  {} {}", summary.ok, verb)?;
    writeln!(writer, "  {} unchanged", summary.no_change)?;
    writeln!(writer, "  {} conflicts", summary.conflict)?;
    writeln!(writer, "  {} invalid", summary.invalid)?;

    if dry_run && summary.ok > 0 {
        writeln!(writer)?;
        writeln!(writer, "Run without --dry to apply these changes.")?;
    }

    Ok(())
}

/// Display execution results (non-dry-run)
pub fn display_apply_result(
    report: &ApplyReport,
    skipped: usize,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Renamed {} files.", report.renamed.len())?;
    if skipped > 0 {
        writeln!(writer, "  {} skipped (unchanged, conflicting or invalid).", skipped)?;
    }
    if report.has_failures() {
        writeln!(writer, "  {} failed:", report.failed.len())?;
        for failure in &report.failed {
            writeln!(
                writer,
                "    {} -> {}: {}",
                failure.original, failure.new_name, failure.reason
            )?;
        }
    }
    if !report.renamed.is_empty() {
        writeln!(writer, "Run `renametool undo` in this folder to reverse.")?;
    }

    Ok(())
}

/// Entries an undo would restore
pub fn display_undo_preview(entries: &[UndoEntry], writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Last rename ({} files) would be reversed:", entries.len())?;

    let width = name_width(entries.iter().map(|e| e.new.as_str()));
    for entry in entries {
        writeln!(writer, "  {:<width$}  ->  {}", entry.new, entry.old, width = width)?;
    }

    Ok(())
}

pub fn display_undo_result(report: &UndoReport, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Restored {} files.", report.restored.len())?;
    if report.skipped_missing > 0 {
        writeln!(
            writer,
            "  {} skipped (renamed file no longer exists).",
            report.skipped_missing
        )?;
    }
    if report.has_failures() {
        writeln!(writer, "  {} failed:", report.failed.len())?;
        for failure in &report.failed {
            writeln!(
                writer,
                "    {} -> {}: {}",
                failure.entry.new, failure.entry.old, failure.reason
            )?;
        }
    }

    Ok(())
}
