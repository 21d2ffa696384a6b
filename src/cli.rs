use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::operations::StepSpec;

#[derive(Parser, Debug)]
#[command(name = "renametool")]
#[command(author, version, about, long_about = None)]
#[command(about = "Batch-rename files with previews, conflict checks and undo")]
pub struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Config file (default: $RENAMETOOL_CONFIG, ./renametool.toml, user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Folder and listing filter shared by every command that reads files
#[derive(ClapArgs, Debug, Clone)]
pub struct FolderArgs {
    /// Folder to work in (default: config default_folder, then the current directory)
    pub folder: Option<PathBuf>,

    /// Only list files with this extension (e.g. "jpg" or ".jpg")
    #[arg(short, long, value_name = "EXT")]
    pub ext: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the files a rename would consider
    Files(FolderArgs),

    /// Detect naming patterns shared by the files
    Patterns(FolderArgs),

    /// Show TV/movie details parsed from each filename
    Media(FolderArgs),

    /// Preview a rename plan and apply it
    Rename {
        #[command(flatten)]
        target: FolderArgs,

        /// Only rename these files (repeatable; default: all listed files)
        #[arg(short, long = "select", value_name = "NAME")]
        select: Vec<String>,

        /// Operation to apply, in order (repeatable).
        /// Forms: replace:FIND=>REPL, regex:PATTERN=>REPL, prefix:TEXT,
        /// suffix:TEXT, case:MODE, ext:EXT, tv, movie
        #[arg(short, long = "op", value_name = "SPEC", allow_hyphen_values = true)]
        ops: Vec<StepSpec>,

        /// JSON plan file, applied before any --op
        #[arg(short, long, value_name = "FILE")]
        plan: Option<PathBuf>,

        /// Preview only; leave the filesystem untouched
        #[arg(short, long)]
        dry: bool,
    },

    /// Reverse the last applied rename in a folder
    Undo {
        /// Folder to work in (default: config default_folder, then the current directory)
        folder: Option<PathBuf>,

        /// Show what would be restored without renaming
        #[arg(short, long)]
        dry: bool,
    },
}
