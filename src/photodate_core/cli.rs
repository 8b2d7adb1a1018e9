use crate::photodate_core::organize::ExecutionMode;
use crate::photodate_core::placement::DEFAULT_BUCKET_NAME;
use clap::Parser;
use simplelog::LevelFilter;
use std::path::{Component, Path, PathBuf};

const AFTER_HELP: &str = "\
Every photo below <ROOT> is moved to ROOT/year/month/day according to its
EXIF DateTimeOriginal tag. Photos already in the right folder stay put, and
files without a usable date go to ROOT/<bucket>.

Example:
  vacation/spain/1234422.JPG with date 2012:03:03 11:11:00
  will be moved to 2012/03/03/1234422.JPG";

#[derive(Parser, Debug)]
#[command(author, version, about = "Organize your photos by the date they were taken")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Directory where your photos are stored
    pub root: Option<PathBuf>,

    /// Folder (directly under ROOT) for photos without a capture date
    #[arg(long, default_value = DEFAULT_BUCKET_NAME, value_parser = parse_bucket_name)]
    pub bucket: String,

    /// Move files without asking for confirmation
    #[arg(short, long, conflicts_with = "dry_run")]
    pub yes: bool,

    /// Show what would be moved without making changes
    #[arg(long)]
    pub dry_run: bool,

    /// Enable file logging to photodate.log
    #[arg(long = "log")]
    pub log: bool,

    /// Log level for file logging (debug, info, warn, error)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn execution_mode(&self) -> ExecutionMode {
        if self.dry_run {
            ExecutionMode::PreviewOnly
        } else if self.yes {
            ExecutionMode::AutoExecute
        } else {
            ExecutionMode::PreviewAndConfirm
        }
    }
}

/// The bucket has to be a single folder directly under the root.
fn parse_bucket_name(name: &str) -> Result<String, String> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(name.to_string()),
        _ => Err(format!("{:?} is not a plain folder name", name)),
    }
}
