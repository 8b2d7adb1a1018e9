use crate::photodate_core::date::DateTriple;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Folder for photos without a usable capture date.
pub const DEFAULT_BUCKET_NAME: &str = "no_date";

/// Where a single file belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Already in its canonical folder.
    InPlace,
    /// Belongs in `root/year/month/day`.
    ToDated(PathBuf),
    /// Has no usable date and belongs in the bucket.
    ToBucket(PathBuf),
}

/// The target layout of a photo tree.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
    bucket_name: String,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>, bucket_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            bucket_name: bucket_name.into(),
        }
    }

    /// Layout using [`DEFAULT_BUCKET_NAME`].
    pub fn with_default_bucket(root: impl Into<PathBuf>) -> Self {
        Self::new(root, DEFAULT_BUCKET_NAME)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bucket_dir(&self) -> PathBuf {
        self.root.join(&self.bucket_name)
    }

    pub fn dated_dir(&self, date: &DateTriple) -> PathBuf {
        self.root.join(&date.year).join(&date.month).join(&date.day)
    }

    /// Decide where the file at `path` belongs.
    ///
    /// A dated file is in place when its three nearest parent folders under
    /// the root read `year/month/day`. An undated file is in place only when
    /// it sits directly in the bucket; its folder names are never consulted.
    pub fn place(&self, path: &Path, date: Option<&DateTriple>) -> Placement {
        match date {
            Some(date) if self.is_dated_match(path, date) => Placement::InPlace,
            Some(date) => Placement::ToDated(self.dated_dir(date)),
            None if path.parent() == Some(self.bucket_dir().as_path()) => Placement::InPlace,
            None => Placement::ToBucket(self.bucket_dir()),
        }
    }

    fn is_dated_match(&self, path: &Path, date: &DateTriple) -> bool {
        let Some(parent) = path.parent() else {
            return false;
        };
        let Ok(relative) = parent.strip_prefix(&self.root) else {
            return false;
        };

        let segments: Vec<&OsStr> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(name) => Some(name),
                _ => None,
            })
            .collect();

        match segments.as_slice() {
            [.., year, month, day] => {
                *year == date.year.as_str()
                    && *month == date.month.as_str()
                    && *day == date.day.as_str()
            }
            _ => false,
        }
    }
}
