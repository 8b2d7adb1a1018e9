use crate::photodate_core::error::{PhotodateError, Result};
use exiftool::ExifTool;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Tag holding the moment the shutter fired.
pub const CAPTURE_DATE_TAG: &str = "DateTimeOriginal";

/// Reads individual metadata tags from files.
///
/// `Err` means the file could not be opened or parsed at all, `Ok(None)` that
/// it was readable but does not carry the tag.
pub trait MetadataReader {
    fn read_tag(&mut self, path: &Path, tag: &str) -> Result<Option<String>>;
}

/// One file's worth of `exiftool -j` output.
#[derive(Deserialize, Debug)]
struct ExifToolRecord {
    #[serde(rename = "SourceFile", default)]
    source_file: Option<PathBuf>,
    #[serde(flatten)]
    tags: HashMap<String, Value>,
}

/// [`MetadataReader`] backed by a long-running exiftool process.
pub struct ExifToolReader {
    exiftool: ExifTool,
}

impl ExifToolReader {
    pub fn new() -> Result<Self> {
        let exiftool = ExifTool::new().map_err(|e| PhotodateError::Exiftool(e.to_string()))?;
        Ok(Self { exiftool })
    }
}

impl MetadataReader for ExifToolReader {
    fn read_tag(&mut self, path: &Path, tag: &str) -> Result<Option<String>> {
        let tag_arg = format!("-{}", tag);
        let record: ExifToolRecord = self
            .exiftool
            .read_metadata(path, &[tag_arg.as_str()])
            .map_err(|e| PhotodateError::MetadataExtraction {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if let Some(error) = record.tags.get("Error").and_then(value_to_string) {
            return Err(PhotodateError::MetadataExtraction {
                path: record.source_file.unwrap_or_else(|| path.to_path_buf()),
                reason: error,
            });
        }

        Ok(record.tags.get(tag).and_then(value_to_string))
    }
}

/// Helper to extract a String from Value (exiftool emits bare numbers for some tags)
fn value_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read the raw capture date of a file.
///
/// Unreadable files and files without the tag both yield `None`; neither is
/// an error from the caller's point of view.
pub fn extract_capture_date<M>(reader: &mut M, path: &Path) -> Option<String>
where
    M: MetadataReader + ?Sized,
{
    match reader.read_tag(path, CAPTURE_DATE_TAG) {
        Ok(Some(date)) if !date.trim().is_empty() => Some(date),
        Ok(_) => {
            log::debug!("No {} tag in {}", CAPTURE_DATE_TAG, path.display());
            None
        }
        Err(e) => {
            log::debug!("Not readable as an image: {}", e);
            None
        }
    }
}

/// Check if exiftool is available on the system.
pub fn exiftool_available() -> bool {
    std::process::Command::new("exiftool")
        .arg("-ver")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
