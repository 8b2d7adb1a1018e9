use crate::photodate_core::date::{DateTriple, normalize_date};
use crate::photodate_core::exif::{MetadataReader, extract_capture_date};
use crate::photodate_core::placement::{Layout, Placement};
use crate::photodate_core::scan::walk_files;
use std::fs;
use std::path::{Path, PathBuf};

/// A file found under the root together with its raw capture date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    pub path: PathBuf,
    pub raw_date: Option<String>,
}

impl PhotoRecord {
    pub fn new(path: impl Into<PathBuf>, raw_date: Option<&str>) -> Self {
        Self {
            path: path.into(),
            raw_date: raw_date.map(str::to_string),
        }
    }

    /// The normalized capture date. Malformed dates count as no date.
    pub fn date_triple(&self) -> Option<DateTriple> {
        let raw = self.raw_date.as_deref()?;
        match normalize_date(raw) {
            Ok(date) => Some(date),
            Err(e) => {
                log::warn!("Treating {} as undated: {}", self.path.display(), e);
                None
            }
        }
    }
}

/// A single pending move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTask {
    source_path: PathBuf,
    destination_dir: PathBuf,
}

impl MoveTask {
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn destination_dir(&self) -> &Path {
        &self.destination_dir
    }

    /// Full path the file will have after the move.
    pub fn destination_path(&self) -> PathBuf {
        match self.source_path.file_name() {
            Some(name) => self.destination_dir.join(name),
            None => self.destination_dir.clone(),
        }
    }
}

/// Every move needed to bring a tree into its canonical layout.
#[derive(Debug, Default)]
pub struct Plan {
    pub tasks: Vec<MoveTask>,
    pub total_considered: usize,
    pub undated_count: usize,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

/// Lazily pair every file under `root` with its capture date.
///
/// Files whose canonical path is in `excluded` are skipped before any
/// metadata is read.
pub fn collect_records<'a, M>(
    root: &Path,
    excluded: &'a [PathBuf],
    reader: &'a mut M,
) -> impl Iterator<Item = PhotoRecord> + use<'a, M>
where
    M: MetadataReader + ?Sized,
{
    walk_files(root)
        .filter(move |path| !is_excluded(path, excluded))
        .map(move |path| {
            let raw_date = extract_capture_date(reader, &path);
            PhotoRecord { path, raw_date }
        })
}

fn is_excluded(path: &Path, excluded: &[PathBuf]) -> bool {
    !excluded.is_empty() && fs::canonicalize(path).is_ok_and(|p| excluded.contains(&p))
}

/// Decide which records have to move, keeping their order.
///
/// This never touches the filesystem, so a plan can always be previewed and
/// thrown away.
pub fn build_plan<I>(layout: &Layout, records: I) -> Plan
where
    I: IntoIterator<Item = PhotoRecord>,
{
    let mut plan = Plan::default();

    for record in records {
        plan.total_considered += 1;

        let date = record.date_triple();
        if date.is_none() {
            plan.undated_count += 1;
        }

        let placement = layout.place(&record.path, date.as_ref());
        log::debug!("{} -> {:?}", record.path.display(), placement);

        if let Placement::ToDated(dir) | Placement::ToBucket(dir) = placement {
            debug_assert_ne!(record.path.parent(), Some(dir.as_path()));
            plan.tasks.push(MoveTask {
                source_path: record.path,
                destination_dir: dir,
            });
        }
    }

    log::info!(
        "Planned {} moves for {} files ({} without a capture date)",
        plan.len(),
        plan.total_considered,
        plan.undated_count
    );

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::with_default_bucket("/photos")
    }

    #[test]
    fn test_mismatched_file_is_planned() {
        let plan = build_plan(
            &layout(),
            [PhotoRecord::new(
                "/photos/vacation/spain/1234422.JPG",
                Some("2012:03:03 11:11:00"),
            )],
        );

        assert_eq!(plan.len(), 1);
        let task = &plan.tasks[0];
        assert_eq!(task.source_path(), Path::new("/photos/vacation/spain/1234422.JPG"));
        assert_eq!(task.destination_dir(), Path::new("/photos/2012/03/03"));
        assert_eq!(
            task.destination_path(),
            PathBuf::from("/photos/2012/03/03/1234422.JPG")
        );
    }

    #[test]
    fn test_placed_files_are_skipped() {
        let plan = build_plan(
            &layout(),
            [
                PhotoRecord::new("/photos/2012/03/03/a.jpg", Some("2012-03-03 09:00:00")),
                PhotoRecord::new("/photos/no_date/b.png", None),
            ],
        );

        assert!(plan.is_empty());
        assert_eq!(plan.total_considered, 2);
        assert_eq!(plan.undated_count, 1);
    }

    #[test]
    fn test_malformed_date_routes_to_bucket() {
        let plan = build_plan(
            &layout(),
            [
                PhotoRecord::new("/photos/a.jpg", Some("not-a-date")),
                PhotoRecord::new("/photos/b.jpg", Some("2012/03/03 11:11:00")),
            ],
        );

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.undated_count, 1);
        assert_eq!(plan.tasks[0].destination_dir(), Path::new("/photos/no_date"));
        assert_eq!(plan.tasks[1].destination_dir(), Path::new("/photos/2012/03/03"));
    }

    #[test]
    fn test_plan_keeps_record_order() {
        let records = ["c.jpg", "a.jpg", "b.jpg"]
            .map(|name| PhotoRecord::new(Path::new("/photos/inbox").join(name), None));
        let plan = build_plan(&layout(), records);

        let sources: Vec<&Path> = plan.tasks.iter().map(|t| t.source_path()).collect();
        assert_eq!(
            sources,
            vec![
                Path::new("/photos/inbox/c.jpg"),
                Path::new("/photos/inbox/a.jpg"),
                Path::new("/photos/inbox/b.jpg"),
            ]
        );
    }

    #[test]
    fn test_date_triple_of_record() {
        assert_eq!(
            PhotoRecord::new("a.jpg", Some("2012:03:03 11:11:00")).date_triple(),
            Some(DateTriple::new("2012", "03", "03"))
        );
        assert_eq!(PhotoRecord::new("a.jpg", None).date_triple(), None);
        assert_eq!(PhotoRecord::new("a.jpg", Some("garbage")).date_triple(), None);
    }
}
