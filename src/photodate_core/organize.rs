use crate::photodate_core::error::{PhotodateError, Result};
use crate::photodate_core::execute::{RunSummary, execute_plan};
use crate::photodate_core::exif::MetadataReader;
use crate::photodate_core::placement::Layout;
use crate::photodate_core::plan::{Plan, build_plan, collect_records};
use crate::photodate_core::prompt::{confirm, print_plan, print_summary};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How an approved plan gets from preview to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// List the moves and ask before touching anything.
    PreviewAndConfirm,
    /// Move without asking.
    AutoExecute,
    /// List the moves and stop.
    PreviewOnly,
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// Every file was already in place.
    NothingToDo(Plan),
    /// The plan was only shown.
    Previewed(Plan),
    /// The operator said no; nothing was moved.
    Declined(Plan),
    Executed(RunSummary),
}

/// Plans and carries out the reorganization of one tree.
pub struct Organizer<M> {
    layout: Layout,
    reader: M,
    excluded: Vec<PathBuf>,
    show_progress: bool,
}

impl<M: MetadataReader> Organizer<M> {
    pub fn new(layout: Layout, reader: M) -> Self {
        Self {
            layout,
            reader,
            excluded: Vec::new(),
            show_progress: false,
        }
    }

    /// Leave a file out of every scan, such as the tool's own log.
    pub fn excluding(mut self, path: &Path) -> Self {
        match fs::canonicalize(path) {
            Ok(path) => self.excluded.push(path),
            Err(e) => log::warn!("Cannot exclude {}: {}", path.display(), e),
        }
        self
    }

    /// Draw progress bars on stderr while scanning and moving.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Read every file's capture date and work out what has to move.
    pub fn plan(&mut self) -> Result<Plan> {
        let root = self.layout.root();
        if !root.is_dir() {
            return Err(PhotodateError::NotADirectory(root.to_path_buf()));
        }

        log::info!("Scanning {}", root.display());

        let scan_bar = self.progress_bar(
            ProgressBar::new_spinner(),
            "{spinner:.green} [{elapsed_precise}] {pos} files scanned",
        );
        scan_bar.enable_steady_tick(Duration::from_millis(100));

        let records = collect_records(root, &self.excluded, &mut self.reader)
            .inspect(|_| scan_bar.inc(1));
        let plan = build_plan(&self.layout, records);

        scan_bar.finish_and_clear();
        Ok(plan)
    }

    /// Carry out an approved plan.
    pub fn execute(&self, plan: Plan) -> RunSummary {
        let move_bar = self.progress_bar(
            ProgressBar::new(plan.len() as u64),
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        );
        move_bar.set_message("Moving files");

        let summary = execute_plan(plan, &move_bar);
        move_bar.finish_and_clear();
        summary
    }

    /// Plan, then act on the plan according to `mode`.
    ///
    /// The plan and any prompt go to `out`; the operator's answer is read from
    /// `input`. Nothing on disk changes unless the plan is executed.
    pub fn run<R, W>(&mut self, mode: ExecutionMode, input: &mut R, out: &mut W) -> Result<Outcome>
    where
        R: BufRead,
        W: Write,
    {
        let plan = self.plan()?;

        if plan.is_empty() {
            writeln!(
                out,
                "All {} files are already in place. Nothing to do.",
                plan.total_considered
            )?;
            return Ok(Outcome::NothingToDo(plan));
        }

        match mode {
            ExecutionMode::PreviewOnly => {
                print_plan(out, &plan)?;
                writeln!(out, "\n[DRY RUN] No files were moved.")?;
                return Ok(Outcome::Previewed(plan));
            }
            ExecutionMode::PreviewAndConfirm => {
                print_plan(out, &plan)?;
                if !confirm(input, out)? {
                    log::info!("Operator declined {} moves", plan.len());
                    writeln!(out, "You cancelled the operation. No files were moved.")?;
                    return Ok(Outcome::Declined(plan));
                }
            }
            ExecutionMode::AutoExecute => {
                writeln!(out, "Found {} photos to move", plan.len())?;
            }
        }

        let summary = self.execute(plan);
        print_summary(out, &summary)?;
        Ok(Outcome::Executed(summary))
    }

    fn progress_bar(&self, bar: ProgressBar, template: &str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let style = ProgressStyle::with_template(template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.with_style(style)
    }
}
