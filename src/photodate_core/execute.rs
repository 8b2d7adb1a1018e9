use crate::photodate_core::error::{FailedMoves, MoveError};
use crate::photodate_core::plan::{MoveTask, Plan};
use indicatif::ProgressBar;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Outcome of executing a plan.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub total_considered: usize,
    pub undated_count: usize,
    pub moved_count: usize,
    pub failed_moves: FailedMoves,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files considered, {} moved, {} failed ({} without a capture date)",
            self.total_considered,
            self.moved_count,
            self.failed_moves.len(),
            self.undated_count
        )
    }
}

/// Carry out every task of an approved plan, in order.
///
/// A failing task is recorded in the summary and the batch goes on with the
/// next one. Moves that already happened stay applied. A task blocked by a
/// file of the same name is retried after the rest of the batch, since that
/// file may itself have been moved away in the meantime.
pub fn execute_plan(plan: Plan, progress: &ProgressBar) -> RunSummary {
    let mut summary = RunSummary {
        total_considered: plan.total_considered,
        undated_count: plan.undated_count,
        ..Default::default()
    };

    progress.set_length(plan.tasks.len() as u64);

    let mut blocked = Vec::new();
    for task in plan.tasks {
        match execute_task(&task) {
            Err(e @ MoveError::DestinationExists(_)) => blocked.push((task, e)),
            result => {
                record(&mut summary, task, result);
                progress.inc(1);
            }
        }
    }

    // Retry until a whole pass frees nothing more.
    while !blocked.is_empty() {
        let waiting = blocked.len();
        let mut still_blocked = Vec::new();
        for (task, _) in blocked {
            match execute_task(&task) {
                Err(e @ MoveError::DestinationExists(_)) => still_blocked.push((task, e)),
                result => {
                    record(&mut summary, task, result);
                    progress.inc(1);
                }
            }
        }
        blocked = still_blocked;
        if blocked.len() == waiting {
            break;
        }
    }

    for (task, e) in blocked {
        record(&mut summary, task, Err(e));
        progress.inc(1);
    }

    if !summary.failed_moves.is_empty() {
        log::error!("{} files failed to move", summary.failed_moves.len());
    }

    summary
}

fn record(summary: &mut RunSummary, task: MoveTask, result: Result<(), MoveError>) {
    match result {
        Ok(()) => {
            log::info!(
                "{} --> {}",
                task.source_path().display(),
                task.destination_dir().display()
            );
            summary.moved_count += 1;
        }
        Err(e) => {
            log::error!("Can't move {}: {}", task.source_path().display(), e);
            let destination = task.destination_path();
            summary
                .failed_moves
                .add(task.source_path().to_path_buf(), destination, e);
        }
    }
}

fn execute_task(task: &MoveTask) -> Result<(), MoveError> {
    let dir = task.destination_dir();
    fs::create_dir_all(dir).map_err(|source| MoveError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let destination = task.destination_path();
    if fs::symlink_metadata(&destination).is_ok() {
        return Err(MoveError::DestinationExists(destination));
    }

    move_file(task.source_path(), &destination)
}

/// Rename, falling back to copy-and-delete across filesystems.
fn move_file(source: &Path, destination: &Path) -> Result<(), MoveError> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            log::debug!(
                "{} is on another device, copying instead",
                destination.display()
            );
            copy_then_remove(source, destination)
        }
        Err(e) => Err(MoveError::Move(e)),
    }
}

fn copy_then_remove(source: &Path, destination: &Path) -> Result<(), MoveError> {
    fs::copy(source, destination).map_err(MoveError::Move)?;
    fs::remove_file(source).map_err(|e| MoveError::SourceNotRemoved {
        copy: destination.to_path_buf(),
        source: e,
    })
}
