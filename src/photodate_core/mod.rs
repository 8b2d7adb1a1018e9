pub mod cli;
pub mod date;
pub mod error;
pub mod execute;
pub mod exif;
pub mod organize;
pub mod placement;
pub mod plan;
pub mod prompt;
pub mod scan;

pub use cli::Cli;
pub use date::{DateTriple, normalize_date};
pub use error::{DateFormatError, FailedMove, FailedMoves, MoveError, PhotodateError};
pub use execute::{RunSummary, execute_plan};
pub use exif::{
    CAPTURE_DATE_TAG, ExifToolReader, MetadataReader, exiftool_available, extract_capture_date,
};
pub use organize::{ExecutionMode, Organizer, Outcome};
pub use placement::{DEFAULT_BUCKET_NAME, Layout, Placement};
pub use plan::{MoveTask, PhotoRecord, Plan, build_plan, collect_records};
pub use scan::walk_files;
