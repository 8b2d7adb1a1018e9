use crate::photodate_core::execute::RunSummary;
use crate::photodate_core::plan::Plan;
use std::io::{self, BufRead, Write};

/// Print every pending move.
pub fn print_plan<W: Write>(out: &mut W, plan: &Plan) -> io::Result<()> {
    writeln!(out, "Found {} photos to move", plan.len())?;
    if plan.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "file --> destination")?;
    writeln!(out, "─────────────────────────────────")?;
    for task in &plan.tasks {
        writeln!(
            out,
            "{} --> {}",
            task.source_path().display(),
            task.destination_dir().display()
        )?;
    }
    Ok(())
}

/// Ask whether to go ahead. No answer at all counts as a no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    write!(out, "\nWould you like to continue? [Y/n]: ")?;
    out.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(out)?;
        return Ok(false);
    }
    Ok(is_affirmative(&answer))
}

/// `yes`, `y` and a bare Enter accept, in any case.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y" | "")
}

/// Print the end-of-run report, including every failed move.
pub fn print_summary<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    writeln!(out, "\nDone!")?;
    writeln!(out, "  {} files considered", summary.total_considered)?;
    writeln!(out, "  {} files moved", summary.moved_count)?;
    if summary.undated_count > 0 {
        writeln!(out, "  {} without a capture date", summary.undated_count)?;
    }
    if !summary.failed_moves.is_empty() {
        writeln!(out, "  {} failed to move:", summary.failed_moves.len())?;
        write!(out, "{}", summary.failed_moves)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photodate_core::placement::Layout;
    use crate::photodate_core::plan::{PhotoRecord, build_plan};
    use std::io::Cursor;

    #[test]
    fn test_is_affirmative() {
        for answer in ["y", "Y", "yes", "YES", " Yes \n", "", "\n"] {
            assert!(is_affirmative(answer), "{:?} should accept", answer);
        }
        for answer in ["n", "no", "nope", "yess", "q"] {
            assert!(!is_affirmative(answer), "{:?} should decline", answer);
        }
    }

    #[test]
    fn test_confirm_reads_one_line() {
        let mut out = Vec::new();
        assert!(confirm(&mut Cursor::new("y\nno\n"), &mut out).unwrap());
        assert!(String::from_utf8(out).unwrap().contains("Would you like to continue?"));

        assert!(!confirm(&mut Cursor::new("n\n"), &mut Vec::new()).unwrap());
        assert!(confirm(&mut Cursor::new("\n"), &mut Vec::new()).unwrap());
    }

    #[test]
    fn test_confirm_end_of_input_declines() {
        assert!(!confirm(&mut Cursor::new(""), &mut Vec::new()).unwrap());
    }

    #[test]
    fn test_print_plan_lists_moves() {
        let plan = build_plan(
            &Layout::with_default_bucket("/photos"),
            [PhotoRecord::new(
                "/photos/vacation/spain/1234422.JPG",
                Some("2012:03:03 11:11:00"),
            )],
        );

        let mut out = Vec::new();
        print_plan(&mut out, &plan).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Found 1 photos to move"));
        assert!(text.contains("/photos/vacation/spain/1234422.JPG --> /photos/2012/03/03"));
    }
}
