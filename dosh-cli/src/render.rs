//! Rendering of command outcomes to the terminal.
//!
//! Listings render as a tab-separated table or as JSON; the other
//! outcomes render as one-line confirmations. Warnings are the
//! caller's business (they go to the logger, not stdout).

use std::io::{self, Write};

use dosh::{format_size, Outcome, TreeReport};

use crate::cli::OutputFormat;

/// Column headers for the listing table.
const COLUMN_HEADERS: [&str; 6] = ["name", "kind", "depth", "dirs", "files", "size"];

/// Render a command outcome to `out`.
///
/// `Exit` renders nothing; the read loop owns the farewell.
pub fn render(out: &mut impl Write, outcome: &Outcome, format: OutputFormat) -> io::Result<()> {
    match outcome {
        Outcome::ChangedDirectory(path) => writeln!(out, "{}", path.display()),
        Outcome::Listing(report) => match format {
            OutputFormat::Table => render_table(out, report),
            OutputFormat::Json => render_json(out, report),
        },
        Outcome::Created(path) => writeln!(out, "Created '{}'", path.display()),
        Outcome::Renamed { from, to } => writeln!(
            out,
            "Renamed '{}' to '{}'",
            from.display(),
            to.display()
        ),
        Outcome::Copied {
            source,
            destination,
            ..
        } => writeln!(
            out,
            "Copied '{}' into '{}'",
            source.display(),
            destination.display()
        ),
        Outcome::Moved {
            source,
            destination,
            ..
        } => writeln!(
            out,
            "Moved '{}' into '{}'",
            source.display(),
            destination.display()
        ),
        Outcome::Deleted(path) => writeln!(out, "Deleted '{}'", path.display()),
        Outcome::DeletionDeclined(_) => writeln!(out, "Deletion cancelled"),
        Outcome::Exit => Ok(()),
    }
}

/// Render a report as a tab-separated table.
fn render_table(out: &mut impl Write, report: &TreeReport) -> io::Result<()> {
    if report.is_empty() {
        return writeln!(out, "(empty)");
    }

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for row in &report.rows {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            row.name,
            row.kind,
            row.max_depth,
            row.dir_count,
            row.file_count,
            format_size(row.total_bytes),
        )?;
    }

    Ok(())
}

/// Render a report as a JSON array of row objects.
fn render_json(out: &mut impl Write, report: &TreeReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &report.rows)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(out)
}
