//! Semicolon-separated CSV rendering of entry lists.
//!
//! The delimiter and the German column headers match the files the export
//! has always produced, so existing spreadsheet imports keep working.

use std::io::Write;

use zeitlog_domain::{MergedBlock, Result, TimeEntry, ZeitlogError};

const ENTRY_HEADERS: [&str; 7] =
    ["Datum", "Start", "Ende", "Projekt", "Tätigkeit", "Stunden", "Ort"];
const BLOCK_HEADERS: [&str; 7] =
    ["Datum", "Start", "Ende", "Projekte", "Tätigkeiten", "Stunden", "Einträge"];

fn writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().delimiter(b';').from_writer(out)
}

fn map_csv_error(err: csv::Error) -> ZeitlogError {
    ZeitlogError::Internal(format!("csv write failed: {err}"))
}

/// Render one row per entry.
pub fn write_entries<W: Write>(out: W, entries: &[TimeEntry]) -> Result<()> {
    let mut writer = writer(out);
    writer.write_record(ENTRY_HEADERS).map_err(map_csv_error)?;
    for entry in entries {
        writer
            .write_record([
                entry.date.as_str(),
                entry.start.as_str(),
                entry.end.as_str(),
                entry.project.as_str(),
                entry.activity.as_str(),
                &format!("{:.2}", entry.hours),
                if entry.remote { "Homeoffice" } else { "Büro" },
            ])
            .map_err(map_csv_error)?;
    }
    writer.flush().map_err(|e| ZeitlogError::Internal(format!("csv flush failed: {e}")))?;
    Ok(())
}

/// Render one row per merged block.
pub fn write_blocks<W: Write>(out: W, blocks: &[MergedBlock]) -> Result<()> {
    let mut writer = writer(out);
    writer.write_record(BLOCK_HEADERS).map_err(map_csv_error)?;
    for block in blocks {
        writer
            .write_record([
                block.date.as_str(),
                block.start.as_str(),
                block.end.as_str(),
                &block.projects.join(", "),
                &block.activities.join(", "),
                &format!("{:.2}", block.hours),
                &block.entry_count.to_string(),
            ])
            .map_err(map_csv_error)?;
    }
    writer.flush().map_err(|e| ZeitlogError::Internal(format!("csv flush failed: {e}")))?;
    Ok(())
}
