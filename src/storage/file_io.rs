//! CSV file I/O utilities
//!
//! Every helper opens the file, does one read or one write, and drops the
//! handle before returning.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::error::TrackerError;

fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(inner)
}

/// Read every record after the header row
///
/// Returns `TrackerError::StoreNotFound` if the file does not exist. Records
/// may have any number of fields.
pub fn read_csv_records<P: AsRef<Path>>(path: P) -> Result<Vec<StringRecord>, TrackerError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TrackerError::StoreNotFound(path.to_path_buf()),
        _ => TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)),
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for (line_num, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            TrackerError::Csv(format!(
                "Failed to read {} record {}: {}",
                path.display(),
                line_num + 1,
                e
            ))
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Append one record to the end of a CSV file, creating the file if needed
pub fn append_csv_record<P, I, T>(path: P, fields: I) -> Result<(), TrackerError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let path = path.as_ref();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = csv_writer(file);
    writer.write_record(fields)?;
    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Write a header and rows to a CSV file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_csv_atomic<P, R, T>(path: P, header: &[&str], rows: R) -> Result<(), TrackerError>
where
    P: AsRef<Path>,
    R: IntoIterator,
    R::Item: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv_writer(BufWriter::new(file));
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }

    let buffered = writer
        .into_inner()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;
    let file = buffered
        .into_inner()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    file.sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
