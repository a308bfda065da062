//! JSON Lines writer

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::trace::{TraceStep, TRACER};
use crate::{Error, Result};

/// Write one JSON object per line to `writer`.
pub fn write_jsonl<W, T>(writer: W, records: &[T]) -> Result<()>
where
    W: Write,
    T: Serialize,
{
    let mut writer = BufWriter::new(writer);
    for record in records {
        serde_json::to_writer(&mut writer, record)
            .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write records to `path`, creating parent directories as needed.
///
/// Returns the number of records written.
pub fn save_jsonl<T: Serialize>(records: &[T], path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    TRACER.span(TraceStep::Io, || -> Result<usize> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)
            .map_err(|e| Error::Io(format!("Cannot create {}: {e}", path.display())))?;
        write_jsonl(file, records)?;
        Ok(records.len())
    })
}

/// Read records written by [`save_jsonl`].
pub fn load_jsonl<T>(path: impl AsRef<Path>) -> Result<Vec<T>>
where
    T: serde::de::DeserializeOwned,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Io(format!("Cannot read {}: {e}", path.display())))?;

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_num, line)| {
            serde_json::from_str(line).map_err(|e| {
                Error::Serialization(format!("Invalid JSONL at line {}: {e}", line_num + 1))
            })
        })
        .collect()
}
