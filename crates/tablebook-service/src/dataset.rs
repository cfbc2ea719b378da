//! Reading the opening-hours dataset.
//!
//! The dataset is headerless CSV with two fields per record: the venue name
//! and its free-text hours, e.g.
//!
//! ```text
//! "Kushi Tsuru","Mon-Sun 11:30 am - 9 pm"
//! "Osakaya Restaurant","Mon-Thu, Sun 11:30 am - 9 pm  / Fri-Sat 11:30 am - 9:30 pm"
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{ServiceError, ServiceResult};

/// One dataset record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRow {
    /// 1-based line the record starts on.
    pub line: u64,
    pub name: String,
    pub periods_text: String,
}

/// Reads every record from the file at `path`.
///
/// ## Errors
/// Returns `Load` if the file cannot be opened or is not readable CSV/UTF-8,
/// and `MalformedRow` for a record with fewer than two fields.
pub fn read_path(path: &Path) -> ServiceResult<Vec<DatasetRow>> {
    let origin = path.display().to_string();
    let data = fs::read(path).map_err(|e| load_error(&origin, e.into()))?;

    collect_rows(&data, &origin)
}

/// Reads every record from an in-memory or streamed source.
///
/// ## Errors
/// Same as [`read_path`], minus the open step.
pub fn read_from<R: Read>(mut source: R) -> ServiceResult<Vec<DatasetRow>> {
    let origin = "<reader>";
    let mut data = Vec::new();
    source
        .read_to_end(&mut data)
        .map_err(|e| load_error(origin, e.into()))?;

    collect_rows(&data, origin)
}

fn load_error(origin: &str, source: csv::Error) -> ServiceError {
    ServiceError::Load {
        origin: origin.to_string(),
        source,
    }
}

fn collect_rows(data: &[u8], origin: &str) -> ServiceResult<Vec<DatasetRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);
    let mut lines = LineCounter::new(data);
    let mut rows = Vec::new();
    let mut record = StringRecord::new();

    loop {
        let offset = reader.position().byte();
        let more = reader
            .read_record(&mut record)
            .map_err(|source| load_error(origin, source))?;
        if !more {
            break;
        }

        let line = lines.record_start(offset);
        rows.push(to_row(&record, line)?);
    }

    tracing::debug!(origin, rows = rows.len(), "Read dataset");
    Ok(rows)
}

/// Maps reader byte offsets to 1-based physical lines.
///
/// The reader skips blank lines silently, so a record's line is the line at
/// `offset` plus any empty lines directly after it.
struct LineCounter<'a> {
    data: &'a [u8],
    scanned: usize,
    line: u64,
}

impl<'a> LineCounter<'a> {
    const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            scanned: 0,
            line: 1,
        }
    }

    fn record_start(&mut self, offset: u64) -> u64 {
        let target = usize::try_from(offset).map_or(self.data.len(), |o| o.min(self.data.len()));
        let target = target.max(self.scanned);

        for &byte in &self.data[self.scanned..target] {
            if byte == b'\n' {
                self.line += 1;
            }
        }
        self.scanned = target;

        while let Some(&byte) = self.data.get(self.scanned) {
            match byte {
                b'\n' => self.line += 1,
                b'\r' => {}
                _ => break,
            }
            self.scanned += 1;
        }

        self.line
    }
}

fn to_row(record: &StringRecord, line: u64) -> ServiceResult<DatasetRow> {
    let (Some(name), Some(periods_text)) = (record.get(0), record.get(1)) else {
        return Err(ServiceError::MalformedRow {
            line,
            fields: record.len(),
        });
    };

    if record.len() > 2 {
        tracing::warn!(line, fields = record.len(), "Ignoring extra dataset fields");
    }

    Ok(DatasetRow {
        line,
        name: name.to_string(),
        periods_text: periods_text.to_string(),
    })
}
