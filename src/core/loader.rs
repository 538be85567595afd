use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder};

use crate::core::time::{parse_time, ParseMode};
use crate::domain::model::{Visit, VisitorDataset};
use crate::domain::ports::VisitSource;
use crate::utils::error::{PeakError, Result};

/// Reads `entry,exit` lines from any reader into a dataset.
///
/// Blank lines are skipped in both modes. In strict mode every other line
/// must hold exactly two valid UTF-8 times with the entry not after the exit.
/// Lenient mode decodes invalid UTF-8 lossily instead of failing.
pub fn load_visits<R: Read>(reader: R, mode: ParseMode) -> Result<VisitorDataset> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut visits = Vec::new();
    for record in csv_reader.byte_records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }

        let line = record.position().map_or(0, |pos| pos.line());
        visits.push(parse_record(&record, line, mode)?);
    }

    tracing::debug!("Loaded {} visits", visits.len());
    VisitorDataset::new(visits)
}

/// A line with no comma and nothing but whitespace. `,` alone is two empty
/// fields, not a blank line.
fn is_blank(record: &ByteRecord) -> bool {
    record.len() == 1 && record[0].iter().all(u8::is_ascii_whitespace)
}

fn decode_field<'a>(raw: &'a [u8], line: u64, mode: ParseMode) -> Result<Cow<'a, str>> {
    match mode {
        ParseMode::Lenient => Ok(String::from_utf8_lossy(raw)),
        ParseMode::Strict => std::str::from_utf8(raw)
            .map(Cow::Borrowed)
            .map_err(|e| PeakError::ParseError {
                line,
                value: String::from_utf8_lossy(raw).into_owned(),
                reason: format!("invalid UTF-8: {}", e),
            }),
    }
}

fn parse_record(record: &ByteRecord, line: u64, mode: ParseMode) -> Result<Visit> {
    if mode == ParseMode::Strict && record.len() != 2 {
        return Err(PeakError::ParseError {
            line,
            value: record
                .iter()
                .map(String::from_utf8_lossy)
                .collect::<Vec<_>>()
                .join(","),
            reason: format!("expected 2 comma-separated fields, found {}", record.len()),
        });
    }

    let entry_str = decode_field(record.get(0).unwrap_or(b""), line, mode)?;
    let exit_str = decode_field(record.get(1).unwrap_or(b""), line, mode)?;

    let parse = |value: &str| {
        parse_time(value, mode).map_err(|e| PeakError::ParseError {
            line,
            value: value.to_string(),
            reason: e.to_string(),
        })
    };
    let visit = Visit::new(parse(&entry_str)?, parse(&exit_str)?);

    if visit.entry > visit.exit {
        if mode == ParseMode::Strict {
            return Err(PeakError::InvalidVisitError {
                line,
                entry: entry_str.trim().to_string(),
                exit: exit_str.trim().to_string(),
            });
        }
        tracing::warn!("Line {}: entry {} is after exit {}", line, entry_str, exit_str);
    }

    Ok(visit)
}

/// Visits stored in a file on disk. The file is only open during `load`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    mode: ParseMode,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P, mode: ParseMode) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            mode,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VisitSource for FileSource {
    fn load(&self) -> Result<VisitorDataset> {
        let file = File::open(&self.path).map_err(|source| PeakError::FileAccessError {
            path: self.path.display().to_string(),
            source,
        })?;
        load_visits(BufReader::new(file), self.mode)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Visits held in memory, e.g. text already read from elsewhere.
#[derive(Debug, Clone)]
pub struct ReaderSource {
    content: String,
    mode: ParseMode,
}

impl ReaderSource {
    pub fn new(content: impl Into<String>, mode: ParseMode) -> Self {
        Self {
            content: content.into(),
            mode,
        }
    }
}

impl VisitSource for ReaderSource {
    fn load(&self) -> Result<VisitorDataset> {
        load_visits(self.content.as_bytes(), self.mode)
    }

    fn describe(&self) -> String {
        format!("<memory: {} bytes>", self.content.len())
    }
}
