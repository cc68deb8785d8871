//! Line-oriented record files.
//!
//! Every data file holds one record per line. Records are encoded as CSV
//! rows, so values that contain the delimiter are quoted rather than
//! corrupting the line, while plain values look exactly like a bare
//! comma-joined list.
//!
//! Loading is forgiving: blank lines are ignored, a missing file is an empty
//! collection, and lines that fail to decode are skipped with a warning.
//! Saving is a full rewrite through a temporary file that is atomically
//! renamed over the target.
//!
//! # Examples
//!
//! ```
//! use busres::store::RecordStore;
//! use busres::Customer;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = RecordStore::new(dir.path().join("customers.txt"));
//!
//! let alice = Customer::builder("Alice").age(30).build().unwrap();
//! store.save([&alice]).unwrap();
//!
//! let loaded = store.load::<Customer>().unwrap();
//! assert_eq!(loaded.records, vec![alice]);
//! assert!(loaded.skipped.is_empty());
//! ```

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

#[cfg(test)]
mod proptests;

/// A value that can be stored as a fixed-width line record.
pub trait Record: Sized {
    /// Short label used in warnings (e.g. "bus").
    const KIND: &'static str;

    /// Exact number of fields in an encoded record.
    const FIELD_COUNT: usize;

    /// Returns the fields in storage order.
    fn to_fields(&self) -> Vec<String>;

    /// Rebuilds the value from exactly [`Record::FIELD_COUNT`] fields.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when a field cannot be parsed or the
    /// resulting value is invalid.
    fn from_fields(fields: &StringRecord) -> std::result::Result<Self, String>;
}

/// Parses a numeric field, producing a readable reason on failure.
pub(crate) fn parse_field<T: FromStr>(
    fields: &StringRecord,
    index: usize,
    label: &str,
) -> std::result::Result<T, String> {
    let raw = fields.get(index).unwrap_or_default().trim();
    raw.parse().map_err(|_| format!("invalid {label} '{raw}'"))
}

/// Encodes a record as a single line, without the trailing newline.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn encode_line<T: Record>(record: &T) -> Result<String> {
    encode_fields(&record.to_fields(), QuoteStyle::Necessary)
}

/// Encodes raw fields as a single line with the given quoting policy.
pub(crate) fn encode_fields(fields: &[String], quote_style: QuoteStyle) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(quote_style)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(fields)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))?;
    let line = String::from_utf8(bytes)
        .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    Ok(line.trim_end_matches('\n').to_string())
}

/// Decodes one line into a record.
///
/// # Errors
///
/// Returns [`Error::Format`] if the line does not hold exactly
/// `T::FIELD_COUNT` fields or a field fails to parse.
pub fn decode_line<T: Record>(line: &str) -> Result<T> {
    let format_error = |reason: String| Error::Format {
        kind: T::KIND,
        line: line.to_string(),
        reason,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let mut fields = StringRecord::new();
    let found = reader
        .read_record(&mut fields)
        .map_err(|e| format_error(e.to_string()))?;

    if !found {
        return Err(format_error("line is empty".to_string()));
    }

    if fields.len() != T::FIELD_COUNT {
        return Err(format_error(format!(
            "expected {} fields, found {}",
            T::FIELD_COUNT,
            fields.len()
        )));
    }

    T::from_fields(&fields).map_err(format_error)
}

/// A line that was skipped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the file.
    pub line_number: usize,
    /// The trimmed line content.
    pub content: String,
    /// Why the line was skipped.
    pub reason: String,
}

/// Records decoded from a file, plus the lines that were skipped.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    /// Successfully decoded records, in file order.
    pub records: Vec<T>,
    /// Lines that failed to decode.
    pub skipped: Vec<SkippedLine>,
}

impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// A single data file holding line records.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Creates a store backed by the given file. Nothing is touched on disk.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks whether the backing file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads all non-blank lines, trimmed, paired with 1-based line numbers.
    ///
    /// A missing file yields no lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn read_lines(&self) -> Result<Vec<(usize, String)>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(contents
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .map(|(n, line)| (n, line.to_string()))
            .collect())
    }

    /// Replaces the file contents with the given lines.
    ///
    /// Lines are written to a temporary file next to the target, flushed to
    /// disk and renamed over it. Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory, the temporary file or the rename
    /// fails.
    pub fn write_lines<I, S>(&self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(&mut tmp);
            for line in lines {
                writeln!(writer, "{}", line.as_ref())?;
            }
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        log::debug!("wrote {}", self.path.display());
        Ok(())
    }

    /// Loads every decodable record.
    ///
    /// Undecodable lines are skipped, logged as warnings and reported in
    /// [`Loaded::skipped`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists but cannot be read.
    pub fn load<T: Record>(&self) -> Result<Loaded<T>> {
        let mut loaded = Loaded::default();

        for (line_number, line) in self.read_lines()? {
            match decode_line::<T>(&line) {
                Ok(record) => loaded.records.push(record),
                Err(e) => {
                    log::warn!(
                        "skipping invalid line {line_number} in {}: {e}",
                        self.path.display()
                    );
                    loaded.skipped.push(SkippedLine {
                        line_number,
                        content: line,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(loaded)
    }

    /// Rewrites the file with one encoded line per record.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn save<'a, T, I>(&self, records: I) -> Result<()>
    where
        T: Record + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let lines = records
            .into_iter()
            .map(encode_line)
            .collect::<Result<Vec<_>>>()?;
        self.write_lines(lines)
    }
}
