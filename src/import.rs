//! Bulk contact input.
//!
//! Two plain-text formats are understood:
//!
//! - a phone number list, values separated by newlines or commas
//! - a record list, one `first,last,phone` record per line
//!
//! In both, blank lines are ignored and a line whose first non-blank
//! character is `#` is a comment, so a record cannot start with `#`.
//! A leading UTF-8 byte order mark is stripped.

use crate::error::{ImportError, ImportResult};
use crate::models::NewContact;
use crate::repositories::ContactRepository;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const FIELDS_PER_RECORD: usize = 3;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// One content line of a record list, parsed on its own.
#[derive(Debug)]
pub struct RecordLine {
    /// 1-based line number in the input
    pub line: usize,

    /// The parsed record, or why the line could not be parsed
    pub record: ImportResult<NewContact>,
}

/// Outcome of adding a record list to a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Parse a delimited list of phone numbers.
pub fn parse_phone_numbers(text: &str) -> Vec<String> {
    content_lines(text)
        .flat_map(|(_, line)| line.split(','))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `first,last,phone` records.
///
/// Fields are trimmed and an empty field becomes `None`, so the record is
/// kept here and rejected later when it is added to a store.
///
/// # Errors
///
/// Returns `ImportError::MalformedRecord` for the first line that does not
/// have exactly three fields. Line numbers are 1-based.
pub fn parse_records(text: &str) -> ImportResult<Vec<NewContact>> {
    parse_record_lines(text)
        .into_iter()
        .map(|line| line.record)
        .collect()
}

/// Parse every content line independently, keeping malformed lines.
pub fn parse_record_lines(text: &str) -> Vec<RecordLine> {
    content_lines(text)
        .map(|(line, content)| RecordLine {
            line,
            record: parse_record(line, content),
        })
        .collect()
}

/// Read and parse a record file.
pub fn load_records(path: impl AsRef<Path>) -> ImportResult<Vec<NewContact>> {
    let path = path.as_ref();
    let records = parse_records(&read_file(path)?)?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Read a record file, keeping malformed lines for [`add_records`] to judge.
pub fn load_record_lines(path: impl AsRef<Path>) -> ImportResult<Vec<RecordLine>> {
    let path = path.as_ref();
    let lines = parse_record_lines(&read_file(path)?);
    debug!("Loaded {} record lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Add parsed record lines to a repository, in order.
///
/// A line is rejected when it is malformed or its record fails validation.
/// In lenient mode rejected lines are logged, counted and skipped. In strict
/// mode the first rejected line stops the import; records before it stay
/// added.
///
/// # Errors
///
/// Only in strict mode: `ImportError::MalformedRecord` or
/// `ImportError::Rejected` for the first rejected line.
pub async fn add_records(
    repo: &dyn ContactRepository,
    lines: Vec<RecordLine>,
    strict: bool,
) -> ImportResult<ImportSummary> {
    let mut summary = ImportSummary::default();

    for RecordLine { line, record } in lines {
        let result = match record {
            Ok(record) => repo
                .add_contact(record)
                .await
                .map_err(|source| ImportError::Rejected { line, source }),
            Err(e) => Err(e),
        };

        match result {
            Ok(_) => summary.accepted += 1,
            Err(e) if strict => return Err(e),
            Err(e) => {
                warn!("Skipping record: {}", e);
                summary.rejected += 1;
            }
        }
    }

    Ok(summary)
}

fn read_file(path: &Path) -> ImportResult<String> {
    fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_record(line_no: usize, line: &str) -> ImportResult<NewContact> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELDS_PER_RECORD {
        return Err(ImportError::MalformedRecord {
            line: line_no,
            reason: format!(
                "expected {} fields, found {}",
                FIELDS_PER_RECORD,
                fields.len()
            ),
        });
    }

    Ok(NewContact {
        first_name: non_empty(fields[0]),
        last_name: non_empty(fields[1]),
        phone_number: non_empty(fields[2]),
    })
}

fn non_empty(field: &str) -> Option<String> {
    (!field.is_empty()).then(|| field.to_string())
}

/// Non-blank, non-comment lines with their 1-based line numbers.
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(text)
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}
