//! Parser for the award list file.
//!
//! The file is plain text with a header row followed by one record per line:
//!
//! ```text
//! year;title;studios;producers;winner
//! 1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes
//! 1980;Cruising;Lorimar Productions, United Artists;Jerry Weintraub;
//! ```
//!
//! Fields are separated by `;` and trimmed. The winner flag is compared
//! case-insensitively against `yes`; anything else means "not a winner".

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Field separator used by the award list
pub const FIELD_SEPARATOR: char = ';';

/// Number of fields a record line must carry
pub const EXPECTED_FIELDS: usize = 5;

/// Read the whole file and split it into lines.
///
/// Invalid UTF-8 sequences are replaced rather than rejected so a single
/// mis-encoded title does not abort the load.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    let content = String::from_utf8_lossy(&bytes);
    Ok(content.lines().map(|s| s.to_string()).collect())
}

/// Parse the award list file
///
/// The first line is a header and is always skipped. Blank lines are
/// ignored, and lines with fewer than five fields are skipped with a warning.
/// A year that is not a valid number fails the whole load.
pub fn parse_award_records(path: &Path) -> Result<Vec<AwardRecord>> {
    let lines = read_lines(path)?;
    if lines.is_empty() {
        return Err(DataLoadError::ValidationError(format!(
            "{} is empty, expected a header row",
            path.display()
        )));
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut records = Vec::with_capacity(lines.len() - 1);
    // Skip the header row
    for (idx, line) in lines.iter().enumerate().skip(1) {
        let line_no = idx + 1;
        if let Some(record) = parse_award_line(line, line_no, &file_name)? {
            records.push(record);
        }
    }

    Ok(records)
}

/// Parse a single record line.
///
/// Returns `Ok(None)` for lines that carry no record (blank or short lines).
pub fn parse_award_line(line: &str, line_no: usize, file: &str) -> Result<Option<AwardRecord>> {
    let line_trimmed = line.trim();
    if line_trimmed.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line_trimmed.split(FIELD_SEPARATOR).map(str::trim).collect();
    if fields.len() < EXPECTED_FIELDS {
        tracing::warn!(
            "Skipping line {} in {}: expected {} fields but found {}",
            line_no,
            file,
            EXPECTED_FIELDS,
            fields.len()
        );
        return Ok(None);
    }

    let year = fields[0].parse::<Year>().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: format!("Invalid year '{}': {}", fields[0], e),
    })?;

    Ok(Some(AwardRecord {
        year,
        title: fields[1].to_string(),
        studios: fields[2].to_string(),
        producers: fields[3].to_string(),
        winner: parse_winner_flag(fields[4]),
    }))
}

/// Example: "yes" -> true, "YES" -> true, "" -> false, "no" -> false
fn parse_winner_flag(s: &str) -> bool {
    s.eq_ignore_ascii_case("yes")
}
