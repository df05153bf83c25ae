//! Fixed-width validation of the two element lines

use satgus_types::tle::UnstructuredTle;

/// Every element line is exactly this many characters, checksum included
pub const TLE_LINE_LENGTH: usize = 69;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TleError {
    #[error("Expected at least 3 lines in the element set text, got {0}")]
    LineCount(usize),
    #[error("TLE line {line} has length {len}, expected 69")]
    LineLength { line: u8, len: usize },
    #[error("TLE line {line} does not start with '{line} '")]
    LineNumber { line: u8 },
    #[error("TLE line {line} checksum mismatch, expected {expected} but computed {computed}")]
    Checksum { line: u8, expected: u32, computed: u32 },
    #[error("Malformed TLE text. {0}")]
    Malformed(String),
}

/// Modulo-10 checksum over the first 68 characters.
/// Digits count their value, '-' counts as 1, everything else is ignored.
pub fn checksum(line: &str) -> u32 {
    line.chars()
        .take(TLE_LINE_LENGTH - 1)
        .map(|c| match c {
            '-' => 1,
            c => c.to_digit(10).unwrap_or(0),
        })
        .sum::<u32>()
        % 10
}

pub fn check_line(number: u8, line: &str) -> Result<(), TleError> {
    if !line.is_ascii() {
        return Err(TleError::Malformed(format!(
            "line {number} contains non-ASCII characters"
        )));
    }
    if line.len() != TLE_LINE_LENGTH {
        return Err(TleError::LineLength {
            line: number,
            len: line.len(),
        });
    }
    let prefix = [b'0' + number, b' '];
    if !line.as_bytes().starts_with(&prefix) {
        return Err(TleError::LineNumber { line: number });
    }

    let last = line.as_bytes()[TLE_LINE_LENGTH - 1] as char;
    let expected = last.to_digit(10).ok_or_else(|| {
        TleError::Malformed(format!("line {number} checksum '{last}' is not a digit"))
    })?;
    let computed = checksum(line);
    if expected != computed {
        return Err(TleError::Checksum {
            line: number,
            expected,
            computed,
        });
    }
    Ok(())
}

/// Checks both element lines of a set
pub fn check_tle(tle: &UnstructuredTle) -> Result<(), TleError> {
    check_line(1, &tle.line1)?;
    check_line(2, &tle.line2)
}
