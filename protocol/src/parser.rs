//! A small parser for the 3-line (name, line 1, line 2) element set text format

use crate::tle::{check_tle, TleError};
use nom::{
    branch::alt,
    character::complete::{line_ending, multispace0, not_line_ending},
    combinator::eof,
    error::ErrorKind,
    multi::fold_many0,
};
use satgus_types::prelude::*;
use tracing::debug;

pub type Result<I, O, E = ParseError<I>> = std::result::Result<(I, O), nom::Err<E>>;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParseError<I> {
    #[error("Empty line in element set")]
    EmptyLine,
    #[error("Parse error")]
    Nom(I, ErrorKind),
}

/// Parses every name/line1/line2 triple in `set`, in order.
/// Blank lines between triples are skipped and the final line may omit its line ending.
pub fn parse_tle_set(set: &str) -> Result<&str, Vec<UnstructuredTle>> {
    let (s, _) = multispace0(set)?;
    let (s, tle_set) = fold_many0(tle, Vec::new, |mut tle_set: Vec<UnstructuredTle>, tle| {
        tle_set.push(tle);
        tle_set
    })(s)?;
    Ok((s, tle_set))
}

/// Extracts the first element set from a fetched response body.
/// Both element lines must pass the fixed-width and checksum checks.
pub fn parse_tle_response(body: &str) -> std::result::Result<UnstructuredTle, TleError> {
    let body = body.trim();
    let line_count = body.lines().filter(|l| !l.trim().is_empty()).count();
    if line_count < 3 {
        return Err(TleError::LineCount(line_count));
    }

    let (_, mut tle_set) =
        parse_tle_set(body).map_err(|e| TleError::Malformed(e.to_string()))?;
    debug!(sets = tle_set.len(), "Parsed element set response");
    if tle_set.is_empty() {
        return Err(TleError::Malformed("no complete element set".to_owned()));
    }
    let tle = tle_set.swap_remove(0);
    check_tle(&tle)?;
    Ok(tle)
}

fn tle(s: &str) -> Result<&str, UnstructuredTle> {
    let (s, name) = non_empty_line(s)?;
    let (s, _) = line_ending(s)?;
    let (s, line1) = non_empty_line(s)?;
    let (s, _) = line_ending(s)?;
    let (s, line2) = non_empty_line(s)?;
    let (s, _) = alt((line_ending, eof))(s)?;
    let (s, _) = multispace0(s)?;
    Ok((s, UnstructuredTle::new(name, line1, line2)))
}

fn non_empty_line(s: &str) -> Result<&str, &str> {
    let (s, line) = not_line_ending(s)?;
    let line = line.trim();
    if line.is_empty() {
        return Err(nom::Err::Error(ParseError::EmptyLine));
    }
    Ok((s, line))
}

impl<I> nom::error::ParseError<I> for ParseError<I> {
    fn from_error_kind(s: I, kind: ErrorKind) -> Self {
        ParseError::Nom(s, kind)
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const TLE_SET: &str = indoc! {r#"GEO1
        1 37481U 11019A   23190.45078927 -.00000009  00000-0  00000+0 0  9991
        2 37481   2.3847  40.6385 0001640  70.7486  43.7146  1.00272292 44578

        GEO2
        1 39120U 13011A   23190.50177227 -.00000262  00000-0  00000+0 0  9997
        2 39120   2.3950  38.7964 0001772  68.0002 323.0070  1.00271163 37822
        "#};

    #[test]
    fn parse_tle() {
        let (s, tle_set) = parse_tle_set(TLE_SET).unwrap();
        assert!(s.is_empty());
        assert_eq!(tle_set.len(), 2);
        assert_eq!(tle_set[0].satellite_name, "GEO1");
        assert_eq!(tle_set[1].satellite_name, "GEO2");
        assert!(tle_set[1].line2.ends_with("37822"));
        assert_eq!(tle_set[0].fetched_at, None);
    }

    #[test]
    fn final_line_without_line_ending() {
        let (s, tle_set) = parse_tle_set(TLE_SET.trim_end()).unwrap();
        assert!(s.is_empty());
        assert_eq!(tle_set.len(), 2);
    }

    #[test]
    fn trailing_whitespace_and_crlf() {
        let text = "VANGUARD 1   \r\n\
            1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753  \r\n\
            2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667\r\n";
        let tle = parse_tle_response(text).unwrap();
        assert_eq!(tle.satellite_name, "VANGUARD 1");
        assert_eq!(tle.line1.len(), 69);
        assert_eq!(tle.line2.len(), 69);
    }

    #[test]
    fn response_takes_first_set() {
        let tle = parse_tle_response(TLE_SET).unwrap();
        assert_eq!(tle.satellite_name, "GEO1");
        assert!(tle.line1.starts_with("1 37481U"));
    }

    #[test]
    fn response_too_short() {
        assert_eq!(parse_tle_response(""), Err(TleError::LineCount(0)));
        assert_eq!(
            parse_tle_response("\n  SATGUS\n1 62713U\n\n"),
            Err(TleError::LineCount(2))
        );
    }

    #[test]
    fn response_with_bad_element_line() {
        let swapped = "VANGUARD 1\n\
            2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667\n\
            1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753\n";
        assert_eq!(
            parse_tle_response(swapped),
            Err(TleError::LineNumber { line: 1 })
        );

        let short = "VANGUARD 1\n1 00005U 58002B\n2 00005  34.2682\n";
        assert_eq!(
            parse_tle_response(short),
            Err(TleError::LineLength { line: 1, len: 15 })
        );
    }

    #[test]
    fn incomplete_set_is_left_unparsed() {
        let (s, tle_set) = parse_tle_set("GEO1\n1 37481U\n").unwrap();
        assert_eq!(s, "GEO1\n1 37481U\n");
        assert!(tle_set.is_empty());
        assert_eq!(non_empty_line("  \n"), Err(nom::Err::Error(ParseError::EmptyLine)));
    }

    #[test]
    fn empty_input_parses_to_no_sets() {
        let (s, tle_set) = parse_tle_set("").unwrap();
        assert!(s.is_empty());
        assert!(tle_set.is_empty());
    }
}
