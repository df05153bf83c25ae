pub use crate::parser::{parse_tle_response, parse_tle_set, ParseError};
pub use crate::tle::{check_line, check_tle, checksum, TleError, TLE_LINE_LENGTH};

pub mod parser;
pub mod tle;
