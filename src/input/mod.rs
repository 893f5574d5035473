//! Parsing of CLI parameter strings into engine inputs

mod parse;

pub use parse::{parse_amount, parse_frequency, parse_rate, ParseError, FREQUENCY_NAMES};
