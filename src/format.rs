//! Text form of [`Complex`]: `(<re>, <im>)`.
//!
//! Reading follows formatted stream extraction. Whitespace is skipped before
//! each of the three punctuation characters and each of the two numbers, and
//! a number is the longest prefix that reads as an `f64` literal. In
//! [`ParseMode::Lenient`] any character is accepted in the punctuation
//! positions; [`ParseMode::Strict`] requires `(`, `,` and `)`. An exponent
//! marker must be followed by digits, so `1e` is an invalid number.
//!
//! ```
//! use cplx::prelude::*;
//!
//! let z: Complex = "(3, -2)".parse().unwrap();
//! assert_eq!(z, Complex::new(3.0, -2.0));
//! assert_eq!(z.to_string(), "(3, -2)");
//! ```

use crate::complex::Complex;
use crate::error::ParseComplexError;
use regex::Regex;
use simple_error::{bail, SimpleError};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::{debug, trace};

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?|(?i:infinity|inf|nan))")
        .expect("Invalid regex!")
});

/// How the punctuation of a complex literal is checked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseMode {
    /// Any non-whitespace character is taken as punctuation
    #[default]
    Lenient,
    /// Punctuation must be `(`, `,` and `)`
    Strict,
}

impl ParseMode {
    pub fn to_str(&self) -> &str {
        match self {
            ParseMode::Lenient => "lenient",
            ParseMode::Strict => "strict",
        }
    }
}

impl FromStr for ParseMode {
    type Err = SimpleError;

    fn from_str(val: &str) -> Result<ParseMode, SimpleError> {
        match val.trim().to_lowercase().as_str() {
            "lenient" => Ok(ParseMode::Lenient),
            "strict" => Ok(ParseMode::Strict),
            _ => bail!("string not a valid parse mode"),
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.real(), p, self.imag()),
            None => write!(f, "({}, {})", self.real(), self.imag()),
        }
    }
}

/// Cursor that reads successive complex literals out of a string
///
/// A failed read leaves the cursor where the literal started. Used as an
/// iterator it yields the error once and then stops, the way a stream stops
/// extracting once its fail state is set.
#[derive(Clone, Debug)]
pub struct ComplexReader<'a> {
    input: &'a str,
    pos: usize,
    mode: ParseMode,
    failed: bool,
}

impl<'a> ComplexReader<'a> {
    pub fn new(input: &'a str) -> Self {
        ComplexReader::with_mode(input, ParseMode::default())
    }

    pub fn with_mode(input: &'a str, mode: ParseMode) -> Self {
        ComplexReader {
            input,
            pos: 0,
            mode,
            failed: false,
        }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Byte offset of the next unread character
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unconsumed tail of the input
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Read `<char><f64><char><f64><char>` and build a complex number from
    /// the two numbers
    pub fn read_complex(&mut self) -> Result<Complex, ParseComplexError> {
        let start = self.pos;
        let result = self.read_literal();
        match &result {
            Ok(z) => trace!(
                position = start,
                re = z.real(),
                im = z.imag(),
                "read complex literal"
            ),
            Err(err) => {
                debug!(position = err.position(), error = %err, "failed to read complex literal");
                self.pos = start;
            }
        }
        result
    }

    fn read_literal(&mut self) -> Result<Complex, ParseComplexError> {
        self.read_separator('(')?;
        let re = self.read_number()?;
        self.read_separator(',')?;
        let im = self.read_number()?;
        self.read_separator(')')?;
        Ok(Complex::new(re, im))
    }

    fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn read_separator(&mut self, expected: char) -> Result<(), ParseComplexError> {
        self.skip_whitespace();
        let position = self.pos;
        let found = match self.remaining().chars().next() {
            Some(c) => c,
            None => {
                return Err(ParseComplexError::UnexpectedEnd {
                    position,
                    expected: "a separator",
                })
            }
        };
        if self.mode == ParseMode::Strict && found != expected {
            return Err(ParseComplexError::UnexpectedCharacter {
                position,
                expected,
                found,
            });
        }
        self.pos += found.len_utf8();
        Ok(())
    }

    fn read_number(&mut self) -> Result<f64, ParseComplexError> {
        self.skip_whitespace();
        let position = self.pos;
        let rest = self.remaining();
        if rest.is_empty() {
            return Err(ParseComplexError::UnexpectedEnd {
                position,
                expected: "a number",
            });
        }
        let invalid = || ParseComplexError::InvalidNumber {
            position,
            found: offending_token(rest).to_string(),
        };
        let token = NUMBER.find(rest).ok_or_else(invalid)?.as_str();
        // an exponent marker with no digits after it
        let numeric = token.ends_with(|c: char| c.is_ascii_digit() || c == '.');
        if numeric && rest[token.len()..].starts_with(['e', 'E']) {
            return Err(invalid());
        }
        let value = token.parse::<f64>().map_err(|_| invalid())?;
        self.pos += token.len();
        Ok(value)
    }
}

impl Iterator for ComplexReader<'_> {
    type Item = Result<Complex, ParseComplexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.skip_whitespace();
        if self.remaining().is_empty() {
            return None;
        }
        let result = self.read_complex();
        self.failed = result.is_err();
        Some(result)
    }
}

// The run of characters up to the next whitespace or separator, for messages
fn offending_token(rest: &str) -> &str {
    let end = rest
        .find(|c: char| c.is_whitespace() || c == ',' || c == ')')
        .unwrap_or(rest.len());
    if end == 0 {
        let first = rest.chars().next().map_or(0, char::len_utf8);
        &rest[..first]
    } else {
        &rest[..end]
    }
}

/// Read one complex literal from the front of `text`, returning it with the
/// unconsumed tail
pub fn parse_complex(text: &str, mode: ParseMode) -> Result<(Complex, &str), ParseComplexError> {
    let mut reader = ComplexReader::with_mode(text, mode);
    let z = reader.read_complex()?;
    Ok((z, reader.remaining()))
}

impl FromStr for Complex {
    type Err = ParseComplexError;

    /// Lenient read of exactly one literal; only whitespace may follow it
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut reader = ComplexReader::new(s);
        let z = reader.read_complex()?;
        reader.skip_whitespace();
        if !reader.remaining().is_empty() {
            return Err(ParseComplexError::TrailingInput {
                position: reader.position(),
            });
        }
        Ok(z)
    }
}
