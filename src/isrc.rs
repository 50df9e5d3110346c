//! ISRC syntax validation.
//!
//! An ISRC is 12 characters with no separators:
//! 2 letters (country prefix), 3 alphanumerics (registrant),
//! 2 digits (year of reference) and 5 digits (designation).
//! Letters are accepted in either case.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{IsrcError, Result};

/// Number of characters in an ISRC.
pub const ISRC_LEN: usize = 12;

/// Anchored at both ends so a longer string never matches on its prefix.
static ISRC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2}[A-Za-z0-9]{3}[0-9]{7}$").expect("Invalid ISRC regex")
});

/// Returns true if `code` is a syntactically valid ISRC.
///
/// Never fails: malformed input of any length simply yields `false`.
#[must_use]
pub fn is_valid(code: &str) -> bool {
    code.len() == ISRC_LEN && ISRC_REGEX.is_match(code)
}

/// A validated ISRC.
///
/// Compared and ordered by its text as supplied, so `usrc17607839` and
/// `USRC17607839` are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Isrc(String);

impl Isrc {
    /// Parse a code, rejecting anything [`is_valid`] rejects.
    ///
    /// # Errors
    /// Returns [`IsrcError::MalformedIsrc`] if the code is not a valid ISRC.
    pub fn parse(code: &str) -> Result<Self> {
        if is_valid(code) {
            Ok(Self(code.to_string()))
        } else {
            Err(IsrcError::MalformedIsrc(code.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-letter country prefix, upper-cased.
    #[must_use]
    pub fn country_code(&self) -> String {
        self.0[..2].to_ascii_uppercase()
    }

    #[must_use]
    pub fn registrant(&self) -> &str {
        &self.0[2..5]
    }

    /// The two-digit year of reference (characters 6 and 7).
    #[must_use]
    pub fn year_digits(&self) -> &str {
        &self.0[5..7]
    }

    #[must_use]
    pub fn designation(&self) -> &str {
        &self.0[7..]
    }

    /// Calendar year of reference.
    ///
    /// The two digits are read as `20YY`; a year later than `current_year`
    /// is rolled back a century to `19YY`.
    #[must_use]
    pub fn reference_year(&self, current_year: i32) -> i32 {
        // Two ASCII digits, guaranteed by construction.
        let yy: i32 = self
            .year_digits()
            .bytes()
            .fold(0, |acc, b| acc * 10 + i32::from(b - b'0'));
        let year = 2000 + yy;
        if year > current_year { year - 100 } else { year }
    }
}

impl FromStr for Isrc {
    type Err = IsrcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Isrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Isrc {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "isrc_tests.rs"]
mod tests;
