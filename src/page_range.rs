use crate::error::SplitError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static RANGE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:-(\d+))?$").expect("range pattern is valid"));

/// An inclusive, 1-based span of pages.
///
/// `start <= end` is not enforced here; a reversed range parses fine and is
/// rejected by [`PageRange::fits`] when checked against a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    pub fn new(start: u32, end: u32) -> Self {
        PageRange { start, end }
    }

    /// Parse a range token like "1-5" or "7"
    pub fn parse(token: &str) -> Result<Self, SplitError> {
        let invalid = || SplitError::InvalidFormat(token.to_string());

        let caps = RANGE_TOKEN.captures(token).ok_or_else(invalid)?;
        let start = parse_page(&caps[1]).ok_or_else(invalid)?;
        let end = match caps.get(2) {
            Some(m) => parse_page(m.as_str()).ok_or_else(invalid)?,
            None => start,
        };

        Ok(PageRange::new(start, end))
    }

    /// Whether this range lies within a document of `total_pages` pages
    pub fn fits(&self, total_pages: u32) -> bool {
        self.start >= 1 && self.start <= self.end && self.end <= total_pages
    }

    pub fn page_count(&self) -> u32 {
        if self.start > self.end {
            0
        } else {
            self.end - self.start + 1
        }
    }
}

// Zero and u32 overflow both count as a malformed token.
fn parse_page(digits: &str) -> Option<u32> {
    digits.parse::<u32>().ok().filter(|&page| page >= 1)
}

impl FromStr for PageRange {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageRange::parse(s)
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
