//! Formatting helpers shared by every citation type.

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::{Month, NaiveDate};
use serde::Deserialize;

use crate::error::{CitationError, Result};

/// Returns the English ordinal of a number, e.g. `1st`, `22nd`, `13th`.
///
/// Numbers and numeral strings are treated alike: the suffix follows the last
/// digit, except that exactly `11`, `12` and `13` take `th`.
pub fn ordinal(number: impl Display) -> String {
    let number = number.to_string();
    let suffix = match number.as_str() {
        "11" | "12" | "13" => "th",
        n if n.ends_with('1') => "st",
        n if n.ends_with('2') => "nd",
        n if n.ends_with('3') => "rd",
        _ => "th",
    };
    format!("{number}{suffix}")
}

/// `n.d.` when the year is unknown.
pub fn format_year(year: Option<i32>) -> String {
    match year {
        Some(year) => year.to_string(),
        None => "n.d.".to_string(),
    }
}

/// Access stamps are written `DD/MM/YYYY`.
pub fn format_access_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Full English month name, e.g. `December`.
pub fn month_name(month: Month) -> &'static str {
    month.name()
}

/// Parses a calendar month number (1 = January).
pub fn month_from_number(number: u8) -> Result<Month> {
    Month::try_from(number).map_err(|_| CitationError::InvalidMonth(number))
}

/// A page reference: a single page or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "PageRepr")]
pub enum Page {
    Single(u32),
    Range(u32, u32),
}

pub fn format_page(page: &Page) -> String {
    page.to_string()
}

impl Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Single(page) => write!(f, "{page}"),
            Page::Range(start, end) => write!(f, "{start}-{end}"),
        }
    }
}

impl From<u32> for Page {
    fn from(page: u32) -> Self {
        Page::Single(page)
    }
}

impl From<(u32, u32)> for Page {
    fn from((start, end): (u32, u32)) -> Self {
        Page::Range(start, end)
    }
}

impl TryFrom<&[u32]> for Page {
    type Error = CitationError;

    fn try_from(pages: &[u32]) -> Result<Self> {
        match *pages {
            [page] => Ok(Page::Single(page)),
            [start, end] => Ok(Page::Range(start, end)),
            _ => Err(CitationError::InvalidPage(format!("{pages:?}"))),
        }
    }
}

/// Accepts `"5"` or `"28-32"`.
impl FromStr for Page {
    type Err = CitationError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CitationError::InvalidPage(s.to_string());
        let pages = s
            .split('-')
            .map(|p| p.trim().parse::<u32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>>>()?;
        Page::try_from(pages.as_slice())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageRepr {
    Single(u32),
    Many(Vec<u32>),
    Text(String),
}

impl TryFrom<PageRepr> for Page {
    type Error = CitationError;

    fn try_from(repr: PageRepr) -> Result<Self> {
        match repr {
            PageRepr::Single(page) => Ok(Page::Single(page)),
            PageRepr::Many(pages) => Page::try_from(pages.as_slice()),
            PageRepr::Text(text) => text.parse(),
        }
    }
}
