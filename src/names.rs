use std::str::FromStr;

use crate::error::{CitationError, Result};

/// An ordered list of full names ("Given Names Family"), as written on a source.
///
/// The family name is the last whitespace-separated token of each name; every
/// token before it is a given name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    names: Vec<String>,
}

/// How family names are joined inside a parenthetical citation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InTextStyle {
    /// "A, B and C"
    #[default]
    Listed,
    /// "A", "A and B", then "A et al." for three or more.
    Abbreviated,
}

impl Names {
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(CitationError::EmptyNames);
        }
        if let Some(idx) = names.iter().position(|n| n.trim().is_empty()) {
            return Err(CitationError::EmptyName(idx));
        }
        Ok(Names { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed value; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The full names as given.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Family names in storage order, e.g. `["Dickson", "Trump", "Perry"]`.
    pub fn family_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter()
            .filter_map(|name| name.split_whitespace().next_back())
    }

    /// Given-name tokens of each name, e.g. `[["John", "Smith"], ["Donald"]]`.
    pub fn given_name_groups(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.iter().map(|name| {
            let mut tokens: Vec<&str> = name.split_whitespace().collect();
            tokens.pop();
            tokens
        })
    }

    /// One string of initials per name, e.g. `["J.S.", "D.", "K."]`.
    ///
    /// A name with no given names yields an empty string.
    pub fn initials(&self) -> Vec<String> {
        self.given_name_groups()
            .map(|given| {
                given
                    .iter()
                    .filter_map(|token| token.chars().next())
                    .map(|c| format!("{c}."))
                    .collect()
            })
            .collect()
    }

    /// Names as they appear in a reference list: `"Dickson, J.S. , Trump, D. and Perry, K. "`.
    ///
    /// Every entry keeps its trailing space. Entries before the last two are
    /// followed by `", "`, the second to last by `"and "`.
    pub fn reference_list(&self) -> String {
        let count = self.len();
        let mut out = String::new();
        for (idx, (family, initials)) in self.family_names().zip(self.initials()).enumerate() {
            out.push_str(&format!("{family}, {initials} "));
            if idx + 2 < count {
                out.push_str(", ");
            } else if idx + 2 == count {
                out.push_str("and ");
            }
        }
        out
    }

    /// Family names for a parenthetical citation.
    pub fn in_text(&self, style: InTextStyle) -> String {
        let families: Vec<&str> = self.family_names().collect();
        match (style, families.as_slice()) {
            (_, [only]) => (*only).to_string(),
            (InTextStyle::Abbreviated, [first, second]) => format!("{first} and {second}"),
            (InTextStyle::Abbreviated, [first, ..]) => format!("{first} et al."),
            (InTextStyle::Listed, [init @ .., last]) => {
                format!("{} and {last}", init.join(", "))
            }
            (_, []) => String::new(),
        }
    }
}

impl TryFrom<Vec<String>> for Names {
    type Error = CitationError;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Names::new(names)
    }
}

impl TryFrom<&[&str]> for Names {
    type Error = CitationError;

    fn try_from(names: &[&str]) -> Result<Self> {
        Names::new(names.iter().copied())
    }
}

impl<const N: usize> TryFrom<[&str; N]> for Names {
    type Error = CitationError;

    fn try_from(names: [&str; N]) -> Result<Self> {
        Names::new(names)
    }
}

/// Parses a `;`-separated list, e.g. `"Donald Trump; Katy Perry"`.
impl FromStr for Names {
    type Err = CitationError;

    fn from_str(s: &str) -> Result<Self> {
        Names::new(s.split(';').map(str::trim))
    }
}
