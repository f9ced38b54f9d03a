//! Books, e-books, chapters in edited books, encyclopedias and dictionaries.

use crate::{
    citation::{Base, Citation, parenthetical},
    format::ordinal,
    names::{InTextStyle, Names},
};

/// Publication details shared by every printed-book form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imprint {
    pub volume: Option<u32>,
    /// Rendered as an ordinal, e.g. `3rd edition`.
    pub edition: Option<u32>,
    pub place: String,
    pub publisher: String,
}

impl Imprint {
    /// `.{volume}{edition}{place}: {publisher}.` following the title.
    fn tail(&self) -> String {
        let volume = self
            .volume
            .map(|v| format!(" Volume {v}. "))
            .unwrap_or_default();
        let edition = self
            .edition
            .map(|e| format!(" {} edition. ", ordinal(e)))
            .unwrap_or_default();
        format!("{volume}{edition}{}: {}", self.place, self.publisher)
    }
}

/// A book. `base.title` is the book's title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub base: Base<Names>,
    pub imprint: Imprint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EBook {
    pub book: Book,
    pub url: String,
}

/// A chapter in an edited book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub book: Book,
    pub editors: Names,
}

/// An encyclopedia entry is cited exactly like a chapter.
pub type Encyclopedia = Chapter;

/// A dictionary, which may be credited to its editors or to nobody.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    pub base: Base,
    pub imprint: Imprint,
}

/// Up to three authors are listed in full; four or more become "et al.".
fn many_authors_in_text(base: &Base<Names>) -> String {
    if base.author.len() < 4 {
        base.default_in_text()
    } else {
        base.abbreviated_in_text()
    }
}

fn editor_label(editors: &Names) -> &'static str {
    if editors.len() == 1 { "(ed)." } else { "(eds)." }
}

impl Book {
    fn lead(&self) -> String {
        format!(
            "{}({}) {}.",
            self.base.author.reference_list(),
            self.base.year(),
            self.base.title
        )
    }
}

impl Citation for Book {
    fn in_text(&self) -> String {
        many_authors_in_text(&self.base)
    }

    fn end_text(&self) -> String {
        format!("{}{}.", self.lead(), self.imprint.tail())
    }
}

impl Citation for EBook {
    fn in_text(&self) -> String {
        self.book.in_text()
    }

    fn end_text(&self) -> String {
        format!(
            "{} [Online]{}. Available from:{}. [Accessed: {}]",
            self.book.lead(),
            self.book.imprint.tail(),
            self.url,
            self.book.base.accessed(),
        )
    }
}

impl Citation for Chapter {
    fn in_text(&self) -> String {
        self.book.in_text()
    }

    fn end_text(&self) -> String {
        format!(
            "{} In: {} {}{}.",
            self.book.lead(),
            self.editors.reference_list(),
            editor_label(&self.editors),
            self.book.imprint.tail(),
        )
    }
}

impl Citation for Dictionary {
    fn in_text(&self) -> String {
        match &self.base.author {
            Some(author) if author.len() >= 4 => {
                parenthetical(&author.in_text(InTextStyle::Abbreviated), self.base.year)
            }
            _ => self.base.default_in_text(),
        }
    }

    fn end_text(&self) -> String {
        let lead = match &self.base.author {
            Some(editors) if editors.len() == 1 => format!("{}(ed.) ", editors.reference_list()),
            Some(editors) => format!("{}(eds.) ", editors.reference_list()),
            None => format!("{}.", self.base.title),
        };
        format!(
            "{lead} ({}) {}.{}.",
            self.base.year(),
            self.base.title,
            self.imprint.tail()
        )
    }
}
