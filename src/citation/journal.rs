//! Journal articles, in print and online.

use crate::{
    citation::{Base, Citation},
    format::{Page, format_page},
    names::Names,
};

/// A journal article. `base.title` is the journal's title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    pub base: Base<Names>,
    pub article_title: String,
    pub volume: u32,
    pub part: u32,
    pub page: Option<Page>,
}

/// A journal article read online.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EJournal {
    pub journal: Journal,
    pub url: String,
}

impl Journal {
    fn entry(&self) -> String {
        let page = self.page.as_ref().map(format_page).unwrap_or_default();
        format!(
            "{}({}) {}. {}. {} ({}). p. {page}",
            self.base.author.reference_list(),
            self.base.year(),
            self.article_title,
            self.base.title,
            self.volume,
            self.part,
        )
    }
}

impl Citation for Journal {
    fn in_text(&self) -> String {
        self.base.abbreviated_in_text()
    }

    fn end_text(&self) -> String {
        self.entry()
    }
}

impl Citation for EJournal {
    fn in_text(&self) -> String {
        self.journal.in_text()
    }

    fn end_text(&self) -> String {
        format!(
            "{}. Available from:{}. [Accessed: {}]",
            self.journal.entry(),
            self.url,
            self.journal.base.accessed(),
        )
    }
}
