use chrono::NaiveDate;

use crate::{
    clock::{Clock, SystemClock},
    format::{format_access_date, format_year},
    names::{InTextStyle, Names},
};

pub mod book;
pub mod journal;
pub mod newspaper;
pub mod online;
pub mod thesis;

/// A source that can be cited in Harvard style.
pub trait Citation: std::fmt::Debug {
    /// The parenthetical form used in running text, e.g. `(Trump et al., 2019)`.
    fn in_text(&self) -> String;
    /// The full entry for the reference list.
    fn end_text(&self) -> String;
}

/// Fields every citation carries.
///
/// `A` is the author type: `Option<Names>` for sources that may be anonymous,
/// `Names` for those that always name an author. `title` is the work the
/// source sits in (website, journal, book, newspaper...) and stands in for the
/// author when there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base<A = Option<Names>> {
    pub author: A,
    pub title: String,
    pub year: Option<i32>,
    /// Captured once when the citation is built.
    pub accessed: NaiveDate,
}

impl<A> Base<A> {
    pub fn new(author: A, title: impl Into<String>, year: Option<i32>) -> Self {
        Self::with_clock(author, title, year, &SystemClock)
    }

    pub fn with_clock(
        author: A,
        title: impl Into<String>,
        year: Option<i32>,
        clock: &impl Clock,
    ) -> Self {
        let accessed = clock.today();
        tracing::trace!(%accessed, "captured access date");
        Base {
            author,
            title: title.into(),
            year,
            accessed,
        }
    }

    pub fn year(&self) -> String {
        format_year(self.year)
    }

    pub fn accessed(&self) -> String {
        format_access_date(self.accessed)
    }
}

impl Base<Option<Names>> {
    /// `(<authors or title>, <year>)`
    pub fn default_in_text(&self) -> String {
        match &self.author {
            Some(author) => parenthetical(&author.in_text(InTextStyle::Listed), self.year),
            None => parenthetical(&self.title, self.year),
        }
    }
}

impl Base<Names> {
    pub fn default_in_text(&self) -> String {
        parenthetical(&self.author.in_text(InTextStyle::Listed), self.year)
    }

    pub fn abbreviated_in_text(&self) -> String {
        parenthetical(&self.author.in_text(InTextStyle::Abbreviated), self.year)
    }
}

pub(crate) fn parenthetical(name: &str, year: Option<i32>) -> String {
    format!("({name}, {})", format_year(year))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clock::FixedClock;

    pub(crate) fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2020, 4, 1).unwrap())
    }

    pub(crate) fn names(list: &[&str]) -> Names {
        Names::try_from(list).unwrap()
    }

    #[test]
    fn default_in_text_falls_back_to_title() {
        let anonymous: Base = Base::with_clock(None, "Journal of Nature", Some(2002), &clock());
        assert_eq!(anonymous.default_in_text(), "(Journal of Nature, 2002)");

        let undated: Base = Base::with_clock(
            Some(names(&["Donald Trump", "Katy Perry"])),
            "Journal of Nature",
            None,
            &clock(),
        );
        assert_eq!(undated.default_in_text(), "(Trump and Perry, n.d.)");
    }

    #[test]
    fn access_date_is_fixed_at_construction() {
        let built_on = clock();
        let site = crate::citation::online::Online {
            base: Base::with_clock(None, "Facebook", None, &built_on),
            article_title: "How to listen to music".to_string(),
            url: "www.facebook.com".to_string(),
        };
        assert_eq!(site.base.accessed, built_on.today());

        let first = site.end_text();
        assert!(first.ends_with("[Accessed:01/04/2020]."), "{first}");
        assert_eq!(site.end_text(), first);
    }

    #[test]
    fn boxed_citations_are_printable() {
        let boxed: Box<dyn Citation> = Box::new(crate::citation::online::Online {
            base: Base::with_clock(None, "Facebook", Some(2010), &clock()),
            article_title: "Privacy".to_string(),
            url: "www.facebook.com".to_string(),
        });
        let printed = format!("{boxed:?}");
        assert!(printed.contains("Online"), "{printed}");
        assert!(printed.contains("Privacy"), "{printed}");
    }

    #[test]
    fn abbreviated_in_text() {
        let base = Base::with_clock(
            names(&["Donald Trump", "John Smith", "Johnny English"]),
            "Journal of Social Media",
            Some(2019),
            &clock(),
        );
        assert_eq!(base.abbreviated_in_text(), "(Trump et al., 2019)");
        assert_eq!(base.default_in_text(), "(Trump, Smith and English, 2019)");
    }
}
