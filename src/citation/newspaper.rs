use chrono::Month;

use crate::{
    citation::{Base, Citation},
    format::{Page, format_page, month_name, ordinal},
};

/// A newspaper article, with or without a byline. `base.title` is the paper's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Newspaper {
    pub base: Base,
    pub article_title: String,
    pub day: u32,
    pub month: Month,
    pub page: Option<Page>,
}

impl Citation for Newspaper {
    fn in_text(&self) -> String {
        self.base.default_in_text()
    }

    fn end_text(&self) -> String {
        let lead = match &self.base.author {
            Some(author) => author.reference_list(),
            None => format!("{}.", self.base.title),
        };
        let page = self
            .page
            .as_ref()
            .map(|p| format!("p. {}", format_page(p)))
            .unwrap_or_default();
        format!(
            "{lead} ({}) {}. {}. {} {}.{page}",
            self.base.year(),
            self.article_title,
            self.base.title,
            ordinal(self.day),
            month_name(self.month),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citation::tests::{clock, names};
    use crate::names::Names;

    fn pandemic(author: Option<Names>, page: Option<Page>) -> Newspaper {
        Newspaper {
            base: Base::with_clock(author, "The Star", Some(2019), &clock()),
            article_title: "What will happen during a global pandemic?".to_string(),
            day: 25,
            month: Month::December,
            page,
        }
    }

    #[test]
    fn anonymous_article() {
        let article = pandemic(None, None);
        assert_eq!(article.in_text(), "(The Star, 2019)");
        assert_eq!(
            article.end_text(),
            "The Star. (2019) What will happen during a global pandemic?. The Star. 25th December."
        );
    }

    #[test]
    fn bylined_article_with_pages() {
        let article = pandemic(Some(names(&["Katy Perry"])), Some(Page::Range(4, 5)));
        assert_eq!(article.in_text(), "(Perry, 2019)");
        assert_eq!(
            article.end_text(),
            "Perry, K.  (2019) What will happen during a global pandemic?. The Star. \
             25th December.p. 4-5"
        );
    }

    #[test]
    fn teen_days() {
        let mut article = pandemic(None, Some(Page::Single(3)));
        article.day = 12;
        article.base.year = None;
        assert_eq!(
            article.end_text(),
            "The Star. (n.d.) What will happen during a global pandemic?. The Star. 12th December.p. 3"
        );
    }
}
