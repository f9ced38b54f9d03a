//! Websites, blogs, online images, web documents and videos.

use chrono::Month;

use crate::{
    citation::{Base, Citation},
    format::{month_name, ordinal},
};

/// A page on a website. `base.title` is the website's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Online {
    pub base: Base,
    pub article_title: String,
    pub url: String,
}

pub type Website = Online;

/// A blog post; `article_title` holds the post title.
pub type Blog = Online;

/// An image published online; `description` stands where a title would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub base: Base,
    pub description: String,
    pub url: String,
}

/// A dated document hosted on a website.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebDocument {
    pub base: Base,
    pub month: Month,
    pub article_title: String,
    pub url: String,
}

/// A video. `base.title` is the channel name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub base: Base,
    pub day: u32,
    pub month: Month,
    pub video_title: String,
    pub url: String,
}

/// Authors, or the site name standing in for them.
fn lead(base: &Base) -> String {
    match &base.author {
        Some(author) => author.reference_list(),
        None => format!("{}. ", base.title),
    }
}

fn online_entry(
    base: &Base,
    title: &str,
    tag: &str,
    published: Option<String>,
    url: &str,
) -> String {
    let published = published.map(|p| format!("{p}. ")).unwrap_or_default();
    format!(
        "{}({}) {title}. [{tag}] {published}Available from:{url}. [Accessed:{}].",
        lead(base),
        base.year(),
        base.accessed(),
    )
}

impl Citation for Online {
    fn in_text(&self) -> String {
        self.base.default_in_text()
    }

    fn end_text(&self) -> String {
        online_entry(&self.base, &self.article_title, "Online", None, &self.url)
    }
}

impl Citation for Image {
    fn in_text(&self) -> String {
        self.base.default_in_text()
    }

    fn end_text(&self) -> String {
        online_entry(&self.base, &self.description, "Online Image", None, &self.url)
    }
}

impl Citation for WebDocument {
    fn in_text(&self) -> String {
        self.base.default_in_text()
    }

    fn end_text(&self) -> String {
        let published = format!("{} {}", month_name(self.month), self.base.year());
        online_entry(
            &self.base,
            &self.article_title,
            "Online",
            Some(published),
            &self.url,
        )
    }
}

impl Citation for Video {
    fn in_text(&self) -> String {
        self.base.default_in_text()
    }

    fn end_text(&self) -> String {
        let published = format!(
            "{} {} {}",
            ordinal(self.day),
            month_name(self.month),
            self.base.year()
        );
        online_entry(
            &self.base,
            &self.video_title,
            "Online Video",
            Some(published),
            &self.url,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citation::tests::{clock, names};

    fn website(author: Option<&[&str]>, year: Option<i32>) -> Website {
        Website {
            base: Base::with_clock(author.map(names), "Facebook", year, &clock()),
            article_title: "How to listen to music".to_string(),
            url: "www.facebook.com".to_string(),
        }
    }

    #[test]
    fn website_with_authors() {
        let site = website(Some(&["John Legend", "Smith Jackson"]), Some(2002));
        assert_eq!(site.in_text(), "(Legend and Jackson, 2002)");
        assert_eq!(
            site.end_text(),
            "Legend, J. and Jackson, S. (2002) How to listen to music. [Online] \
             Available from:www.facebook.com. [Accessed:01/04/2020]."
        );
    }

    #[test]
    fn anonymous_undated_website() {
        let site = website(None, None);
        assert_eq!(site.in_text(), "(Facebook, n.d.)");
        assert_eq!(
            site.end_text(),
            "Facebook. (n.d.) How to listen to music. [Online] \
             Available from:www.facebook.com. [Accessed:01/04/2020]."
        );
    }

    #[test]
    fn end_text_is_stable() {
        let site = website(None, Some(2010));
        assert_eq!(site.end_text(), site.end_text());
    }

    #[test]
    fn image_tag() {
        let image = Image {
            base: Base::with_clock(None, "Flickr", Some(2015), &clock()),
            description: "Sunset over the bay".to_string(),
            url: "https://flickr.com/p/1".to_string(),
        };
        assert_eq!(image.in_text(), "(Flickr, 2015)");
        assert_eq!(
            image.end_text(),
            "Flickr. (2015) Sunset over the bay. [Online Image] \
             Available from:https://flickr.com/p/1. [Accessed:01/04/2020]."
        );
    }

    #[test]
    fn web_document_month() {
        let doc = WebDocument {
            base: Base::with_clock(
                Some(names(&[
                    "John Smith Dickson",
                    "Elon Musk",
                    "Donald Trump",
                    "Katy Perry",
                ])),
                "Facebook",
                Some(2002),
                &clock(),
            ),
            month: Month::January,
            article_title: "How to listen to music".to_string(),
            url: "www.facebook.com".to_string(),
        };
        assert_eq!(doc.in_text(), "(Dickson, Musk, Trump and Perry, 2002)");
        assert_eq!(
            doc.end_text(),
            "Dickson, J.S. , Musk, E. , Trump, D. and Perry, K. (2002) How to listen to music. \
             [Online] January 2002. Available from:www.facebook.com. [Accessed:01/04/2020]."
        );
    }

    #[test]
    fn undated_web_document() {
        let doc = WebDocument {
            base: Base::with_clock(None, "Gov.uk", None, &clock()),
            month: Month::March,
            article_title: "Budget".to_string(),
            url: "https://gov.uk".to_string(),
        };
        assert_eq!(
            doc.end_text(),
            "Gov.uk. (n.d.) Budget. [Online] March n.d.. Available from:https://gov.uk. \
             [Accessed:01/04/2020]."
        );
    }

    #[test]
    fn video_day_and_tag() {
        let video = Video {
            base: Base::with_clock(None, "Numberphile", Some(2018), &clock()),
            day: 22,
            month: Month::May,
            video_title: "The Bridges of Königsberg".to_string(),
            url: "https://youtube.com/watch?v=1".to_string(),
        };
        assert_eq!(video.in_text(), "(Numberphile, 2018)");
        assert_eq!(
            video.end_text(),
            "Numberphile. (2018) The Bridges of Königsberg. [Online Video] 22nd May 2018. \
             Available from:https://youtube.com/watch?v=1. [Accessed:01/04/2020]."
        );
    }
}
