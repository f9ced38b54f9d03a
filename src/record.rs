//! Structured citation records, as supplied by a caller in JSON.
//!
//! Every record carries a `type` tag naming the kind of source; the remaining
//! fields mirror that source's citation fields. Months are given as numbers
//! (1 = January) and pages as a number, a `[from, to]` pair or a `"from-to"`
//! string.

use anyhow::Context;
use serde::Deserialize;

use crate::{
    citation::{
        Base, Citation,
        book::{Book, Chapter, Dictionary, EBook, Imprint},
        journal::{EJournal, Journal},
        newspaper::Newspaper,
        online::{Image, Online, Video, WebDocument},
        thesis::Thesis,
    },
    clock::Clock,
    error::Result,
    format::{Page, month_from_number},
    names::Names,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    Online(OnlineRecord),
    Website(OnlineRecord),
    Blog(OnlineRecord),
    Image(OnlineRecord),
    WebDocument(WebDocumentRecord),
    Video(VideoRecord),
    Journal(JournalRecord),
    #[serde(rename = "ejournal")]
    EJournal(EJournalRecord),
    Book(BookRecord),
    #[serde(rename = "ebook")]
    EBook(EBookRecord),
    Chapter(ChapterRecord),
    Encyclopedia(ChapterRecord),
    Dictionary(DictionaryRecord),
    Newspaper(NewspaperRecord),
    Thesis(ThesisRecord),
}

#[derive(Debug, Clone, Deserialize)]
pub struct OnlineRecord {
    pub authors: Option<Vec<String>>,
    pub year: Option<i32>,
    pub website: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebDocumentRecord {
    #[serde(flatten)]
    pub online: OnlineRecord,
    pub month: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoRecord {
    pub authors: Option<Vec<String>>,
    pub year: Option<i32>,
    pub channel: String,
    pub title: String,
    pub day: u32,
    pub month: u8,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JournalRecord {
    pub authors: Vec<String>,
    pub year: Option<i32>,
    pub title: String,
    pub journal: String,
    pub volume: u32,
    pub part: u32,
    pub page: Option<Page>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EJournalRecord {
    #[serde(flatten)]
    pub journal: JournalRecord,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImprintRecord {
    pub volume: Option<u32>,
    pub edition: Option<u32>,
    pub place: String,
    pub publisher: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookRecord {
    pub authors: Vec<String>,
    pub year: Option<i32>,
    pub title: String,
    #[serde(flatten)]
    pub imprint: ImprintRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EBookRecord {
    #[serde(flatten)]
    pub book: BookRecord,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChapterRecord {
    #[serde(flatten)]
    pub book: BookRecord,
    pub editors: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryRecord {
    pub authors: Option<Vec<String>>,
    pub year: Option<i32>,
    pub title: String,
    #[serde(flatten)]
    pub imprint: ImprintRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewspaperRecord {
    pub authors: Option<Vec<String>>,
    pub year: Option<i32>,
    pub newspaper: String,
    pub title: String,
    pub day: u32,
    pub month: u8,
    pub page: Option<Page>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThesisRecord {
    pub authors: Vec<String>,
    pub year: Option<i32>,
    pub title: String,
    pub degree: String,
    pub awarding_body: String,
    pub location: String,
    pub university: String,
}

fn optional_names(authors: Option<Vec<String>>) -> Result<Option<Names>> {
    authors.map(Names::new).transpose()
}

impl From<ImprintRecord> for Imprint {
    fn from(r: ImprintRecord) -> Self {
        Imprint {
            volume: r.volume,
            edition: r.edition,
            place: r.place,
            publisher: r.publisher,
        }
    }
}

impl OnlineRecord {
    fn into_online(self, clock: &impl Clock) -> Result<Online> {
        Ok(Online {
            base: Base::with_clock(optional_names(self.authors)?, self.website, self.year, clock),
            article_title: self.title,
            url: self.url,
        })
    }
}

impl JournalRecord {
    fn into_journal(self, clock: &impl Clock) -> Result<Journal> {
        Ok(Journal {
            base: Base::with_clock(Names::new(self.authors)?, self.journal, self.year, clock),
            article_title: self.title,
            volume: self.volume,
            part: self.part,
            page: self.page,
        })
    }
}

impl BookRecord {
    fn into_book(self, clock: &impl Clock) -> Result<Book> {
        Ok(Book {
            base: Base::with_clock(Names::new(self.authors)?, self.title, self.year, clock),
            imprint: self.imprint.into(),
        })
    }
}

impl ChapterRecord {
    fn into_chapter(self, clock: &impl Clock) -> Result<Chapter> {
        Ok(Chapter {
            editors: Names::new(self.editors)?,
            book: self.book.into_book(clock)?,
        })
    }
}

impl Record {
    /// The `type` tag this record was read from.
    pub fn kind(&self) -> &'static str {
        match self {
            Record::Online(_) => "online",
            Record::Website(_) => "website",
            Record::Blog(_) => "blog",
            Record::Image(_) => "image",
            Record::WebDocument(_) => "web_document",
            Record::Video(_) => "video",
            Record::Journal(_) => "journal",
            Record::EJournal(_) => "ejournal",
            Record::Book(_) => "book",
            Record::EBook(_) => "ebook",
            Record::Chapter(_) => "chapter",
            Record::Encyclopedia(_) => "encyclopedia",
            Record::Dictionary(_) => "dictionary",
            Record::Newspaper(_) => "newspaper",
            Record::Thesis(_) => "thesis",
        }
    }

    /// Build the citation this record describes, stamping today's date from `clock`.
    pub fn into_citation(self, clock: &impl Clock) -> Result<Box<dyn Citation>> {
        let citation: Box<dyn Citation> = match self {
            Record::Online(r) | Record::Website(r) | Record::Blog(r) => {
                Box::new(r.into_online(clock)?)
            }
            Record::Image(r) => Box::new(Image {
                base: Base::with_clock(optional_names(r.authors)?, r.website, r.year, clock),
                description: r.title,
                url: r.url,
            }),
            Record::WebDocument(r) => {
                let month = month_from_number(r.month)?;
                let online = r.online;
                Box::new(WebDocument {
                    base: Base::with_clock(
                        optional_names(online.authors)?,
                        online.website,
                        online.year,
                        clock,
                    ),
                    month,
                    article_title: online.title,
                    url: online.url,
                })
            }
            Record::Video(r) => Box::new(Video {
                base: Base::with_clock(optional_names(r.authors)?, r.channel, r.year, clock),
                day: r.day,
                month: month_from_number(r.month)?,
                video_title: r.title,
                url: r.url,
            }),
            Record::Journal(r) => Box::new(r.into_journal(clock)?),
            Record::EJournal(r) => Box::new(EJournal {
                journal: r.journal.into_journal(clock)?,
                url: r.url,
            }),
            Record::Book(r) => Box::new(r.into_book(clock)?),
            Record::EBook(r) => Box::new(EBook {
                book: r.book.into_book(clock)?,
                url: r.url,
            }),
            Record::Chapter(r) | Record::Encyclopedia(r) => Box::new(r.into_chapter(clock)?),
            Record::Dictionary(r) => Box::new(Dictionary {
                base: Base::with_clock(optional_names(r.authors)?, r.title, r.year, clock),
                imprint: r.imprint.into(),
            }),
            Record::Newspaper(r) => Box::new(Newspaper {
                base: Base::with_clock(optional_names(r.authors)?, r.newspaper, r.year, clock),
                article_title: r.title,
                day: r.day,
                month: month_from_number(r.month)?,
                page: r.page,
            }),
            Record::Thesis(r) => Box::new(Thesis {
                base: Base::with_clock(Names::new(r.authors)?, r.title, r.year, clock),
                degree_statement: r.degree,
                awarding_body: r.awarding_body,
                location: r.location,
                university: r.university,
            }),
        };
        Ok(citation)
    }
}

/// Parse one record, or an array of records, and build their citations in order.
pub fn from_json(input: &str, clock: &impl Clock) -> anyhow::Result<Vec<Box<dyn Citation>>> {
    let value: serde_json::Value =
        serde_json::from_str(input).context("citation input is not valid JSON")?;

    let records: Vec<Record> = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                serde_json::from_value(item)
                    .with_context(|| format!("invalid citation record at index {idx}"))
            })
            .collect::<anyhow::Result<_>>()?,
        single => vec![serde_json::from_value(single).context("invalid citation record")?],
    };
    tracing::debug!(count = records.len(), "parsed citation records");

    records
        .into_iter()
        .map(|record| {
            let kind = record.kind();
            tracing::debug!(kind, "building citation");
            record
                .into_citation(clock)
                .with_context(|| format!("cannot build {kind} citation"))
        })
        .collect()
}
