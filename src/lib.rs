//! Harvard-style citations for websites, journals, books, newspapers and more.
//!
//! Each source type is a plain value implementing [`Citation`], which renders
//! the short in-text form and the full reference-list entry:
//!
//! ```
//! use chrono::{Month, NaiveDate};
//! use harvard_cite::{Base, Citation, FixedClock, Newspaper};
//!
//! let clock = FixedClock(NaiveDate::from_ymd_opt(2020, 4, 1).unwrap());
//! let article = Newspaper {
//!     base: Base::with_clock(None, "The Star", Some(2019), &clock),
//!     article_title: "What will happen during a global pandemic?".to_string(),
//!     day: 25,
//!     month: Month::December,
//!     page: None,
//! };
//! assert_eq!(article.in_text(), "(The Star, 2019)");
//! assert_eq!(
//!     article.end_text(),
//!     "The Star. (2019) What will happen during a global pandemic?. The Star. 25th December."
//! );
//! ```

pub mod citation;
pub mod clock;
pub mod error;
pub mod format;
pub mod names;
pub mod record;

pub use citation::{
    Base, Citation,
    book::{Book, Chapter, Dictionary, EBook, Encyclopedia, Imprint},
    journal::{EJournal, Journal},
    newspaper::Newspaper,
    online::{Blog, Image, Online, Video, WebDocument, Website},
    thesis::Thesis,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CitationError, Result};
pub use format::{Page, format_access_date, format_page, format_year, ordinal};
pub use names::{InTextStyle, Names};
pub use record::{Record, from_json};
