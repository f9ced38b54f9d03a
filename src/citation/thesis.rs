use crate::{
    citation::{Base, Citation},
    names::Names,
};

/// A thesis or dissertation. `base.title` is the thesis title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thesis {
    pub base: Base<Names>,
    /// e.g. "PhD thesis"
    pub degree_statement: String,
    pub awarding_body: String,
    pub location: String,
    pub university: String,
}

impl Citation for Thesis {
    fn in_text(&self) -> String {
        self.base.default_in_text()
    }

    fn end_text(&self) -> String {
        format!(
            "{} ({}) {}. {}. {}. {}: {}",
            self.base.author.reference_list(),
            self.base.year(),
            self.base.title,
            self.degree_statement,
            self.awarding_body,
            self.location,
            self.university,
        )
    }
}
