use crate::entity::{Book, IsFinished, IsReading};

/// Conditions applied when listing books. Every condition that is set must hold.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookFilter {
    name: Option<String>,
    reading: Option<IsReading>,
    finished: Option<IsFinished>,
}

impl BookFilter {
    pub fn new(
        name: Option<String>,
        reading: Option<IsReading>,
        finished: Option<IsFinished>,
    ) -> Self {
        Self {
            name: name.filter(|name| !name.is_empty()),
            reading,
            finished,
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        if let Some(name) = &self.name {
            if !book.name().contains_ignore_case(name) {
                return false;
            }
        }
        if let Some(reading) = &self.reading {
            if book.reading().as_ref() != Some(reading) {
                return false;
            }
        }
        if let Some(finished) = &self.finished {
            if book.finished() != finished {
                return false;
            }
        }
        true
    }
}
