use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookName(String);

impl BookName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookAuthor(String);

impl BookAuthor {
    pub fn new(author: impl Into<String>) -> Self {
        Self(author.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookSummary(String);

impl BookSummary {
    pub fn new(summary: impl Into<String>) -> Self {
        Self(summary.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookPublisher(String);

impl BookPublisher {
    pub fn new(publisher: impl Into<String>) -> Self {
        Self(publisher.into())
    }
}
