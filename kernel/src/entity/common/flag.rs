use vodca::{AsRefln, Fromln};

use crate::entity::{PageCount, ReadPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct IsReading(bool);

impl IsReading {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct IsFinished(bool);

impl IsFinished {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }

    /// A book is finished exactly when every page has been read.
    ///
    /// Both counts being absent also compares equal, so such a book is finished.
    pub fn derive(page_count: &Option<PageCount>, read_page: &Option<ReadPage>) -> Self {
        let total = page_count.map(i32::from);
        let read = read_page.map(i32::from);
        Self(total == read)
    }
}
