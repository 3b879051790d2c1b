use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookYear(i32);

impl BookYear {
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct PageCount(i32);

impl PageCount {
    pub fn new(count: impl Into<i32>) -> Self {
        Self(count.into())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct ReadPage(i32);

impl ReadPage {
    pub fn new(page: impl Into<i32>) -> Self {
        Self(page.into())
    }

    pub fn exceeds(&self, page_count: &PageCount) -> bool {
        let total: &i32 = page_count.as_ref();
        self.0 > *total
    }
}
