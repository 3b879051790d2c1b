use destructure::Destructure;
use vodca::References;

use crate::entity::{
    BookAuthor, BookName, BookPublisher, BookSummary, BookYear, IsReading, PageCount, ReadPage,
};

/// The caller-supplied part of a book, shared by creation and update.
///
/// The name is the only field a caller must send.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookContent {
    name: BookName,
    year: Option<BookYear>,
    author: Option<BookAuthor>,
    summary: Option<BookSummary>,
    publisher: Option<BookPublisher>,
    page_count: Option<PageCount>,
    read_page: Option<ReadPage>,
    reading: Option<IsReading>,
}

impl BookContent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: BookName,
        year: Option<BookYear>,
        author: Option<BookAuthor>,
        summary: Option<BookSummary>,
        publisher: Option<BookPublisher>,
        page_count: Option<PageCount>,
        read_page: Option<ReadPage>,
        reading: Option<IsReading>,
    ) -> Self {
        Self {
            name,
            year,
            author,
            summary,
            publisher,
            page_count,
            read_page,
            reading,
        }
    }
}
