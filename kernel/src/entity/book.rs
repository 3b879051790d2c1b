mod content;
mod filter;
mod id;
mod number;
mod text;

pub use self::{content::*, filter::*, id::*, number::*, text::*};
use crate::entity::common::{InsertedAt, IsFinished, IsReading, UpdateStamp, UpdatedAt};
use destructure::{Destructure, Mutation};
use time::OffsetDateTime;
use vodca::References;

/// Only `name` is mandatory. Every other caller-supplied field is stored as given, absent included.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    name: BookName,
    year: Option<BookYear>,
    author: Option<BookAuthor>,
    summary: Option<BookSummary>,
    publisher: Option<BookPublisher>,
    page_count: Option<PageCount>,
    read_page: Option<ReadPage>,
    finished: IsFinished,
    reading: Option<IsReading>,
    inserted_at: InsertedAt,
    updated_at: UpdatedAt,
}

impl Book {
    /// Creates a book from validated content. `finished` is always derived, never supplied.
    pub fn new(
        id: BookId,
        content: BookContent,
        inserted_at: InsertedAt,
        updated_at: UpdatedAt,
    ) -> Self {
        let DestructBookContent {
            name,
            year,
            author,
            summary,
            publisher,
            page_count,
            read_page,
            reading,
        } = content.into_destruct();
        let finished = IsFinished::derive(&page_count, &read_page);
        Self {
            id,
            name,
            year,
            author,
            summary,
            publisher,
            page_count,
            read_page,
            finished,
            reading,
            inserted_at,
            updated_at,
        }
    }

    /// Replaces every caller-supplied field, keeps the id and stamps `now` according to `stamp`.
    pub fn revise(&mut self, content: BookContent, stamp: UpdateStamp, now: OffsetDateTime) {
        let DestructBookContent {
            name,
            year,
            author,
            summary,
            publisher,
            page_count,
            read_page,
            reading,
        } = content.into_destruct();
        self.substitute(|book| {
            *book.finished = IsFinished::derive(&page_count, &read_page);
            *book.name = name;
            *book.year = year;
            *book.author = author;
            *book.summary = summary;
            *book.publisher = publisher;
            *book.page_count = page_count;
            *book.read_page = read_page;
            *book.reading = reading;
            match stamp {
                UpdateStamp::InsertedAt => *book.inserted_at = InsertedAt::new(now),
                UpdateStamp::UpdatedAt => *book.updated_at = UpdatedAt::new(now),
            }
        });
    }
}
