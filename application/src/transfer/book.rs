use error_stack::Report;
use time::OffsetDateTime;

use kernel::prelude::entity::{
    Book, BookAuthor, BookContent, BookName, BookPublisher, BookSummary, BookYear, DestructBook,
    IsReading, PageCount, ReadPage,
};
use kernel::{KernelError, Violation};

#[derive(Debug, Clone)]
pub struct BookDto {
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<i32>,
    pub read_page: Option<i32>,
    pub finished: bool,
    pub reading: Option<bool>,
    pub inserted_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
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
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            year: year.map(i32::from),
            author: author.map(String::from),
            summary: summary.map(String::from),
            publisher: publisher.map(String::from),
            page_count: page_count.map(i32::from),
            read_page: read_page.map(i32::from),
            finished: finished.into(),
            reading: reading.map(bool::from),
            inserted_at: inserted_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

/// List view of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummaryDto {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

impl From<Book> for BookSummaryDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            name,
            publisher,
            ..
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            publisher: publisher.map(String::from),
        }
    }
}

/// Book fields as sent by a client. Nothing is trusted until converted into [`BookContent`].
///
/// Only the name and the page pair are checked; every other field is stored as given, absent or not.
#[derive(Debug, Clone, Default)]
pub struct BookPayloadDto {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<i32>,
    pub read_page: Option<i32>,
    pub reading: Option<bool>,
}

impl TryFrom<BookPayloadDto> for BookContent {
    type Error = Report<KernelError>;
    fn try_from(value: BookPayloadDto) -> Result<Self, Self::Error> {
        let name = value
            .name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Report::new(KernelError::from(Violation::MissingName)))?;

        if let (Some(page_count), Some(read_page)) = (value.page_count, value.read_page) {
            if ReadPage::new(read_page).exceeds(&PageCount::new(page_count)) {
                return Err(Report::new(KernelError::from(
                    Violation::ReadPageExceedsPageCount,
                ))
                .attach_printable(format!("readPage {read_page} > pageCount {page_count}")));
            }
        }

        Ok(BookContent::new(
            BookName::new(name),
            value.year.map(BookYear::new),
            value.author.map(BookAuthor::new),
            value.summary.map(BookSummary::new),
            value.publisher.map(BookPublisher::new),
            value.page_count.map(PageCount::new),
            value.read_page.map(ReadPage::new),
            value.reading.map(IsReading::new),
        ))
    }
}

pub struct GetBookDto {
    pub id: String,
}

#[derive(Debug, Default)]
pub struct GetAllBookDto {
    pub name: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

pub struct CreateBookDto {
    pub payload: BookPayloadDto,
}

pub struct UpdateBookDto {
    pub id: String,
    pub payload: BookPayloadDto,
}

pub struct DeleteBookDto {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedBookDto {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedBookDto {
    pub id: String,
}
