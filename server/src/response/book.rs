use crate::controller::Exhaust;
use crate::response::Envelope;
use application::transfer::{BookDto, BookSummaryDto, CreatedBookDto, DeletedBookDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Serialize, Serializer};
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const BOOK_ADDED: &str = "Buku berhasil ditambahkan";
const BOOK_UPDATED: &str = "Buku berhasil diperbarui";
const BOOK_DELETED: &str = "Buku berhasil dihapus";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookIdData {
    book_id: String,
}

#[derive(Debug)]
pub struct CreatedBookResponse {
    id: String,
}

impl IntoResponse for CreatedBookResponse {
    fn into_response(self) -> Response {
        let data = BookIdData { book_id: self.id };
        (StatusCode::CREATED, Envelope::success(Some(BOOK_ADDED), Some(data))).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookSummaryResponse {
    id: String,
    name: String,
    publisher: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BookListData {
    books: Vec<BookSummaryResponse>,
}

#[derive(Debug)]
pub struct BookListResponse {
    books: Vec<BookSummaryResponse>,
}

impl IntoResponse for BookListResponse {
    fn into_response(self) -> Response {
        let data = BookListData { books: self.books };
        (StatusCode::OK, Envelope::success(None, Some(data))).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    id: String,
    name: String,
    year: Option<i32>,
    author: Option<String>,
    summary: Option<String>,
    publisher: Option<String>,
    page_count: Option<i32>,
    read_page: Option<i32>,
    finished: bool,
    reading: Option<bool>,
    #[serde(serialize_with = "iso_millis")]
    inserted_at: OffsetDateTime,
    #[serde(serialize_with = "iso_millis")]
    updated_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct BookData {
    book: BookResponse,
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        let data = BookData { book: self };
        (StatusCode::OK, Envelope::success(None, Some(data))).into_response()
    }
}

#[derive(Debug)]
pub struct UpdatedBookResponse;

impl IntoResponse for UpdatedBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Envelope::<()>::success(Some(BOOK_UPDATED), None)).into_response()
    }
}

#[derive(Debug)]
pub struct DeletedBookResponse {
    id: String,
}

impl IntoResponse for DeletedBookResponse {
    fn into_response(self) -> Response {
        let data = BookIdData { book_id: self.id };
        (StatusCode::OK, Envelope::success(Some(BOOK_DELETED), Some(data))).into_response()
    }
}

/// UTC with exactly three fractional digits, e.g. `2024-03-01T12:30:00.123Z`.
fn iso_millis<S: Serializer>(time: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    let formatted = time
        .to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        ))
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&formatted)
}

pub struct BookPresenter;

impl Exhaust<CreatedBookDto> for BookPresenter {
    type To = CreatedBookResponse;
    fn emit(&self, input: CreatedBookDto) -> Self::To {
        CreatedBookResponse { id: input.id }
    }
}

impl Exhaust<Vec<BookSummaryDto>> for BookPresenter {
    type To = BookListResponse;
    fn emit(&self, input: Vec<BookSummaryDto>) -> Self::To {
        let books = input
            .into_iter()
            .map(|book| BookSummaryResponse {
                id: book.id,
                name: book.name,
                publisher: book.publisher,
            })
            .collect::<Vec<_>>();
        BookListResponse { books }
    }
}

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(|book| BookResponse {
            id: book.id,
            name: book.name,
            year: book.year,
            author: book.author,
            summary: book.summary,
            publisher: book.publisher,
            page_count: book.page_count,
            read_page: book.read_page,
            finished: book.finished,
            reading: book.reading,
            inserted_at: book.inserted_at,
            updated_at: book.updated_at,
        })
    }
}

impl Exhaust<()> for BookPresenter {
    type To = UpdatedBookResponse;
    fn emit(&self, _: ()) -> Self::To {
        UpdatedBookResponse
    }
}

impl Exhaust<DeletedBookDto> for BookPresenter {
    type To = DeletedBookResponse;
    fn emit(&self, input: DeletedBookDto) -> Self::To {
        DeletedBookResponse { id: input.id }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;
    use time::macros::datetime;

    use application::transfer::BookDto;

    use crate::controller::Exhaust;
    use crate::response::BookPresenter;

    fn dto() -> BookDto {
        BookDto {
            id: "abc".into(),
            name: "Moby Dick".into(),
            year: None,
            author: Some("Melville".into()),
            summary: None,
            publisher: None,
            page_count: Some(635),
            read_page: None,
            finished: false,
            reading: None,
            inserted_at: datetime!(2024-03-01 12:30:00.123456789 UTC),
            updated_at: datetime!(2024-03-01 21:30:00.5 +09:00),
        }
    }

    #[test]
    fn timestamps_are_utc_milliseconds() {
        let book = BookPresenter.emit(Some(dto())).expect("book must be presented");
        let value = serde_json::to_value(&book).expect("book must serialize");
        assert_eq!(value["insertedAt"], "2024-03-01T12:30:00.123Z");
        assert_eq!(value["updatedAt"], "2024-03-01T12:30:00.500Z");
    }

    #[test]
    fn absent_fields_are_null() {
        let book = BookPresenter.emit(Some(dto())).expect("book must be presented");
        let value = serde_json::to_value(&book).expect("book must serialize");
        assert_eq!(value["year"], json!(null));
        assert_eq!(value["summary"], json!(null));
        assert_eq!(value["readPage"], json!(null));
        assert_eq!(value["reading"], json!(null));
        assert_eq!(value["author"], "Melville");
        assert!(value.as_object().is_some_and(|book| book.contains_key("publisher")));
    }
}
