use crate::controller::Intake;
use application::transfer::{
    BookPayloadDto, CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
};
use serde::Deserialize;

/// Body of `POST /books` and `PUT /books/{id}`. Absent fields are reported by validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    name: Option<String>,
    year: Option<i32>,
    author: Option<String>,
    summary: Option<String>,
    publisher: Option<String>,
    page_count: Option<i32>,
    read_page: Option<i32>,
    reading: Option<bool>,
}

impl From<BookRequest> for BookPayloadDto {
    fn from(value: BookRequest) -> Self {
        Self {
            name: value.name,
            year: value.year,
            author: value.author,
            summary: value.summary,
            publisher: value.publisher,
            page_count: value.page_count,
            read_page: value.read_page,
            reading: value.reading,
        }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: String,
}

impl DeleteBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

// `reading` and `finished` stay raw strings: only "1" and "0" filter, anything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct GetAllBookRequest {
    name: Option<String>,
    reading: Option<String>,
    finished: Option<String>,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: String,
}

impl GetBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

fn flag(value: Option<String>) -> Option<bool> {
    match value.as_deref() {
        Some("1") => Some(true),
        Some("0") => Some(false),
        _ => None,
    }
}

pub struct BookTransformer;

impl Intake<BookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: BookRequest) -> Self::To {
        CreateBookDto {
            payload: input.into(),
        }
    }
}

impl Intake<(String, BookRequest)> for BookTransformer {
    type To = UpdateBookDto;
    fn emit(&self, input: (String, BookRequest)) -> Self::To {
        let (id, input) = input;
        UpdateBookDto {
            id,
            payload: input.into(),
        }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<GetAllBookRequest> for BookTransformer {
    type To = GetAllBookDto;
    fn emit(&self, input: GetAllBookRequest) -> Self::To {
        GetAllBookDto {
            name: input.name,
            reading: flag(input.reading),
            finished: flag(input.finished),
        }
    }
}
