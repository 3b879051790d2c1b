use error_stack::Report;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{
    DatabaseConnection, DependOnDatabaseConnection, Transaction,
};
use kernel::interface::policy::DependOnUpdateStamp;
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    Book, BookContent, BookFilter, BookId, InsertedAt, IsFinished, IsReading, UpdatedAt,
};
use kernel::KernelError;

use crate::transfer::{
    BookDto, BookSummaryDto, CreateBookDto, CreatedBookDto, DeleteBookDto, DeletedBookDto,
    GetAllBookDto, GetBookDto, UpdateBookDto,
};

#[async_trait::async_trait]
pub trait GetBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookQuery
{
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;

        Ok(book.map(BookDto::from))
    }
}

impl<T> GetBookService for T where T: DependOnDatabaseConnection + DependOnBookQuery {}

#[async_trait::async_trait]
pub trait GetAllBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookQuery
{
    async fn get_all_books(
        &self,
        dto: GetAllBookDto,
    ) -> error_stack::Result<Vec<BookSummaryDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let filter = BookFilter::new(
            dto.name,
            dto.reading.map(IsReading::new),
            dto.finished.map(IsFinished::new),
        );
        let books = self.book_query().find_all(&mut connection, &filter).await?;

        Ok(books.into_iter().map(BookSummaryDto::from).collect())
    }
}

impl<T> GetAllBookService for T where T: DependOnDatabaseConnection + DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookQuery + DependOnBookModifier
{
    async fn create_book(
        &self,
        dto: CreateBookDto,
    ) -> error_stack::Result<CreatedBookDto, KernelError> {
        let content = BookContent::try_from(dto.payload)?;
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(Uuid::new_v4().simple().to_string());
        let now = OffsetDateTime::now_utc();
        let book = Book::new(id.clone(), content, InsertedAt::new(now), UpdatedAt::new(now));

        self.book_modifier().create(&mut connection, &book).await?;

        let stored = self.book_query().find_by_id(&mut connection, &id).await?;
        if stored.is_none() {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Book {id} is missing right after insertion")));
        }

        connection.commit().await?;
        tracing::debug!("added book {id}");
        Ok(CreatedBookDto { id: id.into() })
    }
}

impl<T> CreateBookService for T where
    T: DependOnDatabaseConnection + DependOnBookQuery + DependOnBookModifier
{
}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnBookQuery
    + DependOnBookModifier
    + DependOnUpdateStamp
{
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<(), KernelError> {
        // Payload problems are reported even when the id does not exist.
        let content = BookContent::try_from(dto.payload)?;
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let mut book = self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!("Book {id} not found"))
            })?;

        book.revise(content, self.update_stamp(), OffsetDateTime::now_utc());
        self.book_modifier().update(&mut connection, &book).await?;

        connection.commit().await?;
        tracing::debug!("updated book {id}");
        Ok(())
    }
}

impl<T> UpdateBookService for T where
    T: DependOnDatabaseConnection
        + DependOnBookQuery
        + DependOnBookModifier
        + DependOnUpdateStamp
{
}

#[async_trait::async_trait]
pub trait DeleteBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookModifier
{
    async fn delete_book(
        &self,
        dto: DeleteBookDto,
    ) -> error_stack::Result<DeletedBookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let removed = self
            .book_modifier()
            .delete(&mut connection, &BookId::new(dto.id))
            .await?;

        connection.commit().await?;
        tracing::debug!("deleted book {}", removed.id());
        Ok(DeletedBookDto {
            id: removed.id().to_string(),
        })
    }
}

impl<T> DeleteBookService for T where T: DependOnDatabaseConnection + DependOnBookModifier {}
