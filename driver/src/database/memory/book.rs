use error_stack::Report;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookFilter, BookId};
use kernel::KernelError;

use crate::database::memory::InMemoryTransaction;

pub struct InMemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let found = con.books().iter().find(|book| book.id() == id).cloned();
        Ok(found)
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
        filter: &BookFilter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let found = con
            .books()
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect::<Vec<_>>();
        Ok(found)
    }
}

#[async_trait::async_trait]
impl BookModifier for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        if con.books().iter().any(|stored| stored.id() == book.id()) {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Book id `{}` already exists", book.id())));
        }
        con.books_mut().push(book.clone());
        tracing::debug!("created book {}", book.id());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        let position = position_of(con, book.id())?;
        con.books_mut()[position] = book.clone();
        tracing::debug!("updated book {}", book.id());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<Book, KernelError> {
        let position = position_of(con, book_id)?;
        let removed = con.books_mut().remove(position);
        tracing::debug!("deleted book {}", book_id);
        Ok(removed)
    }
}

fn position_of(
    con: &InMemoryTransaction,
    id: &BookId,
) -> error_stack::Result<usize, KernelError> {
    con.books()
        .iter()
        .position(|book| book.id() == id)
        .ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("Book id `{}` is not stored", id))
        })
}
