use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::Book;
use kernel::KernelError;

pub use self::book::*;

mod book;

/// Process-local book store. Cloning shares the same collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    books: Arc<Mutex<Vec<Book>>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let books = Arc::clone(&self.books).lock_owned().await;
        Ok(InMemoryTransaction {
            books,
            snapshot: None,
        })
    }
}

/// Exclusive access to the collection for the duration of one operation.
///
/// The collection is snapshotted before the first write. Rolling back, or dropping the
/// transaction without committing, restores that snapshot.
pub struct InMemoryTransaction {
    books: OwnedMutexGuard<Vec<Book>>,
    snapshot: Option<Vec<Book>>,
}

impl InMemoryTransaction {
    pub(in crate::database) fn books(&self) -> &[Book] {
        &self.books
    }

    pub(in crate::database) fn books_mut(&mut self) -> &mut Vec<Book> {
        if self.snapshot.is_none() {
            self.snapshot = Some(self.books.clone());
        }
        &mut self.books
    }

    fn restore(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            tracing::debug!("restoring {} books from snapshot", snapshot.len());
            *self.books = snapshot;
        }
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(mut self) -> error_stack::Result<(), KernelError> {
        self.snapshot = None;
        Ok(())
    }

    async fn roll_back(mut self) -> error_stack::Result<(), KernelError> {
        self.restore();
        Ok(())
    }
}

impl Drop for InMemoryTransaction {
    fn drop(&mut self) {
        self.restore();
    }
}
