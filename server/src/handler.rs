use driver::database::{InMemoryBookRepository, InMemoryDatabase};
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::policy::DependOnUpdateStamp;
use kernel::interface::update::DependOnBookModifier;
use kernel::prelude::entity::UpdateStamp;
use std::ops::Deref;
use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new(config: &ServerConfig) -> Self {
        Self(Arc::new(Handler::init(config)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    database: InMemoryDatabase,
    books: InMemoryBookRepository,
    update_stamp: UpdateStamp,
}

impl Handler {
    pub fn init(config: &ServerConfig) -> Self {
        Self {
            database: InMemoryDatabase::new(),
            books: InMemoryBookRepository,
            update_stamp: config.update_stamp,
        }
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = InMemoryDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.database
    }
}

impl DependOnBookQuery for Handler {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &self.books
    }
}

impl DependOnBookModifier for Handler {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &self.books
    }
}

impl DependOnUpdateStamp for Handler {
    fn update_stamp(&self) -> UpdateStamp {
        self.update_stamp
    }
}
