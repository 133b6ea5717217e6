// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Business logic for the service.

use books_core::db::{Db, DbError};
use books_core::driver::DriverError;
use std::sync::Arc;

mod book;
mod books;
#[cfg(test)]
mod testutils;

/// Message reported when an operation references a book that does not exist.
pub(crate) const BOOK_NOT_FOUND: &str = "Book not found";

/// Translates a database error `e` into a driver error, describing missing entities as books.
fn map_book_error(e: DbError) -> DriverError {
    match e {
        DbError::NotFound => DriverError::NotFound(BOOK_NOT_FOUND.to_owned()),
        e => e.into(),
    }
}

/// Business logic.
///
/// The public operations exposed by the driver are all "one shot": each obtains its own executor
/// from the database and releases it before returning, so it's incorrect for the caller to use two
/// separate calls.  For this reason, these operations consume the driver in an attempt to minimize
/// the possibility of executing two operations.
#[derive(Clone)]
pub(crate) struct Driver {
    /// The database that the driver uses for persistence.
    db: Arc<dyn Db + Send + Sync>,
}

impl Driver {
    /// Creates a new driver backed by the given injected components.
    pub(crate) fn new(db: Arc<dyn Db + Send + Sync>) -> Self {
        Self { db }
    }
}
