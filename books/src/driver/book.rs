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

//! Operations on one book.

use crate::db;
use crate::driver::{map_book_error, Driver};
use crate::model::*;
use books_core::driver::DriverResult;

impl Driver {
    /// Deletes the existing book identified by `id`.
    pub(crate) async fn delete_book(self, id: BookId) -> DriverResult<()> {
        db::delete_book(&mut self.db.ex().await?, id).await.map_err(map_book_error)
    }

    /// Gets the book identified by `id`.
    pub(crate) async fn get_book(self, id: BookId) -> DriverResult<Book> {
        db::get_book(&mut self.db.ex().await?, id).await.map_err(map_book_error)
    }

    /// Replaces all fields of the book identified by `id` with `details`.
    pub(crate) async fn update_book(self, id: BookId, details: BookDetails) -> DriverResult<Book> {
        db::update_book(&mut self.db.ex().await?, id, &details).await.map_err(map_book_error)
    }
}
