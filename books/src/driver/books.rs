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

//! Operations on the collection of books.

use crate::db;
use crate::driver::Driver;
use crate::model::*;
use books_core::driver::DriverResult;

impl Driver {
    /// Stores a new book with the given `details` and returns it with its assigned identifier.
    pub(crate) async fn create_book(self, details: BookDetails) -> DriverResult<Book> {
        let book = db::put_book(&mut self.db.ex().await?, &details).await?;
        Ok(book)
    }

    /// Gets all existing books sorted by identifier.
    pub(crate) async fn get_books(self) -> DriverResult<Vec<Book>> {
        let books = db::get_books(&mut self.db.ex().await?).await?;
        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;

    #[tokio::test]
    async fn test_create_book_assigns_new_ids() {
        let context = TestContext::setup().await;

        let details = BookDetails::new("Dune".into(), "Herbert".into(), "Ace".into());
        let book1 = context.driver().create_book(details.clone()).await.unwrap();
        let book2 = context.driver().create_book(details.clone()).await.unwrap();
        assert_ne!(book1.id(), book2.id());
        assert_eq!(&details, book1.details());
        assert_eq!(&details, book2.details());

        assert_eq!(book1, db::get_book(&mut context.ex().await, *book1.id()).await.unwrap());
        assert_eq!(book2, db::get_book(&mut context.ex().await, *book2.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_books_none() {
        let context = TestContext::setup().await;

        let books = context.driver().get_books().await.unwrap();
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_get_books_some() {
        let context = TestContext::setup().await;

        let mut exp_books = vec![];
        for name in ["c", "a", "b"] {
            let details = BookDetails::new(BookName::new(name).unwrap(), "x".into(), "y".into());
            exp_books.push(db::put_book(&mut context.ex().await, &details).await.unwrap());
        }

        let books = context.driver().get_books().await.unwrap();
        assert_eq!(exp_books, books);
    }
}
