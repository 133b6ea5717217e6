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

//! Test utilities for the REST API.

use crate::db;
use crate::driver::Driver;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use books_core::db::{sqlite, Db, DbError};
use std::sync::Arc;

pub(crate) struct TestContext {
    db: Arc<dyn Db + Send + Sync>,
    app: Router,
}

impl TestContext {
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> = Arc::new(sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone());
        let app = app(driver);
        Self { db, app }
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    pub(crate) async fn create_book<N, A, P>(&mut self, book_name: N, author: A, publisher: P) -> Book
    where
        N: Into<String>,
        A: Into<String>,
        P: Into<String>,
    {
        let details = BookDetails::new(
            BookName::new(book_name).unwrap(),
            Author::new(author).unwrap(),
            Publisher::new(publisher).unwrap(),
        );
        db::put_book(&mut self.db.ex().await.unwrap(), &details).await.unwrap()
    }

    pub(crate) async fn has_book(&self, id: BookId) -> bool {
        match db::get_book(&mut self.db.ex().await.unwrap(), id).await {
            Ok(_) => true,
            Err(DbError::NotFound) => false,
            Err(e) => panic!("Unexpected database error: {}", e),
        }
    }

    pub(crate) async fn get_book(&self, id: BookId) -> Book {
        db::get_book(&mut self.db.ex().await.unwrap(), id).await.unwrap()
    }

    pub(crate) async fn get_books(&self) -> Vec<Book> {
        db::get_books(&mut self.db.ex().await.unwrap()).await.unwrap()
    }
}
