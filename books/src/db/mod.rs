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

//! Database abstraction in terms of the operations needed by the server.

use crate::model::*;
use books_core::db::sqlite::{self, map_sqlx_error};
use books_core::db::{DbError, DbResult, Executor};
use futures::TryStreamExt;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;


/// Initializes the database schema.  This is idempotent so it is safe to call on every startup.
pub async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,
    }
}

/// Builds a `Book` from a SQLite `row` that contains all of the book columns.
fn sqlite_row_to_book(row: SqliteRow) -> DbResult<Book> {
    let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;
    let book_name: String = row.try_get("book_name").map_err(map_sqlx_error)?;
    let author: String = row.try_get("author").map_err(map_sqlx_error)?;
    let publisher: String = row.try_get("publisher").map_err(map_sqlx_error)?;

    let details =
        BookDetails::new(BookName::new(book_name)?, Author::new(author)?, Publisher::new(publisher)?);
    Ok(Book::new(BookId::new(id), details))
}

/// Stores a new book with the given `details` and returns it with its newly-assigned identifier.
pub(crate) async fn put_book(ex: &mut Executor, details: &BookDetails) -> DbResult<Book> {
    let id = match ex {
        Executor::Sqlite(ex) => {
            let query_str = "INSERT INTO books (book_name, author, publisher) VALUES (?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(details.book_name().as_str())
                .bind(details.author().as_str())
                .bind(details.publisher().as_str())
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            if done.rows_affected() != 1 {
                return Err(DbError::BackendError(format!(
                    "Insert created {} rows",
                    done.rows_affected()
                )));
            }
            done.last_insert_rowid()
        }
    };
    Ok(Book::new(BookId::new(id), details.clone()))
}

/// Gets all existing books sorted by their identifier.
pub(crate) async fn get_books(ex: &mut Executor) -> DbResult<Vec<Book>> {
    let mut books = vec![];
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "SELECT id, book_name, author, publisher FROM books ORDER BY id";
            let mut rows = sqlx::query(query_str).fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(map_sqlx_error)? {
                books.push(sqlite_row_to_book(row)?);
            }
        }
    }
    Ok(books)
}

/// Gets the book identified by `id`.
pub(crate) async fn get_book(ex: &mut Executor, id: BookId) -> DbResult<Book> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "SELECT id, book_name, author, publisher FROM books WHERE id = ?";
            let row = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            sqlite_row_to_book(row)
        }
    }
}

/// Overwrites all fields of the existing book identified by `id` with `details`.
pub(crate) async fn update_book(
    ex: &mut Executor,
    id: BookId,
    details: &BookDetails,
) -> DbResult<Book> {
    let rows_affected = match ex {
        Executor::Sqlite(ex) => {
            let query_str = "
                UPDATE books
                SET book_name = ?, author = ?, publisher = ?
                WHERE id = ?
            ";
            sqlx::query(query_str)
                .bind(details.book_name().as_str())
                .bind(details.author().as_str())
                .bind(details.publisher().as_str())
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?
                .rows_affected()
        }
    };
    match rows_affected {
        0 => Err(DbError::NotFound),
        1 => Ok(Book::new(id, details.clone())),
        n => Err(DbError::BackendError(format!("Update of {:?} affected {} rows", id, n))),
    }
}

/// Deletes the book identified by `id`.
pub(crate) async fn delete_book(ex: &mut Executor, id: BookId) -> DbResult<()> {
    let rows_affected = match ex {
        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM books WHERE id = ?";
            sqlx::query(query_str)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?
                .rows_affected()
        }
    };
    match rows_affected {
        0 => Err(DbError::NotFound),
        1 => Ok(()),
        n => Err(DbError::BackendError(format!("Deletion of {:?} affected {} rows", id, n))),
    }
}
