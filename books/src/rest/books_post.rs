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

//! API to create a new book.

use crate::driver::Driver;
use crate::model::BookDetails;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::{http, Json};
use books_core::rest::RestError;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Json(details): Json<BookDetails>,
) -> Result<(http::StatusCode, impl IntoResponse), RestError> {
    let book = driver.create_book(details).await?;
    Ok((http::StatusCode::CREATED, Json(book)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use crate::rest::testutils::*;
    use books_core::rest::testutils::*;
    use books_core::test_payload_must_be_json;
    use serde_json::json;

    fn route() -> (http::Method, String) {
        (http::Method::POST, "/books".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let request = json!({"book_name": "Dune", "author": "Herbert", "publisher": "Ace"});
        let response = OneShotBuilder::new(context.app(), route())
            .send_json(request)
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<serde_json::Value>()
            .await;
        let exp_response =
            json!({"id": 1, "book_name": "Dune", "author": "Herbert", "publisher": "Ace"});
        assert_eq!(exp_response, response);

        let book = context.get_book(BookId::new(1)).await;
        assert_eq!(BookDetails::new("Dune".into(), "Herbert".into(), "Ace".into()), *book.details());
    }

    #[tokio::test]
    async fn test_ids_are_new() {
        let mut context = TestContext::setup().await;

        let existing = context.create_book("a", "b", "c").await;

        let request = BookDetails::new("a".into(), "b".into(), "c".into());
        let response = OneShotBuilder::new(context.app(), route())
            .send_json(request)
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<Book>()
            .await;
        assert_ne!(existing.id(), response.id());
        assert_eq!(existing.details(), response.details());

        assert_eq!(2, context.get_books().await.len());
    }

    #[tokio::test]
    async fn test_missing_field() {
        let context = TestContext::setup().await;

        let request = json!({"book_name": "Dune", "author": "Herbert"});
        OneShotBuilder::new(context.app(), route())
            .send_json(request)
            .await
            .expect_status(http::StatusCode::UNPROCESSABLE_ENTITY)
            .expect_text("missing field `publisher`")
            .await;

        assert!(context.get_books().await.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_type() {
        let context = TestContext::setup().await;

        let request = json!({"book_name": "Dune", "author": 3, "publisher": "Ace"});
        OneShotBuilder::new(context.app(), route())
            .send_json(request)
            .await
            .expect_status(http::StatusCode::UNPROCESSABLE_ENTITY)
            .expect_text("invalid type")
            .await;

        assert!(context.get_books().await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_field() {
        let context = TestContext::setup().await;

        let request = json!({"book_name": "", "author": "Herbert", "publisher": "Ace"});
        OneShotBuilder::new(context.app(), route())
            .send_json(request)
            .await
            .expect_status(http::StatusCode::UNPROCESSABLE_ENTITY)
            .expect_text("Book name cannot be empty")
            .await;

        assert!(context.get_books().await.is_empty());
    }

    test_payload_must_be_json!(TestContext::setup().await.into_app(), route());
}
