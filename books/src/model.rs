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

//! High-level data types.

use books_core::model::{ModelError, ModelResult};
use derive_getters::Getters;
use derive_more::Constructor;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a book, assigned by the database on creation.
#[derive(Clone, Constructor, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub(crate) struct BookId(i64);

impl BookId {
    /// Returns the identifier as an `i64`, which is the native type of the database.
    pub(crate) fn as_i64(&self) -> i64 {
        self.0
    }
}

/// Generates a newtype for a required, non-empty text field of a book.
///
/// The generated type validates its contents both when constructed via `new` and when
/// deserialized, so that invalid input is rejected before it reaches the database.
macro_rules! text_field [
    ( $name:ident, $what:literal ) => {
        #[doc = concat!("The ", $what, " of a book.  Never empty.")]
        #[derive(Clone, Debug, Eq, PartialEq, Serialize)]
        #[serde(transparent)]
        pub(crate) struct $name(String);

        impl $name {
            /// Creates a new value from an untrusted string `s`, making sure it is valid.
            pub(crate) fn new<S: Into<String>>(s: S) -> ModelResult<Self> {
                let s = s.into();
                if s.is_empty() {
                    return Err(ModelError(format!("{} cannot be empty", $what)));
                }
                Ok(Self(s))
            }

            /// Returns a string view of the value.
            pub(crate) fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        #[cfg(test)]
        impl From<&'static str> for $name {
            /// Creates a new value from a hardcoded string, which must be valid.
            fn from(s: &'static str) -> Self {
                Self::new(s).expect("Hardcoded values must be valid")
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::new(s).map_err(serde::de::Error::custom)
            }
        }
    }
];

text_field!(BookName, "Book name");
text_field!(Author, "Author");
text_field!(Publisher, "Publisher");

/// Contents of a book as supplied by clients, which is everything but its identifier.
///
/// Updates always carry all fields: there is no way to modify only a subset of them.
#[derive(Clone, Constructor, Debug, Deserialize, Getters, PartialEq, Serialize)]
pub(crate) struct BookDetails {
    /// Title of the book.
    book_name: BookName,

    /// Who wrote the book.
    author: Author,

    /// Who published the book.
    publisher: Publisher,
}

/// A book as persisted in the database.
#[derive(Clone, Constructor, Debug, Deserialize, Getters, PartialEq, Serialize)]
pub(crate) struct Book {
    /// Identifier of the book.
    id: BookId,

    /// Contents of the book, which are serialized inline with the identifier.
    #[serde(flatten)]
    details: BookDetails,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn test_text_field_ok() {
        assert_eq!("Dune", BookName::new("Dune").unwrap().as_str());
        assert_eq!(" ", Author::new(" ").unwrap().as_str());
    }

    #[test]
    fn test_text_field_empty() {
        assert_eq!(ModelError("Book name cannot be empty".to_owned()), BookName::new("").unwrap_err());
        assert_eq!(ModelError("Author cannot be empty".to_owned()), Author::new("").unwrap_err());
        assert_eq!(
            ModelError("Publisher cannot be empty".to_owned()),
            Publisher::new("").unwrap_err()
        );
    }

    #[test]
    fn test_text_field_ser_de_ok() {
        assert_tokens(&Publisher::from("Ace"), &[Token::Str("Ace")]);
    }

    #[test]
    fn test_text_field_de_error() {
        assert_de_tokens_error::<Author>(&[Token::Str("")], "Author cannot be empty");
        assert_de_tokens_error::<Author>(
            &[Token::I64(3)],
            "invalid type: integer `3`, expected a string",
        );
    }

    #[test]
    fn test_book_id_ser_de() {
        assert_tokens(&BookId::new(42), &[Token::I64(42)]);
    }

    #[test]
    fn test_book_details_de_missing_field() {
        let err = serde_json::from_str::<BookDetails>(r#"{"book_name": "Dune", "author": "Herbert"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field `publisher`"));
    }

    #[test]
    fn test_book_details_de_ignores_id() {
        let details = serde_json::from_str::<BookDetails>(
            r#"{"id": 7, "book_name": "Dune", "author": "Herbert", "publisher": "Ace"}"#,
        )
        .unwrap();
        assert_eq!(BookDetails::new("Dune".into(), "Herbert".into(), "Ace".into()), details);
    }

    #[test]
    fn test_book_ser_is_flat() {
        let book = Book::new(
            BookId::new(1),
            BookDetails::new("Dune".into(), "Herbert".into(), "Ace".into()),
        );
        assert_eq!(
            r#"{"id":1,"book_name":"Dune","author":"Herbert","publisher":"Ace"}"#,
            serde_json::to_string(&book).unwrap()
        );
    }
}
