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

//! Entry point to the books service.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use books_core::db::sqlite::{self, SqliteOptions};
use books_core::db::Db;
use books_core::env::get_optional_var;
use books_service::db::init_schema;
use books_service::serve;
use log::info;
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

/// Port to listen on when `BOOKS_PORT` is not set.
const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let addr = get_optional_var::<IpAddr>("BOOKS", "BIND_ADDRESS")?
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
    let port = get_optional_var::<u16>("BOOKS", "PORT")?.unwrap_or(DEFAULT_PORT);

    let db_opts = SqliteOptions::from_env("BOOKS_DB")?;
    info!("Opening database {}", db_opts.path);
    let db: Arc<dyn Db + Send + Sync> = Arc::new(sqlite::connect(db_opts).await?);
    init_schema(&mut db.ex().await?).await?;

    serve((addr, port), db).await
}
