/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 */
//! A transport-independent request handler that can be plugged into any HTTP server.

use crate::sources::{load_catalog, DataSource};

pub const OK: u16 = 200;
pub const INTERNAL_SERVER_ERROR: u16 = 500;
pub const METHOD_NOT_ALLOWED: u16 = 405;

const JSON: &str = "application/json; charset=utf-8";
const TEXT: &str = "text/plain; charset=utf-8";

/// The answer to a request for the emoji catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String
}

impl Response {
    fn text(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: TEXT,
            body
        }
    }
}

/// Answers a request: `GET` returns the catalog as JSON, everything else is rejected.
///
/// Every request loads and parses the data again.
/// # Examples
/// ```
/// use emoji_catalog::handler::{handle, METHOD_NOT_ALLOWED};
/// use emoji_catalog::sources::text_source::TextSource;
///
/// let response = handle("POST", &TextSource::default());
/// assert_eq!(response.status, METHOD_NOT_ALLOWED);
/// assert_eq!(response.body, "POST request not allowed");
/// ```
pub fn handle<S: DataSource + ?Sized>(method: &str, source: &S) -> Response {
    if method != "GET" {
        return Response::text(METHOD_NOT_ALLOWED, format!("{} request not allowed", method));
    }

    let json = load_catalog(source)
        .map_err(|error| error!("{}", error))
        .and_then(|catalog| serde_json::to_string(&catalog)
            .map_err(|error| error!("Could not serialize the catalog: {}", error)));
    match json {
        Ok(body) => Response {
            status: OK,
            content_type: JSON,
            body
        },
        Err(()) => Response::text(INTERNAL_SERVER_ERROR, String::from("500 - Could not parse emoji data"))
    }
}
