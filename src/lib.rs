/*
 * Copyright 2019 Constantin A. <emoji.builder@c1710.de>
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
 */
//! The main crate for emoji_catalog, turning `emoji-test.txt` and the CLDR annotations into a
//! grouped, JSON-serializable catalog of emojis

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// Single emoji records and their qualification status
pub mod emojis;
/// Parsers for `emoji-test.txt` and the annotation tables
pub mod tables;
/// Sources for the raw data (files, memory or unicode.org)
pub mod sources;
/// Answers requests for the catalog
pub mod handler;

pub use tables::annotations::{AnnotationRecord, AnnotationTable};
pub use tables::catalog::{parse, Catalog};
pub use emojis::emoji::EmojiRecord;

#[cfg(test)]
mod tests;
