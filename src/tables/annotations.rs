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
//! Lookup tables for the [CLDR annotations][cldr] of emojis, i.e. search keywords and
//! spoken names.
//!
//! [cldr]: https://github.com/unicode-org/cldr-json/tree/main/cldr-json/cldr-annotations-full

use std::collections::HashMap;
use std::io::Read;
use std::iter::FromIterator;

use serde::{Deserialize, Serialize};

/// The annotations for a single emoji
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct AnnotationRecord {
    /// Alternative names and keywords, in CLDR order
    #[serde(default)]
    pub default: Vec<String>,
    /// Candidate display names ("text to speech"); the first one is the canonical name
    #[serde(default)]
    pub tts: Vec<String>
}

impl AnnotationRecord {
    pub fn new(default: Vec<String>, tts: Vec<String>) -> Self {
        Self { default, tts }
    }

    /// The first spoken form, unless it is missing or blank
    pub fn spoken_name(&self) -> Option<&str> {
        self.tts.first()
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
    }
}

/// The layout of `annotations.json` in cldr-json
#[derive(Deserialize)]
struct CldrFile {
    annotations: CldrAnnotations
}

#[derive(Deserialize)]
struct CldrAnnotations {
    annotations: HashMap<String, AnnotationRecord>
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CldrDocument {
    Full(CldrFile),
    Bare(HashMap<String, AnnotationRecord>)
}

/// A mapping from an emoji to its annotations.
///
/// The tables loaded from CLDR are keyed by the rendered emoji (e.g. `😀`), but any other key is
/// fine as long as it is either the emoji itself or its space-separated codepoints
/// (e.g. `1F600`); see [AnnotationTable::resolve].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotationTable {
    table: HashMap<String, AnnotationRecord>
}

impl AnnotationTable {
    /// Creates a new, empty annotation table
    pub fn new() -> Self {
        Self {
            table: HashMap::new()
        }
    }

    /// Reads a CLDR annotations file.
    ///
    /// Both the full cldr-json layout
    /// (`{"annotations": {"identity": {...}, "annotations": {"😀": {"default": [...], "tts": [...]}}}}`)
    /// and a bare mapping (`{"😀": {"default": [...], "tts": [...]}}`) are accepted.
    /// # Examples
    /// ```
    /// use emoji_catalog::tables::annotations::AnnotationTable;
    ///
    /// let json = r#"{"annotations": {"identity": {"language": "en"}, "annotations": {
    ///     "😀": {"default": ["face", "grin", "grinning face"], "tts": ["grinning face"]}
    /// }}}"#;
    /// let table = AnnotationTable::from_cldr_json(json.as_bytes()).unwrap();
    ///
    /// assert_eq!(table.get("😀").unwrap().default, vec!["face", "grin", "grinning face"]);
    /// ```
    pub fn from_cldr_json<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        let document: CldrDocument = serde_json::from_reader(reader)?;
        let table = match document {
            CldrDocument::Full(file) => file.annotations.annotations,
            CldrDocument::Bare(table) => table
        };
        info!("Loaded annotations for {} emojis", table.len());
        Ok(Self { table })
    }

    /// Inserts a new key-annotation pair and returns the previous one if there was one.
    pub fn insert<K: Into<String>>(&mut self, key: K, record: AnnotationRecord) -> Option<AnnotationRecord> {
        self.table.insert(key.into(), record)
    }

    /// Exact lookup, without any normalization
    pub fn get(&self, key: &str) -> Option<&AnnotationRecord> {
        self.table.get(key)
    }

    /// Finds the annotations for an emoji, trying its rendered form first and its codepoints
    /// second.
    /// # Examples
    /// ```
    /// use emoji_catalog::tables::annotations::{AnnotationRecord, AnnotationTable};
    ///
    /// let mut table = AnnotationTable::new();
    /// table.insert("1F600", AnnotationRecord::new(vec![String::from("grin")], vec![]));
    ///
    /// assert!(table.resolve("😀", "1F600").is_some());
    /// assert!(table.resolve("😃", "1F603").is_none());
    /// ```
    pub fn resolve(&self, character: &str, codepoints: &str) -> Option<&AnnotationRecord> {
        self.get(character)
            .or_else(|| self.get(codepoints))
    }

    /// Returns the size of the table
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Checks whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl From<HashMap<String, AnnotationRecord>> for AnnotationTable {
    fn from(table: HashMap<String, AnnotationRecord>) -> Self {
        Self { table }
    }
}

impl<K: Into<String>> FromIterator<(K, AnnotationRecord)> for AnnotationTable {
    fn from_iter<T: IntoIterator<Item=(K, AnnotationRecord)>>(iter: T) -> Self {
        Self {
            table: iter.into_iter()
                .map(|(key, record)| (key.into(), record))
                .collect()
        }
    }
}

impl AsRef<HashMap<String, AnnotationRecord>> for AnnotationTable {
    fn as_ref(&self) -> &HashMap<String, AnnotationRecord> {
        &self.table
    }
}
