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
//! Turns an [`emoji-test.txt`][emoji-test] file into a catalog of fully-qualified emojis,
//! grouped the same way as in the file.
//!
//! [emoji-test]: https://unicode.org/Public/emoji/latest/emoji-test.txt

use indexmap::IndexMap;
use serde::Serialize;

use crate::emojis::emoji::EmojiRecord;
use crate::tables::annotations::AnnotationTable;
use crate::tables::fields::EmojiFields;
use crate::tables::regexes::{match_line, EmojiTestLine};

/// The emojis of one group, in the order of the source file
pub type EmojiGroup = Vec<EmojiRecord>;

/// All groups of an `emoji-test.txt` file with their fully-qualified emojis.
///
/// Groups are kept in the order in which their headers appear in the file, so serializing a
/// catalog twice always yields the same JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    groups: IndexMap<String, EmojiGroup>
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            groups: IndexMap::new()
        }
    }

    /// Returns the emojis of a group
    pub fn get(&self, group: &str) -> Option<&EmojiGroup> {
        self.groups.get(group)
    }

    /// The group names in the order of the source file
    pub fn groups(&self) -> impl Iterator<Item=&str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, EmojiGroup> {
        self.groups.iter()
    }

    /// The number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The number of emojis in all groups together
    pub fn emoji_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Opens a group, if it doesn't exist yet.
    fn open_group(&mut self, group: &str) {
        if !self.groups.contains_key(group) {
            self.groups.insert(group.to_owned(), Vec::new());
        }
    }

    fn push(&mut self, group: &str, emoji: EmojiRecord) {
        if let Some(emojis) = self.groups.get_mut(group) {
            emojis.push(emoji);
        }
    }
}

impl From<Catalog> for IndexMap<String, EmojiGroup> {
    fn from(catalog: Catalog) -> Self {
        catalog.groups
    }
}

impl AsRef<IndexMap<String, EmojiGroup>> for Catalog {
    fn as_ref(&self) -> &IndexMap<String, EmojiGroup> {
        &self.groups
    }
}

/// Which group data lines currently belong to
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState<'a> {
    /// No group header has been seen yet
    NoGroup,
    InGroup(&'a str)
}

/// Walks through an `emoji-test.txt` file line by line and collects its emojis
struct Scanner<'a, 't> {
    state: ScanState<'a>,
    annotations: &'t AnnotationTable,
    catalog: Catalog
}

impl<'a, 't> Scanner<'a, 't> {
    fn new(annotations: &'t AnnotationTable) -> Self {
        Self {
            state: ScanState::NoGroup,
            annotations,
            catalog: Catalog::new()
        }
    }

    fn scan(&mut self, line: &'a str) {
        match match_line(line) {
            EmojiTestLine::Group(group) => {
                self.catalog.open_group(group);
                self.state = ScanState::InGroup(group);
            }
            EmojiTestLine::Data(fields) => self.assemble(&fields),
            EmojiTestLine::Comment | EmojiTestLine::Blank => ()
        }
    }

    /// Adds the emoji of a data line to the current group if it is fully-qualified
    fn assemble(&mut self, fields: &EmojiFields) {
        let group = match self.state {
            ScanState::InGroup(group) => group,
            ScanState::NoGroup => {
                warn!("Dropping emoji outside of any group: {:?}", fields);
                return;
            }
        };
        match fields.status() {
            Ok(status) if status.is_canonical() => {
                if let Some(emoji) = EmojiRecord::assemble(fields, self.annotations) {
                    self.catalog.push(group, emoji);
                }
            }
            Ok(_) => (),
            Err(status) => debug!("Unknown qualification \"{}\" for {:?}", status, fields)
        }
    }

    fn finish(self) -> Catalog {
        self.catalog
    }
}

/// Parses the content of an `emoji-test.txt`-like file into a [Catalog].
///
/// Only fully-qualified emojis are included. Their names and keywords are taken from the
/// annotation table where possible.
/// This never fails; malformed lines and emojis before the first group header are skipped.
/// # Examples
/// ```
/// use emoji_catalog::tables::annotations::AnnotationTable;
/// use emoji_catalog::tables::catalog::parse;
///
/// let text = "# group: Smileys & Emotion
/// 1F600 ; fully-qualified     # 😀 E1.0 grinning face
/// 263A  ; unqualified         # ☺ E0.6 smiling face";
///
/// let catalog = parse(text, &AnnotationTable::new());
/// let smileys = catalog.get("Smileys & Emotion").unwrap();
///
/// assert_eq!(smileys.len(), 1);
/// assert_eq!(smileys[0].name, "grinning face");
/// ```
pub fn parse(text: &str, annotations: &AnnotationTable) -> Catalog {
    let mut scanner = Scanner::new(annotations);
    text.lines().for_each(|line| scanner.scan(line));
    let catalog = scanner.finish();
    info!("Parsed {} emojis in {} groups", catalog.emoji_count(), catalog.len());
    catalog
}
