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
//! Splits the data lines of `emoji-test.txt` into their columns.
//!
//! The syntax of these lines is:
//! `Codepoints ; ("component"|"fully-qualified"|"minimally-qualified"|"unqualified") # Emoji "E"Version Emoji name`
//! where the columns are padded with an arbitrary amount of whitespace.

use std::str::FromStr;

use itertools::Itertools;

use crate::emojis::emoji_status::EmojiStatus;
use crate::tables::regexes::version_regex;

pub const FIELD_SEPARATOR: &str = ";";
pub const COMMENT_MARKER: &str = "#";

const CODEPOINTS: usize = 0;
const QUALIFICATION: usize = 2;
const CHARACTER: usize = 4;
const VERSION: usize = 5;

/// The ordered tokens of one data line:
/// `[codepoints, ";", qualification, "#", character, version, name...]`.
///
/// Truncated lines simply have fewer tokens; every accessor returns an empty string for a
/// missing field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmojiFields<'a> {
    tokens: Vec<&'a str>
}

impl<'a> EmojiFields<'a> {
    /// Tokenizes a single line.
    /// Blank lines and comments don't have any fields.
    /// # Examples
    /// ```
    /// use emoji_catalog::tables::fields::EmojiFields;
    ///
    /// let fields = EmojiFields::tokenize("1F636 200D 1F32B FE0F   ; fully-qualified     # 😶‍🌫️ E13.1 face in clouds");
    /// assert_eq!(
    ///     fields.as_ref(),
    ///     ["1F636 200D 1F32B FE0F", ";", "fully-qualified", "#", "😶‍🌫️", "E13.1", "face", "in", "clouds"]
    /// );
    /// ```
    pub fn tokenize(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            return Self::default();
        }

        let mut tokens = Vec::with_capacity(10);
        let mut columns = line.splitn(2, FIELD_SEPARATOR);
        tokens.push(columns.next().unwrap_or_default().trim());
        if let Some(rest) = columns.next() {
            tokens.push(FIELD_SEPARATOR);
            let mut comment = rest.splitn(2, COMMENT_MARKER);
            tokens.push(comment.next().unwrap_or_default().trim());
            if let Some(comment) = comment.next() {
                tokens.push(COMMENT_MARKER);
                tokens.extend(comment.split_whitespace());
            }
        }
        Self { tokens }
    }

    fn field(&self, index: usize) -> &'a str {
        self.tokens.get(index).copied().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The codepoints, separated by single spaces in their original order.
    /// They are not validated in any way.
    pub fn codepoints(&self) -> String {
        self.field(CODEPOINTS).split_whitespace().join(" ")
    }

    /// The raw qualification label
    pub fn qualification(&self) -> &'a str {
        self.field(QUALIFICATION)
    }

    pub fn status(&self) -> Result<EmojiStatus, String> {
        EmojiStatus::from_str(self.qualification())
    }

    /// The rendered emoji right after the comment marker
    pub fn character(&self) -> &'a str {
        self.field(CHARACTER)
    }

    /// The emoji version tag (e.g. `E13.1`), if the line has one
    pub fn version(&self) -> Option<&'a str> {
        Some(self.field(VERSION))
            .filter(|version| version_regex().is_match(version))
    }

    /// The description, i.e. everything after the version tag, joined by single spaces.
    ///
    /// Older files did not include a version tag, in which case the description starts
    /// right after the emoji.
    pub fn name(&self) -> String {
        let start = if self.version().is_some() {
            VERSION + 1
        } else {
            VERSION
        };
        self.tokens.iter()
            .skip(start)
            .join(" ")
    }
}

impl<'a> AsRef<[&'a str]> for EmojiFields<'a> {
    fn as_ref(&self) -> &[&'a str] {
        &self.tokens
    }
}

impl<'a> From<Vec<&'a str>> for EmojiFields<'a> {
    fn from(tokens: Vec<&'a str>) -> Self {
        Self { tokens }
    }
}
