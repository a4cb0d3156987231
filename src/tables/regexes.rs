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

use regex::Regex;

use crate::tables::fields::EmojiFields;

/// Matches group headers like `# group: Smileys & Emotion`.
/// `# subgroup: ...` lines deliberately do not match.
pub fn group_regex() -> &'static Regex {
    lazy_static! {
        static ref GROUP_REGEX: Regex = Regex::new(r"^\s*#\s*group:\s*(?P<group>.*?)\s*$").unwrap();
    }

    &*GROUP_REGEX
}

/// Matches the version tag in the comment of a data line, e.g. `E13.1`
pub fn version_regex() -> &'static Regex {
    lazy_static! {
        static ref VERSION_REGEX: Regex = Regex::new(r"^E(?P<version>\d+\.\d+)$").unwrap();
    }

    &*VERSION_REGEX
}

/// One line of an `emoji-test.txt`-like file
#[derive(Debug, PartialEq, Eq)]
pub enum EmojiTestLine<'a> {
    /// `# group: <name>`
    Group(&'a str),
    /// Any other comment, including subgroup headers
    Comment,
    Blank,
    /// `<codepoints> ; <qualification> # <character> <E-version> <name...>`
    Data(EmojiFields<'a>)
}

pub fn match_line(line: &str) -> EmojiTestLine {
    let trimmed = line.trim();
    let entry = if trimmed.is_empty() {
        EmojiTestLine::Blank
    } else if let Some(captures) = group_regex().captures(trimmed) {
        // The regex only matches if the group has been captured
        EmojiTestLine::Group(captures.name("group").map_or("", |group| group.as_str()))
    } else if trimmed.starts_with('#') {
        EmojiTestLine::Comment
    } else {
        EmojiTestLine::Data(EmojiFields::tokenize(trimmed))
    };
    debug!("Parsed:  {:?}", entry);
    entry
}
