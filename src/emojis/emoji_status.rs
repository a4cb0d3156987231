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

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The qualification status of a line in `emoji-test.txt`
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EmojiStatus {
    /// Skin tones and hair styles that are only used inside of sequences
    Component,
    /// The canonical, complete glyph sequence for an emoji
    FullyQualified,
    /// Missing some of the variation selectors a fully-qualified sequence has
    MinimallyQualified,
    /// Not actually displayed as an emoji/not RGI
    Unqualified
}

impl EmojiStatus {
    /// Only fully-qualified sequences end up in a catalog.
    pub fn is_canonical(&self) -> bool {
        matches!(self, Self::FullyQualified)
    }
}

impl Default for EmojiStatus {
    fn default() -> Self {
        Self::Unqualified
    }
}

impl Display for EmojiStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Component => "component",
            Self::FullyQualified => "fully-qualified",
            Self::MinimallyQualified => "minimally-qualified",
            Self::Unqualified => "unqualified"
        };
        f.write_str(label)
    }
}

/// Labels are matched exactly, as they appear in `emoji-test.txt`.
/// # Examples
/// ```
/// use std::str::FromStr;
/// use emoji_catalog::emojis::emoji_status::EmojiStatus;
///
/// assert_eq!(EmojiStatus::from_str("fully-qualified"), Ok(EmojiStatus::FullyQualified));
/// assert!(EmojiStatus::from_str("Fully-Qualified").is_err());
/// ```
impl FromStr for EmojiStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "component" => Ok(Self::Component),
            "fully-qualified" => Ok(Self::FullyQualified),
            "minimally-qualified" => Ok(Self::MinimallyQualified),
            "unqualified" => Ok(Self::Unqualified),
            other => Err(other.to_string())
        }
    }
}
