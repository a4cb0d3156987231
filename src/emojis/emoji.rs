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
//! The main data struct for single emojis.

use std::fmt::{Display, Formatter};
use std::fmt;

use serde::Serialize;

use crate::tables::annotations::{AnnotationRecord, AnnotationTable};
use crate::tables::fields::EmojiFields;

/// One fully-qualified emoji as it is exposed in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EmojiRecord {
    /// The hexadecimal codepoints, space-separated in the order of the source line
    /// (e.g. `1F636 200D 1F32B FE0F`).
    pub codepoints: String,
    /// The rendered glyph, taken verbatim from the comment of the source line.
    pub character: String,
    /// The display name.
    ///
    /// This is the first spoken form of the matching annotation if there is one,
    /// otherwise the description from `emoji-test.txt`.
    pub name: String,
    /// Search keywords from the matching annotation (empty if there is none)
    pub annotations: Vec<String>
}

impl EmojiRecord {
    /// Builds a record from an already tokenized line and the annotation table.
    ///
    /// Returns `None` if the line lacks the codepoints, the character or any kind of name,
    /// as such a record could not be displayed anyway.
    /// # Examples
    /// ```
    /// use emoji_catalog::emojis::emoji::EmojiRecord;
    /// use emoji_catalog::tables::annotations::AnnotationTable;
    /// use emoji_catalog::tables::fields::EmojiFields;
    ///
    /// let fields = EmojiFields::tokenize("1F600 ; fully-qualified # 😀 E1.0 grinning face");
    /// let record = EmojiRecord::assemble(&fields, &AnnotationTable::new()).unwrap();
    ///
    /// assert_eq!(record, EmojiRecord {
    ///     codepoints: String::from("1F600"),
    ///     character: String::from("😀"),
    ///     name: String::from("grinning face"),
    ///     annotations: vec![]
    /// });
    /// ```
    pub fn assemble(fields: &EmojiFields, annotations: &AnnotationTable) -> Option<EmojiRecord> {
        let codepoints = fields.codepoints();
        let character = fields.character();
        if codepoints.is_empty() || character.is_empty() {
            warn!("Skipping incomplete emoji line: {:?}", fields);
            return None;
        }

        let annotation = annotations.resolve(character, &codepoints);
        let name = annotation
            .and_then(AnnotationRecord::spoken_name)
            .map(str::to_owned)
            .unwrap_or_else(|| fields.name());
        if name.is_empty() {
            warn!("Skipping emoji without a name: {:?}", fields);
            return None;
        }
        let annotations = annotation
            .map(|annotation| annotation.default.clone())
            .unwrap_or_default();

        Some(EmojiRecord {
            codepoints,
            character: character.to_owned(),
            name,
            annotations
        })
    }
}

impl Display for EmojiRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (U+{})", self.character, self.name, self.codepoints.replace(' ', " U+"))
    }
}
