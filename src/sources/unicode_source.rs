use std::fmt::{Debug, Formatter};

use crate::sources::DataSource;
use crate::tables::annotations::AnnotationTable;
use crate::tables::errors::SourceError;
use crate::tables::online::{annotations_url, emoji_test_url, fetch_text, DEFAULT_LOCALE};

/// Downloads `emoji-test.txt` from unicode.org and the annotations from cldr-json.
///
/// Nothing is cached; every request fetches both files again.
pub struct UnicodeSource {
    client: reqwest::blocking::Client,
    emoji_test_url: String,
    annotations_url: Option<String>
}

impl UnicodeSource {
    /// `version` is the emoji version (e.g. `15.1`), `0.0` for the latest one.
    pub fn new(version: f64, locale: Option<&str>) -> Result<Self, SourceError> {
        let client = reqwest::blocking::ClientBuilder::new().build()?;
        Ok(Self::with_urls(
            client,
            emoji_test_url(version),
            Some(annotations_url(locale.unwrap_or(DEFAULT_LOCALE)))
        ))
    }

    /// Uses custom locations, e.g. a mirror. Without an annotations URL, the annotation table
    /// stays empty.
    pub fn with_urls(client: reqwest::blocking::Client, emoji_test_url: String, annotations_url: Option<String>) -> Self {
        Self {
            client,
            emoji_test_url,
            annotations_url
        }
    }
}

impl Debug for UnicodeSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnicodeSource")
            .field("emoji_test_url", &self.emoji_test_url)
            .field("annotations_url", &self.annotations_url)
            .finish()
    }
}

impl DataSource for UnicodeSource {
    fn emoji_test(&self) -> Result<String, SourceError> {
        fetch_text(&self.client, &self.emoji_test_url)
    }

    fn annotations(&self) -> Result<AnnotationTable, SourceError> {
        match &self.annotations_url {
            Some(url) => {
                let text = fetch_text(&self.client, url)?;
                Ok(AnnotationTable::from_cldr_json(text.as_bytes())?)
            }
            None => Ok(AnnotationTable::new())
        }
    }
}
