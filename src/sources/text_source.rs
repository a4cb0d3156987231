use crate::sources::DataSource;
use crate::tables::annotations::AnnotationTable;
use crate::tables::errors::SourceError;

/// Serves already loaded data, e.g. for tests or when the text is embedded in a program
#[derive(Clone, Debug, Default)]
pub struct TextSource {
    emoji_test: String,
    annotations: AnnotationTable
}

impl TextSource {
    pub fn new<S: Into<String>>(emoji_test: S) -> Self {
        Self::with_annotations(emoji_test, AnnotationTable::new())
    }

    pub fn with_annotations<S: Into<String>>(emoji_test: S, annotations: AnnotationTable) -> Self {
        Self {
            emoji_test: emoji_test.into(),
            annotations
        }
    }
}

impl DataSource for TextSource {
    fn emoji_test(&self) -> Result<String, SourceError> {
        Ok(self.emoji_test.clone())
    }

    fn annotations(&self) -> Result<AnnotationTable, SourceError> {
        Ok(self.annotations.clone())
    }
}
