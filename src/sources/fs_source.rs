use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::sources::DataSource;
use crate::tables::annotations::AnnotationTable;
use crate::tables::errors::SourceError;

/// Reads `emoji-test.txt` and (optionally) a CLDR annotations file from the file system
#[derive(Clone, Debug)]
pub struct FsSource {
    emoji_test: PathBuf,
    annotations: Option<PathBuf>
}

impl FsSource {
    pub fn new(emoji_test: PathBuf, annotations: Option<PathBuf>) -> Self {
        Self {
            emoji_test,
            annotations
        }
    }

    /// Uses the default file names `emoji-test.txt` and `annotations.json` in a directory.
    /// The annotations are only used if that file exists.
    pub fn from_dir(dir: &Path) -> Self {
        let annotations = dir.join(crate::tables::ANNOTATIONS);
        Self {
            emoji_test: dir.join(crate::tables::EMOJI_TEST),
            annotations: Some(annotations).filter(|path| path.is_file())
        }
    }
}

impl DataSource for FsSource {
    fn emoji_test(&self) -> Result<String, SourceError> {
        Ok(std::fs::read_to_string(&self.emoji_test)?)
    }

    fn annotations(&self) -> Result<AnnotationTable, SourceError> {
        match &self.annotations {
            Some(path) => {
                let reader = BufReader::new(File::open(path)?);
                Ok(AnnotationTable::from_cldr_json(reader)?)
            }
            None => Ok(AnnotationTable::new())
        }
    }
}
