//! Where `emoji-test.txt` and the annotations come from.

use std::fmt::Debug;

use crate::tables::annotations::AnnotationTable;
use crate::tables::catalog::{parse, Catalog};
use crate::tables::errors::SourceError;

pub mod fs_source;
pub mod text_source;
#[cfg(feature = "online")]
pub mod unicode_source;

/// Provides the raw data a catalog is built from
pub trait DataSource: Debug + Send + Sync {
    /// The full content of an `emoji-test.txt`-like file
    fn emoji_test(&self) -> Result<String, SourceError>;

    /// The annotations, keyed by the rendered emoji.
    /// Sources without annotations return an empty table.
    fn annotations(&self) -> Result<AnnotationTable, SourceError>;
}

/// Retrieves both inputs from a source and parses them into a fresh catalog.
/// # Examples
/// ```
/// use emoji_catalog::sources::load_catalog;
/// use emoji_catalog::sources::text_source::TextSource;
///
/// let source = TextSource::new("# group: Flags\n1F3C1 ; fully-qualified # 🏁 E0.6 chequered flag");
/// let catalog = load_catalog(&source).unwrap();
///
/// assert_eq!(catalog.get("Flags").unwrap()[0].character, "🏁");
/// ```
pub fn load_catalog<S: DataSource + ?Sized>(source: &S) -> Result<Catalog, SourceError> {
    let text = source.emoji_test()?;
    let annotations = source.annotations()?;
    debug!("Parsing emoji data from {:?}", source);
    Ok(parse(&text, &annotations))
}
