/// Parses `emoji-test.txt` into a catalog of grouped emojis
pub mod catalog;
/// Lookup tables for CLDR annotations
pub mod annotations;
pub mod fields;
pub mod errors;
pub mod regexes;
#[cfg(feature = "online")]
pub mod online;
#[cfg(test)]
mod tests;

pub const EMOJI_TEST: &str = "emoji-test.txt";
pub const ANNOTATIONS: &str = "annotations.json";
