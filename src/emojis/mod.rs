/// The records that end up in a catalog
pub mod emoji;
/// The qualification status of an `emoji-test.txt` line
pub mod emoji_status;
