use std::fs;
use std::path::PathBuf;

use crate::handler::{handle, INTERNAL_SERVER_ERROR, METHOD_NOT_ALLOWED, OK};
use crate::sources::fs_source::FsSource;
use crate::sources::load_catalog;
use crate::sources::text_source::TextSource;
use crate::tables::{ANNOTATIONS, EMOJI_TEST};
use crate::tables::errors::SourceError;

const EMOJI_TEST_TXT: &str = "# emoji-test.txt
# group: Smileys & Emotion

# subgroup: face-smiling
1F600                                                  ; fully-qualified     # 😀 E1.0 grinning face
263A FE0F                                              ; fully-qualified     # ☺️ E0.6 smiling face
263A                                                   ; unqualified         # ☺ E0.6 smiling face

#EOF
";

const ANNOTATIONS_JSON: &str = r#"{
  "annotations": {
    "identity": {"version": {"_cldrVersion": "44"}, "language": "en"},
    "annotations": {
      "😀": {"default": ["face", "grin", "grinning face"], "tts": ["grinning face"]},
      "☺": {"default": ["face", "outlined", "relaxed", "smile", "smiling face"], "tts": ["smiling face"]}
    }
  }
}"#;

fn write_files(with_annotations: bool) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().to_path_buf();
    fs::write(path.join(EMOJI_TEST), EMOJI_TEST_TXT).unwrap();
    if with_annotations {
        fs::write(path.join(ANNOTATIONS), ANNOTATIONS_JSON).unwrap();
    }
    (dir, path)
}

#[test]
fn test_fs_source() {
    let (_dir, path) = write_files(true);
    let source = FsSource::new(path.join(EMOJI_TEST), Some(path.join(ANNOTATIONS)));
    let catalog = load_catalog(&source).unwrap();
    let smileys = catalog.get("Smileys & Emotion").unwrap();

    assert_eq!(smileys.len(), 2);
    assert_eq!(smileys[0].annotations.len(), 3);
    assert_eq!(smileys[1].codepoints, "263A FE0F");
    // CLDR keys are stripped of FE0F, so only exact matches count
    assert!(smileys[1].annotations.is_empty());
    assert_eq!(smileys[1].name, "smiling face");
}

#[test]
fn test_fs_source_from_dir() {
    let (_dir, path) = write_files(false);
    let catalog = load_catalog(&FsSource::from_dir(&path)).unwrap();

    assert_eq!(catalog.emoji_count(), 2);
    assert!(catalog.get("Smileys & Emotion").unwrap()
        .iter()
        .all(|emoji| emoji.annotations.is_empty()));
}

#[test]
fn test_fs_source_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = FsSource::new(dir.path().join(EMOJI_TEST), None);

    match load_catalog(&source) {
        Err(SourceError::Io(_)) => (),
        other => panic!("Expected an I/O error, got {:?}", other)
    }
}

#[test]
fn test_fs_source_invalid_annotations() {
    let (_dir, path) = write_files(false);
    fs::write(path.join(ANNOTATIONS), "{ not json").unwrap();
    let source = FsSource::new(path.join(EMOJI_TEST), Some(path.join(ANNOTATIONS)));

    match load_catalog(&source) {
        Err(SourceError::Json(_)) => (),
        other => panic!("Expected a JSON error, got {:?}", other)
    }
}

#[test]
fn test_handle_get() {
    let response = handle("GET", &TextSource::new(EMOJI_TEST_TXT));

    assert_eq!(response.status, OK);
    assert!(response.content_type.starts_with("application/json"));
    let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["Smileys & Emotion"][0]["character"], "😀");
    assert_eq!(json["Smileys & Emotion"][1]["name"], "smiling face");
}

#[test]
fn test_handle_source_failure() {
    let dir = tempfile::tempdir().unwrap();
    let source = FsSource::new(dir.path().join(EMOJI_TEST), None);
    let response = handle("GET", &source);

    assert_eq!(response.status, INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "500 - Could not parse emoji data");
}

#[test]
fn test_handle_other_methods() {
    let source = TextSource::new(EMOJI_TEST_TXT);
    for method in &["POST", "PUT", "DELETE", "PATCH"] {
        let response = handle(method, &source);
        assert_eq!(response.status, METHOD_NOT_ALLOWED);
        assert_eq!(response.body, format!("{} request not allowed", method));
    }
}

#[cfg(feature = "online")]
#[test]
#[ignore]
fn test_online() {
    use crate::sources::unicode_source::UnicodeSource;

    let source = UnicodeSource::new(15.0, None).unwrap();
    let catalog = load_catalog(&source).unwrap();
    let smileys = catalog.get("Smileys & Emotion").unwrap();

    assert_eq!(smileys[0].character, "😀");
    assert!(!smileys[0].annotations.is_empty());
}
