use crate::emojis::emoji_status::EmojiStatus;
use crate::tables::annotations::{AnnotationRecord, AnnotationTable};
use crate::tables::fields::EmojiFields;
use crate::tables::regexes::{group_regex, match_line, EmojiTestLine};

const GRINNING: &str = "1F600                                                  ; fully-qualified     # 😀 E1.0 grinning face";
const FACE_IN_CLOUDS: &str = "1F636 200D 1F32B FE0F                                  ; fully-qualified     # 😶‍🌫️ E13.1 face in clouds";

#[test]
fn test_tokenize_shape() {
    let fields = EmojiFields::tokenize(GRINNING);
    assert_eq!(fields.as_ref(), ["1F600", ";", "fully-qualified", "#", "😀", "E1.0", "grinning", "face"]);
}

#[test]
fn test_tokenize_comments_and_blanks() {
    assert!(EmojiFields::tokenize("").is_empty());
    assert!(EmojiFields::tokenize("   \t").is_empty());
    assert!(EmojiFields::tokenize("# subgroup: face-smiling").is_empty());
    assert!(EmojiFields::tokenize("  # Status: fully-qualified").is_empty());
}

#[test]
fn test_codepoint() {
    assert_eq!(EmojiFields::tokenize(GRINNING).codepoints(), "1F600");
}

#[test]
fn test_codepoints() {
    assert_eq!(EmojiFields::tokenize(FACE_IN_CLOUDS).codepoints(), "1F636 200D 1F32B FE0F");
    // Padding between the codepoints is collapsed
    let fields = EmojiFields::tokenize("1F44B   1F3FB ; fully-qualified # 👋🏻 E1.0 waving hand: light skin tone");
    assert_eq!(fields.codepoints(), "1F44B 1F3FB");
}

#[test]
fn test_character() {
    assert_eq!(EmojiFields::tokenize(GRINNING).character(), "😀");
    assert_eq!(EmojiFields::tokenize(FACE_IN_CLOUDS).character(), "😶‍🌫️");
}

#[test]
fn test_name() {
    assert_eq!(EmojiFields::tokenize(GRINNING).name(), "grinning face");
    assert_eq!(EmojiFields::tokenize(FACE_IN_CLOUDS).name(), "face in clouds");
    let fields = EmojiFields::tokenize("1F44B 1F3FB ; fully-qualified #   👋🏻   E1.0   waving   hand: light skin tone");
    assert_eq!(fields.name(), "waving hand: light skin tone");
}

#[test]
fn test_name_without_version() {
    let fields = EmojiFields::tokenize("1F600 ; fully-qualified # 😀 grinning face");
    assert_eq!(fields.version(), None);
    assert_eq!(fields.name(), "grinning face");
}

#[test]
fn test_version_and_status() {
    let fields = EmojiFields::tokenize(FACE_IN_CLOUDS);
    assert_eq!(fields.version(), Some("E13.1"));
    assert_eq!(fields.status(), Ok(EmojiStatus::FullyQualified));

    let fields = EmojiFields::tokenize("2620 ; unqualified # ☠ E1.0 skull and crossbones");
    assert_eq!(fields.status(), Ok(EmojiStatus::Unqualified));
    let fields = EmojiFields::tokenize("1F3FB ; component # 🏻 E1.0 light skin tone");
    assert_eq!(fields.status(), Ok(EmojiStatus::Component));
    let fields = EmojiFields::tokenize("1F600 ; Fully-Qualified # 😀 E1.0 grinning face");
    assert!(fields.status().is_err());
}

#[test]
fn test_truncated_lines() {
    let fields = EmojiFields::tokenize("1F600 ; fully-qualified");
    assert_eq!(fields.codepoints(), "1F600");
    assert_eq!(fields.character(), "");
    assert_eq!(fields.name(), "");

    let fields = EmojiFields::tokenize("1F600");
    assert_eq!(fields.qualification(), "");
    assert_eq!(fields.version(), None);

    let fields = EmojiFields::tokenize("; fully-qualified # 😀 E1.0 grinning face");
    assert_eq!(fields.codepoints(), "");
}

#[test]
fn test_match_line() {
    assert_eq!(match_line("# group: Smileys & Emotion"), EmojiTestLine::Group("Smileys & Emotion"));
    assert_eq!(match_line("  # group: group1  "), EmojiTestLine::Group("group1"));
    assert_eq!(match_line("# subgroup: face-smiling"), EmojiTestLine::Comment);
    assert_eq!(match_line("# This is a comment"), EmojiTestLine::Comment);
    assert_eq!(match_line(""), EmojiTestLine::Blank);
    assert_eq!(match_line(GRINNING), EmojiTestLine::Data(EmojiFields::tokenize(GRINNING)));
}

#[test]
fn test_group_regex() {
    let captures = group_regex().captures("#group:People & Body").unwrap();
    assert_eq!(&captures["group"], "People & Body");
    assert!(!group_regex().is_match("# subgroup: hand-fingers-open"));
}

#[test]
fn test_annotations_from_cldr() {
    let json = r#"{
        "annotations": {
            "identity": {"language": "en"},
            "annotations": {
                "😀": {"default": ["face", "grin", "grinning face"], "tts": ["grinning face"]},
                "🏻": {"tts": ["light skin tone"]}
            }
        }
    }"#;
    let table = AnnotationTable::from_cldr_json(json.as_bytes()).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(
        table.get("😀"),
        Some(&AnnotationRecord::new(
            vec![String::from("face"), String::from("grin"), String::from("grinning face")],
            vec![String::from("grinning face")]
        ))
    );
    assert!(table.get("🏻").unwrap().default.is_empty());
}

#[test]
fn test_annotations_bare_map() {
    let json = r#"{"😀": {"default": ["grin"], "tts": ["grinning"]}}"#;
    let table = AnnotationTable::from_cldr_json(json.as_bytes()).unwrap();
    assert_eq!(table.get("😀").unwrap().spoken_name(), Some("grinning"));
}

#[test]
fn test_annotations_invalid_json() {
    assert!(AnnotationTable::from_cldr_json("[1, 2, 3]".as_bytes()).is_err());
}

#[test]
fn test_resolve_is_exact() {
    let table: AnnotationTable = vec![
        ("😶‍🌫️", AnnotationRecord::new(vec![String::from("absentminded")], vec![]))
    ].into_iter().collect();

    assert!(table.resolve("😶‍🌫️", "1F636 200D 1F32B FE0F").is_some());
    // Without FE0F, this is a different key
    assert!(table.resolve("😶‍🌫", "1F636 200D 1F32B").is_none());
}

#[test]
fn test_spoken_name() {
    let record = AnnotationRecord::new(vec![], vec![String::from("first"), String::from("second")]);
    assert_eq!(record.spoken_name(), Some("first"));
    assert_eq!(AnnotationRecord::default().spoken_name(), None);
    assert_eq!(AnnotationRecord::new(vec![], vec![String::from(" ")]).spoken_name(), None);
}

#[cfg(feature = "online")]
mod online {
    use crate::tables::online::{annotations_url, emoji_test_url, version_path};

    #[test]
    fn test_latest_version() {
        assert!(emoji_test_url(0.0).contains("/latest/"));
    }

    #[test]
    fn test_version() {
        assert_eq!(emoji_test_url(15.0), "https://unicode.org/Public/emoji/15.0/emoji-test.txt");
    }

    #[test]
    fn test_version_is_shortened() {
        assert_eq!(version_path(15.11), "15.1");
        assert_eq!(version_path(15.15), "15.2");
        assert_eq!(version_path(1.0), "1.0");
    }

    #[test]
    fn test_annotations_url() {
        assert!(annotations_url("de").ends_with("/annotations/de/annotations.json"));
    }
}
