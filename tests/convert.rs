//! End-to-end conversion tests over in-memory source documents.

use serde_json::json;
use twinepack::story::convert_sources;

const EXPORT: &str = r#"<!DOCTYPE html><html><body>
<tw-storydata name="Demo" startnode="p1" ifid="ABC">
<tw-passagedata pid="1" name="p1" tags="1">Hello [[Go|p2]]{"fromName":"Bob"}</tw-passagedata>
</tw-storydata>
</body></html>"#;

#[test]
fn single_passage_story_round_trip() {
    let story = convert_sources(
        EXPORT,
        r#"{"chapters":[{"name":"Ch1"}],"freeChaptersNumber":[1]}"#,
        "meta",
    )
    .unwrap();

    let value = serde_json::to_value(&story).unwrap();
    assert_eq!(
        value,
        json!({
            "primaryPersonages": ["Bob"],
            "name": "Demo",
            "startPassageId": "p1",
            "id": "ABC",
            "chapters": [
                {
                    "id": 0,
                    "name": "Ch1",
                    "isFree": true,
                    "storeProductId": "",
                    "passages": [
                        {
                            "id": "p1",
                            "text": "Hello ",
                            "links": [{"text": "Go", "passageId": "p2"}],
                            "isIncome": false,
                            "type": "text",
                            "time": "",
                            "fromName": "Bob"
                        }
                    ]
                }
            ]
        })
    );
}

#[test]
fn multi_chapter_story_with_orphan_and_passthrough_fields() {
    let export = r#"<tw-storydata name="Long" startnode="intro" ifid="X-1">
<tw-passagedata pid="1" name="intro" tags="1">Welcome.
[[Begin|day1]]</tw-passagedata>
<tw-passagedata pid="2" name="day1" tags="2">{"fromName":"Ann","time":"9:00"}Morning!</tw-passagedata>
<tw-passagedata pid="3" name="aside" tags="2">{"fromName":"Barkeep","isSecondaryPersonage":true}Psst.</tw-passagedata>
<tw-passagedata pid="4" name="draft" tags="9">Unfinished.</tw-passagedata>
</tw-storydata>"#;

    let story = convert_sources(
        export,
        r#"{
            "chapters": [{"name": "Intro"}, {"name": "Day One", "storeProductId": "sku.day1"}],
            "freeChaptersNumber": [1],
            "author": "N. N."
        }"#,
        "meta",
    )
    .unwrap();

    // Secondary-only senders never become primary.
    assert_eq!(story.primary_personages, vec!["Ann".to_string()]);

    let value = serde_json::to_value(&story).unwrap();
    assert_eq!(value["author"], "N. N.");
    assert!(value.get("freeChaptersNumber").is_none());

    let chapters = value["chapters"].as_array().unwrap();
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0]["isFree"], true);
    assert_eq!(chapters[1]["isFree"], false);
    assert_eq!(chapters[1]["storeProductId"], "sku.day1");

    // The newline in the authored text is stripped before link extraction.
    let intro = &chapters[0]["passages"][0];
    assert_eq!(intro["text"], "Welcome.");
    assert_eq!(intro["links"][0]["passageId"], "day1");

    // The orphan draft passage (chapter 9) appears nowhere.
    let day_one_ids: Vec<&str> = chapters[1]["passages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(day_one_ids, vec!["day1", "aside"]);

    // The secondary flag is consumed, not serialized.
    assert!(chapters[1]["passages"][1].get("isSecondaryPersonage").is_none());
    assert!(chapters[1]["passages"][1].get("chapterNumber").is_none());
}

#[test]
fn malformed_metadata_aborts_the_whole_conversion() {
    let export = r#"<tw-storydata name="D" startnode="a" ifid="I">
<tw-passagedata pid="1" name="ok" tags="1">Fine.</tw-passagedata>
<tw-passagedata pid="2" name="broken" tags="1">{"time":}</tw-passagedata>
</tw-storydata>"#;

    let err = convert_sources(
        export,
        r#"{"chapters":[{"name":"A"}],"freeChaptersNumber":[]}"#,
        "meta",
    )
    .unwrap_err();

    assert!(matches!(
        err,
        twinepack::ConvertError::MalformedMetadata { ref passage_id, .. } if passage_id == "broken"
    ));
}
