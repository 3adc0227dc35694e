//! End-to-end assembly of a settings page and round-trip through the
//! dynamic parsing layer.

use formpage::{AsJson, Choice, Field, FieldType, Page, Section};
use serde_json::json;

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample_page() -> Page {
    Page::new().with_section(
        Section::new()
            .with_title("Title for Section 1")
            .with_description("Description for section 1")
            .with_field(Field::new(FieldType::Text, "mytext").with_label("This is a text input"))
            .with_field(
                Field::new(FieldType::Select, "myselect")
                    .with_label("This is a select")
                    .with_choices(vec![
                        Choice::new("my first choice").with_value("1"),
                        Choice::new("my second choice").with_value("2"),
                    ]),
            ),
    )
}

#[test]
fn test_full_page_settings() {
    init_log();
    assert_eq!(
        sample_page().as_json(),
        json!([
            {
                "title": "Title for Section 1",
                "description": "Description for section 1",
                "fields": [
                    {
                        "type": "text",
                        "label": "This is a text input",
                        "name": "mytext",
                    },
                    {
                        "type": "select",
                        "label": "This is a select",
                        "name": "myselect",
                        "choices": [
                            {"label": "my first choice", "value": "1"},
                            {"label": "my second choice", "value": "2"},
                        ],
                    },
                ],
            }
        ])
    );
}

#[test]
fn test_serialization_is_idempotent() {
    init_log();
    let page = sample_page();
    assert_eq!(page.as_json(), page.as_json());
}

#[test]
fn test_page_round_trips_through_from_value() {
    init_log();
    let page = sample_page();
    let parsed = Page::from_value(&page.as_json()).unwrap();
    assert_eq!(parsed, page);
    assert_eq!(parsed.as_json(), page.as_json());
}

#[test]
fn test_from_value_reports_deep_paths() {
    init_log();
    let mut value = sample_page().as_json();
    value[0]["fields"][1]["choices"][0]["value"] = json!(1);
    let err = Page::from_value(&value).unwrap_err();
    assert_eq!(err.path(), "sections.0.fields.1.choices.0.value");
}

#[test]
fn test_serde_output_matches_as_json() {
    init_log();
    let page = sample_page();
    let through_serde: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&page).unwrap()).unwrap();
    assert_eq!(through_serde, page.as_json());
}

#[test]
fn test_unknown_keys_are_ignored() {
    init_log();
    let parsed = Page::from_value(&json!([
        {"title": "General", "unknown_key": 1},
    ]))
    .unwrap();
    assert_eq!(parsed.as_json(), json!([{"title": "General"}]));
}
