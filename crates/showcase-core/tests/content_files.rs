//! Loading site content from JSON files on disk.

use std::io::Write;

use showcase_core::{ShowcaseError, SiteContent};
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn load_valid_file() {
    let json = serde_json::to_string_pretty(&SiteContent::default()).unwrap();
    let file = write_temp(&json);

    let content = SiteContent::load(file.path()).unwrap();
    assert_eq!(content, SiteContent::default());
}

#[test]
fn load_custom_content() {
    let file = write_temp(
        r##"{
            "hero": { "title": "Prism", "tagline": "Tokens in, themes out", "call_to_action": "Try it" },
            "pipeline": [
                { "title": "Parse", "description": "Read token files" },
                { "title": "Emit", "description": "Write CSS" }
            ],
            "features": [{ "icon": "#", "title": "Fast", "description": "Very" }],
            "footer_text": "(c) Prism",
            "footer_links": [{ "label": "Docs", "href": "https://example.com/docs" }]
        }"##,
    );

    let content = SiteContent::load(file.path()).unwrap();
    assert_eq!(content.hero.title, "Prism");
    assert_eq!(content.pipeline[1].title, "Emit");
    assert_eq!(content.footer_links[0].label, "Docs");
    assert!(content.pipeline.iter().all(|step| !step.active));
    assert!(content.hero.secondary_action.is_empty());
}

#[test]
fn load_active_step_and_headings() {
    let file = write_temp(
        r##"{
            "brand": "Prism",
            "hero": { "title": "Prism", "tagline": "", "call_to_action": "Go", "secondary_action": "Read more" },
            "sections": {
                "palette": { "title": "Colors", "subtitle": "Two modes" },
                "pipeline": { "title": "Steps", "subtitle": "In order" },
                "features": { "title": "Extras", "subtitle": "Small things" }
            },
            "pipeline": [
                { "title": "Parse", "description": "Read token files" },
                { "title": "Emit", "description": "Write CSS", "active": true }
            ],
            "features": [{ "icon": "#", "title": "Fast", "description": "Very" }],
            "footer_text": ""
        }"##,
    );

    let content = SiteContent::load(file.path()).unwrap();
    assert_eq!(content.brand, "Prism");
    assert_eq!(content.hero.secondary_action, "Read more");
    assert_eq!(content.sections.pipeline.title, "Steps");
    assert!(!content.pipeline[0].active);
    assert!(content.pipeline[1].active);
    assert_eq!(content.copyright(2030), "\u{00A9} 2030 Prism. All rights reserved.");
}

#[test]
fn default_content_has_five_steps_first_active() {
    let json = serde_json::to_string(&SiteContent::default()).unwrap();
    let file = write_temp(&json);
    let content = SiteContent::load(file.path()).unwrap();

    assert_eq!(content.pipeline.len(), 5);
    let active: Vec<&str> = content
        .pipeline
        .iter()
        .filter(|step| step.active)
        .map(|step| step.title.as_str())
        .collect();
    assert_eq!(active, vec!["High-Res Sculpting"]);

    let features: Vec<&str> = content.features.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(
        features,
        vec![
            "Scroll-Triggered Animations",
            "Tilt Parallax",
            "Seamless Dark Mode",
            "Smooth Transitions",
        ]
    );
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = SiteContent::load(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(ShowcaseError::Io(_))));
}

#[test]
fn load_invalid_json() {
    let file = write_temp("{ not json");
    let result = SiteContent::load(file.path());
    assert!(matches!(result, Err(ShowcaseError::ContentFormat(_))));
}

#[test]
fn load_empty_pipeline() {
    let file = write_temp(
        r#"{
            "hero": { "title": "T", "tagline": "", "call_to_action": "Go" },
            "pipeline": [],
            "features": [{ "icon": "*", "title": "F", "description": "d" }],
            "footer_text": ""
        }"#,
    );
    let result = SiteContent::load(file.path());
    assert!(matches!(result, Err(ShowcaseError::EmptySection("pipeline"))));
}
