//! Structural rules for parsed scripts.

use fumetto_script::{parse_script, PANEL_COUNT};

fn panel_json(background: &str, characters: &str, dialogue: &str) -> String {
    format!(
        r#"{{"background": "{background}", "characters": [{characters}], "dialogue": [{dialogue}]}}"#
    )
}

fn bill(pose: &str) -> String {
    format!(r#"{{"character": "bill", "pose": "{pose}", "emotion": "happy"}}"#)
}

fn script_json(panels: &[String]) -> String {
    format!(
        r#"{{"title": "Compost", "subtitle": "A tiny guide", "panels": [{}]}}"#,
        panels.join(", ")
    )
}

fn valid_panels() -> Vec<String> {
    vec![
        panel_json("garden", &bill("shrug"), r#"{"speaker": 0, "text": "What is compost?"}"#),
        panel_json("garden", &bill("thinking"), r#"{"speaker": 0, "text": "Rotted plant matter."}"#),
        panel_json("garden", &bill("thumbsup"), r#"{"speaker": 0, "text": "Free fertilizer!"}"#),
    ]
}

#[test]
fn well_formed_script_parses() {
    let script = parse_script(&script_json(&valid_panels())).unwrap();
    assert_eq!(script.panels.len(), PANEL_COUNT);
    assert_eq!(script.title.as_deref(), Some("Compost"));
    assert_eq!(script.panels[0].dialogue[0].speaker, 0);
}

#[test]
fn script_inside_markdown_fence_parses() {
    let wrapped = format!("Here you go!\n```json\n{}\n```", script_json(&valid_panels()));
    assert!(parse_script(&wrapped).is_ok());
}

#[test]
fn wrong_panel_count_is_rejected() {
    let mut panels = valid_panels();
    panels.pop();
    let err = parse_script(&script_json(&panels)).unwrap_err();
    assert!(format!("{err}").contains("2 panels"));
}

#[test]
fn empty_panel_is_rejected() {
    let mut panels = valid_panels();
    panels[1] = panel_json("garden", "", "");
    let err = parse_script(&script_json(&panels)).unwrap_err();
    assert!(format!("{err}").contains("0 characters"));
}

#[test]
fn three_characters_in_a_panel_is_rejected() {
    let mut panels = valid_panels();
    let trio = [bill("shrug"), bill("thinking"), bill("thumbsup")].join(", ");
    panels[0] = panel_json("garden", &trio, "");
    let err = parse_script(&script_json(&panels)).unwrap_err();
    assert!(format!("{err}").contains("3 characters"));
}

#[test]
fn speaker_out_of_range_is_rejected() {
    let mut panels = valid_panels();
    panels[2] = panel_json("garden", &bill("shrug"), r#"{"speaker": 1, "text": "Who, me?"}"#);
    let err = parse_script(&script_json(&panels)).unwrap_err();
    assert!(format!("{err}").contains("slot 1"));
}

#[test]
fn blank_background_is_rejected() {
    let mut panels = valid_panels();
    panels[0] = panel_json("  ", &bill("shrug"), r#"{"speaker": 0, "text": "Hi"}"#);
    let err = parse_script(&script_json(&panels)).unwrap_err();
    assert!(format!("{err}").contains("empty background"));
}

#[test]
fn blank_dialogue_is_rejected() {
    let mut panels = valid_panels();
    panels[0] = panel_json("garden", &bill("shrug"), r#"{"speaker": 0, "text": " "}"#);
    let err = parse_script(&script_json(&panels)).unwrap_err();
    assert!(format!("{err}").contains("empty dialogue"));
}

#[test]
fn prose_without_json_is_rejected() {
    let err = parse_script("I could not come up with a script, sorry.").unwrap_err();
    assert!(format!("{err}").contains("No JSON found"));
}
