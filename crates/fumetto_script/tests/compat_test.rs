//! Fail-closed catalog validation.

use fumetto_catalog::Catalog;
use fumetto_script::{validate_script, CharacterReference, ComicScript, Panel};
use std::collections::BTreeMap;

fn reference(character: &str) -> CharacterReference {
    CharacterReference {
        character: character.to_string(),
        angle: None,
        pose: None,
        emotion: None,
        mirror: false,
        customization: BTreeMap::new(),
    }
}

fn script_with(first: CharacterReference) -> ComicScript {
    let panel = |r: CharacterReference| Panel {
        background: "park".to_string(),
        characters: vec![r],
        dialogue: vec![],
    };
    ComicScript {
        title: None,
        subtitle: None,
        panels: vec![panel(first), panel(reference("bill")), panel(reference("bill"))],
    }
}

#[test]
fn known_characters_pass() {
    let catalog = Catalog::builtin();
    let mut ethan = reference("ethan");
    ethan.angle = Some("side".to_string());
    ethan.pose = Some("explaining".to_string());
    ethan.emotion = Some("happy".to_string());
    assert!(validate_script(&script_with(ethan), &catalog).is_ok());
}

#[test]
fn unknown_character_fails() {
    let catalog = Catalog::builtin();
    let err = validate_script(&script_with(reference("zorp")), &catalog).unwrap_err();
    assert!(format!("{err}").contains("Unknown character 'zorp'"));
}

#[test]
fn angle_on_front_only_character_fails() {
    let catalog = Catalog::builtin();
    let mut bill = reference("bill");
    bill.angle = Some("side".to_string());
    let err = validate_script(&script_with(bill), &catalog).unwrap_err();
    assert!(format!("{err}").contains("front-only"));
}

#[test]
fn unsupported_angle_fails() {
    let catalog = Catalog::builtin();
    let mut ethan = reference("ethan");
    ethan.angle = Some("sitting".to_string());
    let err = validate_script(&script_with(ethan), &catalog).unwrap_err();
    assert!(format!("{err}").contains("does not support angle 'sitting'"));
}

#[test]
fn unsupported_pose_fails() {
    let catalog = Catalog::builtin();
    let mut bill = reference("bill");
    bill.pose = Some("moonwalk".to_string());
    let err = validate_script(&script_with(bill), &catalog).unwrap_err();
    assert!(format!("{err}").contains("pose 'moonwalk'"));
}

#[test]
fn unsupported_emotion_fails() {
    let catalog = Catalog::builtin();
    let mut bean = reference("bean");
    bean.angle = Some("straight".to_string());
    bean.emotion = Some("vengeful".to_string());
    let err = validate_script(&script_with(bean), &catalog).unwrap_err();
    assert!(format!("{err}").contains("emotion 'vengeful'"));
}

#[test]
fn unknown_customization_axis_fails() {
    let catalog = Catalog::builtin();
    let mut bill = reference("bill");
    bill.customization.insert("hat".to_string(), "fedora".to_string());
    let err = validate_script(&script_with(bill), &catalog).unwrap_err();
    assert!(format!("{err}").contains("no customization axis 'hat'"));
}

#[test]
fn out_of_range_axis_value_fails() {
    let catalog = Catalog::builtin();
    let mut aavatar = reference("aavatar");
    aavatar
        .customization
        .insert("gender".to_string(), "robot".to_string());
    let err = validate_script(&script_with(aavatar), &catalog).unwrap_err();
    assert!(format!("{err}").contains("does not allow value 'robot'"));
}

#[test]
fn valid_customization_passes() {
    let catalog = Catalog::builtin();
    let mut aavatar = reference("aavatar");
    aavatar
        .customization
        .insert("gender".to_string(), "female".to_string());
    aavatar
        .customization
        .insert("attire".to_string(), "saree".to_string());
    assert!(validate_script(&script_with(aavatar), &catalog).is_ok());
}
