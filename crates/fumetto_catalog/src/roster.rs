//! The builtin character roster.
//!
//! Vocabularies follow the upstream ComicGen character set: `aavatar` is the
//! customizable generic human, six characters are angle-dependent, and
//! `bill`, `sophie`, and `aryan` are front-only.

use crate::CharacterDefinition;
use std::collections::BTreeMap;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Emotions shared by bill and sophie.
const BILL_EMOTIONS: &[&str] = &[
    "afraid", "angry", "confused", "cry", "cunning", "curious", "dozing", "excited", "happy",
    "hmm", "irritated", "laugh", "neutral", "ooh", "rofl", "rollingeyes", "sad", "shocked",
    "shout", "smile", "smirk", "surprised", "tired", "wink", "worried",
];

/// Poses shared by bill and sophie.
const BILL_POSES: &[&str] = &[
    "handsfolded", "handsheldback", "handsinpocket", "handsonhip", "holdingbook",
    "holdingcoffee", "holdinglaptop", "holdingmobile", "holdingumbrella", "pointing45degree",
    "pointingright", "pointingup", "readingpaper", "shrug", "super", "thinking", "thumbsup",
    "yuhoo",
];

pub(crate) fn builtin_definitions() -> Vec<CharacterDefinition> {
    let mut aavatar_axes = BTreeMap::new();
    aavatar_axes.insert("gender".to_string(), strings(&["female", "male", "unisex"]));
    aavatar_axes.insert(
        "hairstyle".to_string(),
        strings(&[
            "bald", "blondecurly", "blondeshort", "brettbeard", "densehair", "hairband",
            "highbun", "mediumhair", "messyponytail", "oldman", "shorthair", "spikes",
            "topknotbun", "turban", "wavy",
        ]),
    );
    aavatar_axes.insert(
        "facestyle".to_string(),
        strings(&["sketchy", "strokes", "thinlines"]),
    );
    aavatar_axes.insert(
        "attire".to_string(),
        strings(&[
            "bodycon", "casualfullsleevetee", "casualtee", "formal", "formalsuit",
            "fullsleeveshirt", "saree", "stickfigure", "tuckedinshirt", "uniform",
        ]),
    );

    vec![
        CharacterDefinition::new(
            "aavatar",
            "Generic customizable human avatar",
            vec![],
            strings(&[
                "angry", "explaining", "handsfolded", "handsinpocket", "handsonhip",
                "holdingbook", "holdingcoffee", "holdinglaptop", "holdingmobile",
                "pointingright", "pointingup", "readingpaper", "shrug", "sittingatdesk",
                "super", "thinking", "thumbsup", "walk", "yuhoo",
            ]),
            strings(&[
                "afraid", "angry", "confused", "curious", "excited", "happy", "neutral",
                "sad", "shocked", "smile", "smirk", "surprised", "tired", "wink", "worried",
            ]),
            aavatar_axes,
        ),
        CharacterDefinition::new(
            "ethan",
            "Man with beard and glasses",
            strings(&["back", "side", "straight"]),
            strings(&[
                "explaining", "explaining45degreesup", "explainingwithbothhands",
                "handsclasped", "handsfolded", "handsonhip", "holdingboard", "holdingbook",
                "holdingstick", "normal", "pointingatboard", "pointingleft", "pointingright",
            ]),
            strings(&[
                "afraid", "angry", "curious", "excited", "happy", "irritated", "neutral",
                "ooh", "sad", "shocked", "shout", "smile", "smirk", "wink",
            ]),
            BTreeMap::new(),
        ),
        CharacterDefinition::new(
            "bean",
            "A living coffee mug",
            strings(&["side", "straight"]),
            strings(&[
                "angry", "handsfolded", "handsonhip", "holdingbook", "holdinglaptop",
                "pointingright", "pointingup", "readingpaper", "shrug", "super", "thinking",
                "thumbsup", "yuhoo",
            ]),
            strings(&[
                "angry", "annoyed", "blush", "cry", "curious", "hmm", "neutral", "sad",
                "shout", "smile", "tired", "wink", "worried", "yuhoo",
            ]),
            BTreeMap::new(),
        ),
        CharacterDefinition::new(
            "deenuova",
            "Woman with glasses and curly hair",
            strings(&["side", "sitting", "straight"]),
            strings(&[
                "explaining", "handsfolded", "handsinpocket", "holdingcoffee",
                "holdinglaptop", "holdingmobile", "pointingright", "pointingup",
                "readingpaper", "ridingbicycle", "shrug", "sittingatdesk", "thumbsup",
            ]),
            strings(&[
                "afraid", "angry", "confused", "cry", "curious", "excited", "happy", "hmm",
                "laugh", "neutral", "sad", "shocked", "smile", "smirk", "surprised", "tired",
                "wink", "worried",
            ]),
            BTreeMap::new(),
        ),
        CharacterDefinition::new(
            "deynuovo",
            "Man with long hair and beard",
            strings(&["side", "sitting", "straight"]),
            strings(&[
                "handsfolded", "handsinpocket", "handsonhip", "holdingcoffee",
                "holdingmobile", "pointingright", "pointingup", "readingpaper",
                "ridingbike", "shrug", "sittingatdesk", "thinking", "thumbsup", "yuhoo",
            ]),
            strings(&[
                "afraid", "angry", "curious", "dozing", "excited", "hmm", "laugh", "neutral",
                "sad", "shocked", "shout", "smile", "smirk", "surprised", "tired", "wink",
                "worried",
            ]),
            BTreeMap::new(),
        ),
        CharacterDefinition::new(
            "priyanuova",
            "Woman, comic style",
            strings(&["sitting", "straight"]),
            strings(&[
                "angry", "handsfolded", "handsonhip", "holdingbook", "holdingcoffee",
                "holdinglaptop", "pointingleft", "pointingright", "pointingup",
                "readingpaper", "ridingbicycle", "shrug", "sittingatdesk", "super",
                "thinking", "thumbsup", "yuhoo",
            ]),
            strings(&[
                "afraid", "angry", "blush", "cry", "curious", "excited", "happy",
                "irritated", "laugh", "neutral", "sad", "shocked", "sleep", "smile",
                "smirk", "surprised", "tired", "wink", "worried",
            ]),
            BTreeMap::new(),
        ),
        CharacterDefinition::new(
            "ringonuovo",
            "Man, comic style",
            strings(&["sitting", "straight"]),
            strings(&[
                "angry", "handsfolded", "handsinpocket", "handsonhip", "holdingbook",
                "holdingcoffee", "holdinglaptop", "pointingright", "pointingup",
                "readingpaper", "ridingcar", "run", "shrug", "sittingatdesk", "super",
                "thinking", "thumbsup", "yuhoo",
            ]),
            strings(&[
                "angry", "confused", "cry", "curious", "dozing", "excited", "happy", "hmm",
                "laugh", "neutral", "sad", "shocked", "shout", "smile", "smirk", "surprised",
                "tired", "wink", "worried",
            ]),
            BTreeMap::new(),
        ),
        CharacterDefinition::new(
            "bill",
            "Man in a suit (front view only)",
            vec![],
            strings(BILL_POSES),
            strings(BILL_EMOTIONS),
            BTreeMap::new(),
        ),
        CharacterDefinition::new(
            "sophie",
            "Grandma character (front view only)",
            vec![],
            strings(BILL_POSES),
            strings(BILL_EMOTIONS),
            BTreeMap::new(),
        ),
        CharacterDefinition::new(
            "aryan",
            "Boy, comic style (front view only)",
            vec![],
            strings(&["handsfolded", "handsinpocket"]),
            strings(&[
                "angry", "blush", "confused", "cry", "hmm", "laugh", "loudcry", "sad",
                "shocked", "smile", "wink", "worried",
            ]),
            BTreeMap::new(),
        ),
    ]
}
