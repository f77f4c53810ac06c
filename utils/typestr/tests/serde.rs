// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

#![cfg(feature = "serde")]

use typestr::{Nul, TypeStr, typestr};

type Tag = typestr!("v1.user_record");

#[test]
fn serializes_as_the_decoded_string() {
    assert_eq!(
        serde_json::to_string(&Tag::new()).unwrap(),
        "\"v1.user_record\""
    );
    assert_eq!(serde_json::to_string(&Nul).unwrap(), "\"\"");
}

#[test]
fn deserialization_verifies_the_contents() {
    let tag: Tag = serde_json::from_str("\"v1.user_record\"").unwrap();
    assert_eq!(Tag::STR, format!("{tag}"));

    let _: Nul = serde_json::from_str("\"\"").unwrap();
}

#[test]
fn mismatched_contents_are_a_deserialization_error() {
    let err = serde_json::from_str::<Tag>("\"v2.user_record\"").unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("v1.user_record"), "{rendered}");

    assert!(serde_json::from_str::<Tag>("42").is_err());
    assert!(serde_json::from_str::<Nul>("\"nonempty\"").is_err());
}
