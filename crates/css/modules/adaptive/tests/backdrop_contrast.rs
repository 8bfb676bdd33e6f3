#![allow(clippy::unwrap_used)]

use css_adaptive::{Brightness, classify, resolve, weighted_luminance};

#[test]
fn dark_pattern_resolves_to_light_chrome() {
    let css = "background: #0a0a0f;\ncolor: #ffffff;";
    let brightness = classify(css);
    assert_eq!(brightness, Brightness::Dark);
    assert_eq!(resolve(brightness).text, "text-white");
}

#[test]
fn dotted_light_pattern_is_light() {
    let css = "background-color: #fafafa;\n\
               background-image: radial-gradient(#00000020 1px, transparent 1px);\n\
               background-size: 20px 20px;";
    let average = weighted_luminance(css).unwrap();
    assert!(average > 0.7 && average < 0.75, "average was {average}");
    assert_eq!(classify(css), Brightness::Light);
}

#[test]
fn brightness_serializes_lowercase() {
    let json = serde_json::to_string(&Brightness::Auto).unwrap();
    assert_eq!(json, "\"auto\"");
    let parsed: Brightness = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(parsed, Brightness::Dark);
}

#[test]
fn class_set_serializes_all_fields() {
    let value = serde_json::to_value(resolve(Brightness::Light)).unwrap();
    for field in ["text", "muted", "background", "card"] {
        assert!(value.get(field).and_then(|token| token.as_str()).is_some());
    }
}
