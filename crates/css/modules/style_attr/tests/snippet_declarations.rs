#![allow(clippy::unwrap_used)]

use css_style_attr::{StyleMap, parse, parse_declarations};

#[test]
fn kebab_property_names_become_camel_keys() {
    for (kebab, camel) in [
        ("border-radius", "borderRadius"),
        ("box-shadow", "boxShadow"),
        ("font-weight", "fontWeight"),
        ("background-position", "backgroundPosition"),
    ] {
        let map = parse(&format!("{kebab}: v;"));
        assert_eq!(map.get(camel), Some("v"), "{kebab} should map to {camel}");
        assert_eq!(map.len(), 1);
    }
}

#[test]
fn duplicate_property_last_write_wins() {
    let map = parse("color: red; color: blue;");
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("color"), Some("blue"));
}

#[test]
fn duplicates_across_spellings_fold_to_one_key() {
    let declarations = parse_declarations("background-color: #fff; background-color: #000;");
    assert_eq!(declarations.len(), 2);
    let map = parse("background-color: #fff; background-color: #000;");
    assert_eq!(map.get("backgroundColor"), Some("#000"));
}

#[test]
fn gradient_layers_join_into_one_value() {
    let map = parse("background-image: linear-gradient(a),\n  linear-gradient(b);");
    let value = map.get("backgroundImage").unwrap();
    assert_eq!(value, "linear-gradient(a), linear-gradient(b)");
    assert!(!value.contains('\n'));
}

#[test]
fn pattern_snippet_parses_three_backgrounds() {
    let css = "background-color: #fafafa;\n\
               background-image: radial-gradient(#00000020 1px, transparent 1px);\n\
               background-size: 20px 20px;";
    let map = parse(css);
    let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, ["backgroundColor", "backgroundImage", "backgroundSize"]);
    assert_eq!(
        map.get("backgroundImage"),
        Some("radial-gradient(#00000020 1px, transparent 1px)")
    );
}

#[test]
fn style_map_serializes_in_insertion_order() {
    let map: StyleMap = parse("z-index: 2; color: red; z-index: 3;");
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"zIndex":"3","color":"red"}"#);
}
