//! Property name case conversion between CSS (kebab case) and inline style objects (camel case).

/// Custom properties (`--name`) keep their authored spelling in both directions.
fn is_custom_property(name: &str) -> bool {
    name.starts_with("--")
}

/// Convert a kebab case CSS property name to its camel case style key.
///
/// A hyphen followed by an ASCII lowercase letter collapses into the uppercase letter, so
/// `background-color` becomes `backgroundColor` and `-webkit-mask` becomes `WebkitMask`.
/// Every `background*` longhand follows this same rule.
pub fn kebab_to_camel(name: &str) -> String {
    if is_custom_property(name) {
        return name.to_owned();
    }
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(character) = chars.next() {
        if character == '-'
            && let Some(next) = chars.peek().copied()
            && next.is_ascii_lowercase()
        {
            out.push(next.to_ascii_uppercase());
            chars.next();
            continue;
        }
        out.push(character);
    }
    out
}

/// Convert a camel case style key back to its kebab case CSS property name.
pub fn camel_to_kebab(name: &str) -> String {
    if is_custom_property(name) {
        return name.to_owned();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for character in name.chars() {
        if character.is_ascii_uppercase() {
            out.push('-');
            out.push(character.to_ascii_lowercase());
        } else {
            out.push(character);
        }
    }
    out
}
