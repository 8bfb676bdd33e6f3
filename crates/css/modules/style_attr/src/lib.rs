//! Snippet style parsing: turn a flat CSS declaration blob into an inline style map.
//!
//! Snippet CSS is hand-authored and flat: `property: value;` pairs, sometimes with
//! multi-line `background-image` layers, sometimes with an embedded `@keyframes`
//! block or pseudo-nested `&:hover { ... }` documentation blocks. Only the flat
//! declarations are emitted; everything inside a block is dropped.

#![forbid(unsafe_code)]

mod case;
mod style_map;

pub use case::{camel_to_kebab, kebab_to_camel};
pub use style_map::StyleMap;

use log::debug;

/// A single declaration parsed from a snippet CSS blob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name as authored (kebab case), trimmed of surrounding whitespace.
    pub property: String,
    /// Value trimmed, with each physical line of a multi-line value joined by one space.
    pub value: String,
}

/// Any fragment containing this token belongs to a keyframes block and is dropped whole.
const KEYFRAMES_TOKEN: &str = "@keyframes";

/// Leading characters of fragments that never hold a flat declaration.
const NESTING_MARKERS: [char; 3] = ['&', '.', '}'];

/// Tracks brace depth of a block opened by a dropped fragment.
///
/// Splitting on `;` cuts a block like `@keyframes spin { to { transform: x; } } height: 1px`
/// into several fragments. Everything up to the balancing `}` is block content; whatever
/// follows it in the same fragment is a regular declaration again.
#[derive(Default)]
struct BlockSkipper {
    depth: usize,
}

impl BlockSkipper {
    /// Record the braces of a fragment that is being dropped.
    fn open(&mut self, fragment: &str) {
        for character in fragment.chars() {
            self.step(character);
        }
    }

    /// Return the part of `fragment` that lies outside any open block.
    fn residue<'frag>(&mut self, fragment: &'frag str) -> Option<&'frag str> {
        if self.depth == 0 {
            return Some(fragment);
        }
        for (index, character) in fragment.char_indices() {
            self.step(character);
            if self.depth == 0 {
                return fragment.get(index + character.len_utf8()..);
            }
        }
        None
    }

    fn step(&mut self, character: char) {
        match character {
            '{' => self.depth += 1,
            '}' => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
    }
}

/// Parse a snippet CSS blob into its flat declarations, in source order.
///
/// - Splits on semicolons (`;`); an unterminated final declaration is accepted.
/// - Drops fragments containing `@keyframes` and fragments opening a block (`{`), together
///   with everything up to the block's balancing `}`.
/// - Drops fragments beginning with `&`, `.` or a stray `}`.
/// - Splits each remaining fragment on its first colon; fragments without one are skipped.
/// - Joins multi-line values with a single space.
///
/// Duplicates are kept; see [`parse`] for the folded map.
pub fn parse_declarations(input: &str) -> Vec<Declaration> {
    let text = input.trim_matches(is_ascii_whitespace);
    if text.is_empty() {
        return Vec::new();
    }
    let mut skipper = BlockSkipper::default();
    let mut out: Vec<Declaration> = Vec::new();
    for raw_fragment in text.split(';') {
        let Some(outside) = skipper.residue(raw_fragment) else {
            continue;
        };
        let item = outside.trim_matches(is_ascii_whitespace);
        if item.is_empty() {
            continue;
        }
        if item.contains(KEYFRAMES_TOKEN) || item.contains('{') {
            debug!("style_attr: dropping block fragment {item:?}");
            skipper.open(item);
            continue;
        }
        if item.starts_with(NESTING_MARKERS) {
            debug!("style_attr: dropping nesting fragment {item:?}");
            continue;
        }
        let Some((raw_prop, raw_value)) = item.split_once(':') else {
            debug!("style_attr: no colon in fragment {item:?}");
            continue;
        };
        let property = raw_prop.trim_matches(is_ascii_whitespace);
        if property.is_empty() {
            continue;
        }
        out.push(Declaration {
            property: property.to_owned(),
            value: normalize_value(raw_value),
        });
    }
    out
}

/// Parse a snippet CSS blob into a camel case style map.
///
/// Later declarations of the same property overwrite earlier ones. Malformed input yields
/// an empty or partial map, never an error.
pub fn parse(input: &str) -> StyleMap {
    parse_declarations(input)
        .into_iter()
        .map(|decl| (kebab_to_camel(&decl.property), decl.value))
        .collect()
}

/// Trim a raw value, strip a trailing `;`, and join its physical lines with single spaces.
fn normalize_value(raw_value: &str) -> String {
    let value = raw_value
        .trim_matches(is_ascii_whitespace)
        .trim_end_matches(';')
        .trim_end_matches(is_ascii_whitespace);
    if !value.contains('\n') {
        return value.to_owned();
    }
    value
        .lines()
        .map(|line| line.trim_matches(is_ascii_whitespace))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// ASCII whitespace per CSS Syntax (TAB, LF, FF, CR, SPACE).
const fn is_ascii_whitespace(character: char) -> bool {
    matches!(
        character,
        '\u{0009}' | '\u{000A}' | '\u{000C}' | '\u{000D}' | '\u{0020}'
    )
}
