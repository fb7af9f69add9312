use flutter_rn_dart::{parse_constructor, Constructor};

use crate::style::Style;
use crate::values::number::literal;

/// Flatten an `EdgeInsets` expression into `padding*` style keys.
///
/// | Form | Keys, in order |
/// |------|----------------|
/// | `EdgeInsets.all(v)` | `padding` |
/// | `EdgeInsets.zero` | `padding: 0` |
/// | `EdgeInsets.symmetric(vertical:, horizontal:)` | `paddingTop`, `paddingBottom`, `paddingLeft`, `paddingRight` |
/// | `EdgeInsets.only(top:, bottom:, left:, right:)` | the sides given |
/// | `EdgeInsets.fromLTRB(l, t, r, b)` | `paddingLeft`, `paddingTop`, `paddingRight`, `paddingBottom` |
/// | `EdgeInsetsDirectional.only(top:, bottom:, start:, end:)` | `paddingTop`, `paddingBottom`, `paddingStart`, `paddingEnd` |
/// | `EdgeInsetsDirectional.fromSTEB(s, t, e, b)` | `paddingStart`, `paddingTop`, `paddingEnd`, `paddingBottom` |
///
/// Only number-literal arguments count. Anything unrecognized yields an
/// empty style.
pub fn padding(text: &str) -> Style {
    let text = text.trim();
    if matches!(text, "EdgeInsets.zero" | "EdgeInsetsDirectional.zero") {
        return Style::new().with("padding", 0.0);
    }

    let Ok(c) = parse_constructor(text) else {
        return Style::new();
    };
    match c.name.as_str() {
        "EdgeInsets.all" | "EdgeInsetsDirectional.all" => {
            let mut style = Style::new();
            if let Some(v) = c.positional.first().and_then(literal) {
                style.set("padding", v);
            }
            style
        }
        "EdgeInsets.symmetric" | "EdgeInsetsDirectional.symmetric" => {
            let mut style = Style::new();
            if let Some(v) = c.arg("vertical").and_then(literal) {
                style.set("paddingTop", v);
                style.set("paddingBottom", v);
            }
            if let Some(v) = c.arg("horizontal").and_then(literal) {
                style.set("paddingLeft", v);
                style.set("paddingRight", v);
            }
            style
        }
        "EdgeInsets.only" => named_sides(
            &c,
            &[("top", "paddingTop"), ("bottom", "paddingBottom"), ("left", "paddingLeft"), ("right", "paddingRight")],
        ),
        "EdgeInsetsDirectional.only" => named_sides(
            &c,
            &[("top", "paddingTop"), ("bottom", "paddingBottom"), ("start", "paddingStart"), ("end", "paddingEnd")],
        ),
        "EdgeInsets.fromLTRB" => {
            positional_sides(&c, ["paddingLeft", "paddingTop", "paddingRight", "paddingBottom"])
        }
        "EdgeInsetsDirectional.fromSTEB" => {
            positional_sides(&c, ["paddingStart", "paddingTop", "paddingEnd", "paddingBottom"])
        }
        _ => Style::new(),
    }
}

/// [`padding`] with every key's `padding` prefix swapped for `margin`.
pub fn margin(text: &str) -> Style {
    padding(text).rename_prefix("padding", "margin")
}

fn named_sides(c: &Constructor, sides: &[(&str, &str)]) -> Style {
    let mut style = Style::new();
    for (arg, key) in sides {
        if let Some(v) = c.arg(arg).and_then(literal) {
            style.set(*key, v);
        }
    }
    style
}

fn positional_sides(c: &Constructor, keys: [&str; 4]) -> Style {
    let mut style = Style::new();
    if c.positional.len() < keys.len() {
        return style;
    }
    for (value, key) in c.positional.iter().zip(keys) {
        if let Some(v) = literal(value) {
            style.set(key, v);
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(style: &Style) -> Vec<(String, String)> {
        style.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn keys(style: &Style) -> Vec<&str> {
        style.keys().collect()
    }

    #[test]
    fn all() {
        let s = padding("EdgeInsets.all(16.0)");
        assert_eq!(keys(&s), ["padding"]);
        assert_eq!(s.number("padding"), Some(16.0));
    }

    #[test]
    fn symmetric() {
        let s = padding("EdgeInsets.symmetric(horizontal: 20.0, vertical: 10.0)");
        assert_eq!(keys(&s), ["paddingTop", "paddingBottom", "paddingLeft", "paddingRight"]);
        assert_eq!(s.number("paddingLeft"), Some(20.0));
        assert_eq!(s.number("paddingRight"), Some(20.0));
        assert_eq!(s.number("paddingTop"), Some(10.0));
        assert_eq!(s.number("paddingBottom"), Some(10.0));
    }

    #[test]
    fn symmetric_one_axis() {
        let s = padding("EdgeInsets.symmetric(horizontal: 4)");
        assert_eq!(keys(&s), ["paddingLeft", "paddingRight"]);
    }

    #[test]
    fn only_sets_given_sides() {
        let s = padding("EdgeInsets.only(top: 10.0, left: 5.0)");
        assert_eq!(keys(&s), ["paddingTop", "paddingLeft"]);
        assert_eq!(s.number("paddingTop"), Some(10.0));
        assert_eq!(s.number("paddingLeft"), Some(5.0));
    }

    #[test]
    fn from_ltrb() {
        let s = padding("EdgeInsets.fromLTRB(1, 2, 3, 4)");
        assert_eq!(
            pairs(&s),
            [
                ("paddingLeft".to_string(), "1".to_string()),
                ("paddingTop".to_string(), "2".to_string()),
                ("paddingRight".to_string(), "3".to_string()),
                ("paddingBottom".to_string(), "4".to_string()),
            ]
        );
    }

    #[test]
    fn zero() {
        assert_eq!(padding("EdgeInsets.zero").number("padding"), Some(0.0));
    }

    #[test]
    fn directional() {
        let s = padding("EdgeInsetsDirectional.only(start: 8, end: 4)");
        assert_eq!(keys(&s), ["paddingStart", "paddingEnd"]);
    }

    #[test]
    fn non_literal_arguments_ignored() {
        assert!(padding("EdgeInsets.all(spacing)").is_empty());
        assert!(padding("EdgeInsets.only(top: kGap)").is_empty());
    }

    #[test]
    fn unrecognized_is_empty() {
        assert!(padding("EdgeInsets.lerp(a, b, 0.5)").is_empty());
        assert!(padding("16").is_empty());
        assert!(padding("").is_empty());
    }

    #[test]
    fn margin_renames_keys() {
        let s = margin("EdgeInsets.symmetric(vertical: 2)");
        assert_eq!(keys(&s), ["marginTop", "marginBottom"]);
        assert_eq!(keys(&margin("EdgeInsets.all(3)")), ["margin"]);
    }
}
