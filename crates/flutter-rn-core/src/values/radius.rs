use flutter_rn_dart::{parse_constructor, PropertyValue};

use crate::style::Style;
use crate::values::number::literal;

/// A converted `BorderRadius`: one radius for all corners, or explicit
/// per-corner keys.
#[derive(Debug, Clone, PartialEq)]
pub enum BorderRadius {
    Uniform(f64),
    /// `borderTopLeftRadius` etc., only the corners that were given.
    Corners(Style),
}

impl Default for BorderRadius {
    fn default() -> Self {
        BorderRadius::Uniform(0.0)
    }
}

impl BorderRadius {
    /// Style keys for this radius: `borderRadius`, or the corner keys.
    pub fn into_style(self) -> Style {
        match self {
            BorderRadius::Uniform(r) => Style::new().with("borderRadius", r),
            BorderRadius::Corners(style) => style,
        }
    }
}

const TOP_LEFT: &str = "borderTopLeftRadius";
const TOP_RIGHT: &str = "borderTopRightRadius";
const BOTTOM_LEFT: &str = "borderBottomLeftRadius";
const BOTTOM_RIGHT: &str = "borderBottomRightRadius";

/// Convert a `BorderRadius` expression.
///
/// `circular(r)` and `all(Radius.circular(r))` are uniform. `only`,
/// `vertical` and `horizontal` produce the corners they name. Anything else
/// is `Uniform(0)`.
pub fn border_radius(text: &str) -> BorderRadius {
    let text = text.trim();
    if text == "BorderRadius.zero" {
        return BorderRadius::Uniform(0.0);
    }
    let Ok(c) = parse_constructor(text) else {
        return BorderRadius::default();
    };

    match c.name.as_str() {
        "BorderRadius.circular" => {
            BorderRadius::Uniform(c.positional.first().and_then(literal).unwrap_or(0.0))
        }
        "BorderRadius.all" => {
            BorderRadius::Uniform(c.positional.first().and_then(radius).unwrap_or(0.0))
        }
        "BorderRadius.only" => {
            let mut style = Style::new();
            set_corners(&mut style, c.arg("topLeft"), &[TOP_LEFT]);
            set_corners(&mut style, c.arg("topRight"), &[TOP_RIGHT]);
            set_corners(&mut style, c.arg("bottomLeft"), &[BOTTOM_LEFT]);
            set_corners(&mut style, c.arg("bottomRight"), &[BOTTOM_RIGHT]);
            BorderRadius::Corners(style)
        }
        "BorderRadius.vertical" => {
            let mut style = Style::new();
            set_corners(&mut style, c.arg("top"), &[TOP_LEFT, TOP_RIGHT]);
            set_corners(&mut style, c.arg("bottom"), &[BOTTOM_LEFT, BOTTOM_RIGHT]);
            BorderRadius::Corners(style)
        }
        "BorderRadius.horizontal" => {
            let mut style = Style::new();
            set_corners(&mut style, c.arg("left"), &[TOP_LEFT, BOTTOM_LEFT]);
            set_corners(&mut style, c.arg("right"), &[TOP_RIGHT, BOTTOM_RIGHT]);
            BorderRadius::Corners(style)
        }
        _ => BorderRadius::default(),
    }
}

fn set_corners(style: &mut Style, value: Option<&PropertyValue>, keys: &[&str]) {
    if let Some(r) = value.and_then(radius) {
        for key in keys {
            style.set(*key, r);
        }
    }
}

/// `Radius.circular(r)` → `r`.
fn radius(value: &PropertyValue) -> Option<f64> {
    let text = value.as_text()?;
    if text == "Radius.zero" {
        return Some(0.0);
    }
    let c = parse_constructor(text).ok()?;
    if c.name != "Radius.circular" {
        return None;
    }
    c.positional.first().and_then(literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner_keys(r: &BorderRadius) -> Vec<&str> {
        match r {
            BorderRadius::Corners(s) => s.keys().collect(),
            BorderRadius::Uniform(_) => panic!("expected corners, got {:?}", r),
        }
    }

    #[test]
    fn circular() {
        assert_eq!(border_radius("BorderRadius.circular(8.0)"), BorderRadius::Uniform(8.0));
    }

    #[test]
    fn only_two_corners() {
        let r = border_radius(
            "BorderRadius.only(topLeft: Radius.circular(10.0), topRight: Radius.circular(10.0))",
        );
        assert_eq!(corner_keys(&r), [TOP_LEFT, TOP_RIGHT]);
        let style = r.into_style();
        assert_eq!(style.number(TOP_LEFT), Some(10.0));
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn all_radius() {
        assert_eq!(border_radius("BorderRadius.all(Radius.circular(12))"), BorderRadius::Uniform(12.0));
    }

    #[test]
    fn vertical_and_horizontal() {
        let r = border_radius("BorderRadius.vertical(top: Radius.circular(4))");
        assert_eq!(corner_keys(&r), [TOP_LEFT, TOP_RIGHT]);
        let r = border_radius("BorderRadius.horizontal(right: Radius.circular(4))");
        assert_eq!(corner_keys(&r), [TOP_RIGHT, BOTTOM_RIGHT]);
    }

    #[test]
    fn elliptical_corner_skipped() {
        let r = border_radius("BorderRadius.only(topLeft: Radius.elliptical(1, 2))");
        assert_eq!(corner_keys(&r).len(), 0);
    }

    #[test]
    fn unrecognized_is_zero() {
        assert_eq!(border_radius("myRadius"), BorderRadius::Uniform(0.0));
        assert_eq!(border_radius("BorderRadius.circular(r)"), BorderRadius::Uniform(0.0));
    }

    #[test]
    fn uniform_style_key() {
        let s = BorderRadius::Uniform(6.0).into_style();
        assert_eq!(s.number("borderRadius"), Some(6.0));
    }
}
