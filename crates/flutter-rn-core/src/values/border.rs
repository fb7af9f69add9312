use flutter_rn_dart::parse_constructor;

use crate::style::Style;
use crate::values::color::to_hex;
use crate::values::number::literal;

/// `Border.all(width: w, color: c)` → `borderWidth`, `borderColor`.
///
/// Either argument may be missing. Other forms yield an empty style.
pub fn border(text: &str) -> Style {
    let mut style = Style::new();
    let Ok(c) = parse_constructor(text.trim()) else {
        return style;
    };
    if c.name != "Border.all" {
        return style;
    }
    if let Some(w) = c.arg("width").and_then(literal) {
        style.set("borderWidth", w);
    }
    if let Some(color) = c.arg_text("color") {
        style.set("borderColor", to_hex(color));
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_and_color() {
        let s = border("Border.all(width: 2.0, color: Colors.red)");
        assert_eq!(s.keys().collect::<Vec<_>>(), ["borderWidth", "borderColor"]);
        assert_eq!(s.number("borderWidth"), Some(2.0));
        assert_eq!(s.get("borderColor").map(|v| v.to_string()).as_deref(), Some("'#F44336'"));
    }

    #[test]
    fn color_only() {
        let s = border("Border.all(color: Color(0xFF000000))");
        assert_eq!(s.keys().collect::<Vec<_>>(), ["borderColor"]);
    }

    #[test]
    fn other_forms_empty() {
        assert!(border("Border(top: BorderSide())").is_empty());
        assert!(border("none").is_empty());
    }
}
