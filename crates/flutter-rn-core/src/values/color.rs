use flutter_rn_dart::parse_constructor;

use crate::values::number::parse_number;

/// Material palette used by `Colors.*` references.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("red", "#F44336"),
    ("pink", "#E91E63"),
    ("purple", "#9C27B0"),
    ("deepPurple", "#673AB7"),
    ("indigo", "#3F51B5"),
    ("blue", "#2196F3"),
    ("lightBlue", "#03A9F4"),
    ("cyan", "#00BCD4"),
    ("teal", "#009688"),
    ("green", "#4CAF50"),
    ("lightGreen", "#8BC34A"),
    ("lime", "#CDDC39"),
    ("yellow", "#FFEB3B"),
    ("amber", "#FFC107"),
    ("orange", "#FF9800"),
    ("deepOrange", "#FF5722"),
    ("brown", "#795548"),
    ("grey", "#9E9E9E"),
    ("blueGrey", "#607D8B"),
    ("black", "#000000"),
    ("white", "#FFFFFF"),
    ("transparent", "transparent"),
];

/// Hex value of a bare Material color name; `#000000` when unknown.
pub fn named_color(name: &str) -> &'static str {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hex)| *hex)
        .unwrap_or("#000000")
}

/// Convert a Flutter color expression to a React Native color string.
///
/// | Input | Output |
/// |-------|--------|
/// | `Color(0xFFFF5722)` | `#FF5722` (alpha dropped, digits kept as written) |
/// | `Color.fromARGB(255, 33, 150, 243)` | `#2196F3` |
/// | `Color.fromRGBO(33, 150, 243, 1.0)` | `#2196F3` |
/// | `Colors.blue`, `Colors.blue.shade700` | `#2196F3` |
/// | `Colors.transparent` | `transparent` |
///
/// Anything else is returned unchanged.
pub fn to_hex(text: &str) -> String {
    let text = text.trim();

    if let Some(name) = text.strip_prefix("Colors.") {
        let base = name.split('.').next().unwrap_or(name);
        return named_color(base).to_string();
    }

    if let Ok(c) = parse_constructor(text) {
        let converted = match c.name.as_str() {
            "Color" => c.positional_text(0).and_then(argb_literal_to_hex),
            "Color.fromARGB" => rgb_channels(|i| c.positional_text(i), [1, 2, 3]),
            "Color.fromRGBO" => rgb_channels(|i| c.positional_text(i), [0, 1, 2]),
            _ => None,
        };
        if let Some(hex) = converted {
            return hex;
        }
    }

    text.to_string()
}

/// `0xAARRGGBB` → `#RRGGBB`.
fn argb_literal_to_hex(literal: &str) -> Option<String> {
    let digits = literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))?;
    if digits.len() != 8 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(format!("#{}", &digits[2..]))
}

fn rgb_channels<'a>(arg: impl Fn(usize) -> Option<&'a str>, at: [usize; 3]) -> Option<String> {
    let mut rgb = [0u8; 3];
    for (slot, index) in rgb.iter_mut().zip(at) {
        let v = parse_number(arg(index)?)?;
        *slot = v.round().clamp(0.0, 255.0) as u8;
    }
    Some(format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2]))
}
