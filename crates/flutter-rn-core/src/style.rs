use std::fmt;

// ── StyleValue ────────────────────────────────────────────────────────────

/// One React Native style attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Number(f64),
    Str(String),
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        StyleValue::Number(v)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

/// JSX object-literal form: numbers bare in shortest form (`200.0` → `200`),
/// strings single-quoted. Non-finite numbers use the JavaScript globals.
impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(v) if v.is_nan() => f.write_str("NaN"),
            StyleValue::Number(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            StyleValue::Number(v) => write!(f, "{}", v),
            StyleValue::Str(s) => {
                f.write_str("'")?;
                for ch in s.chars() {
                    match ch {
                        '\\' => f.write_str("\\\\")?,
                        '\'' => f.write_str("\\'")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str("'")
            }
        }
    }
}

// ── Style ─────────────────────────────────────────────────────────────────

/// A flat style map that remembers the order keys were first written.
///
/// Writing an existing key replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    entries: Vec<(String, StyleValue)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Merge `other` into `self` in `other`'s order.
    pub fn extend(&mut self, other: Style) {
        for (k, v) in other.entries {
            self.set(k, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Numeric value of `key`, if present and numeric.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            StyleValue::Number(v) => Some(*v),
            StyleValue::Str(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rename every key starting with `from` so it starts with `to` instead.
    pub fn rename_prefix(self, from: &str, to: &str) -> Style {
        let entries = self
            .entries
            .into_iter()
            .map(|(k, v)| match k.strip_prefix(from) {
                Some(rest) => (format!("{}{}", to, rest), v),
                None => (k, v),
            })
            .collect();
        Style { entries }
    }
}
