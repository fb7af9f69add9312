use crate::ast::{set_prop, Constructor, Nested, Prop, PropertyValue, WidgetNode};
use crate::error::ParseError;
use crate::scanner::{find_angle_close, find_close, Scanner};

// ── Limits ────────────────────────────────────────────────────────────────

/// Bounds applied to a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum widget nesting depth, counting the root as 1.
    pub max_depth: usize,
    /// Maximum source length in bytes.
    pub max_input_len: usize,
}

impl ParseLimits {
    pub const DEFAULT_MAX_DEPTH: usize = 100;
    pub const DEFAULT_MAX_INPUT_LEN: usize = 1 << 20;
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_input_len: Self::DEFAULT_MAX_INPUT_LEN,
        }
    }
}

// ── Name classification ───────────────────────────────────────────────────

/// Widgets whose first positional argument is the text they display.
pub const TEXT_WIDGETS: &[&str] = &["Text", "SelectableText"];

/// Capitalized, dot-free constructors that build values, not widgets.
///
/// Calls to these are kept as [`PropertyValue::ConstructorLiteral`] text.
pub const VALUE_CONSTRUCTORS: &[&str] = &[
    "Alignment",
    "AssetImage",
    "Border",
    "BorderRadius",
    "BorderSide",
    "BoxConstraints",
    "BoxDecoration",
    "BoxShadow",
    "Color",
    "Duration",
    "EdgeInsets",
    "EdgeInsetsDirectional",
    "Key",
    "LinearGradient",
    "NetworkImage",
    "Offset",
    "RadialGradient",
    "Radius",
    "ShapeDecoration",
    "Size",
    "TextSpan",
    "TextStyle",
    "ValueKey",
];

pub fn is_text_widget(name: &str) -> bool {
    TEXT_WIDGETS.contains(&name)
}

pub fn is_value_constructor(name: &str) -> bool {
    VALUE_CONSTRUCTORS.contains(&name)
}

/// A constructor call is a widget when its name is capitalized, has no `.`,
/// and is not a known value constructor.
pub fn is_widget_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_uppercase())
        && !name.contains('.')
        && !is_value_constructor(name)
}

// ── Parser ────────────────────────────────────────────────────────────────

/// Positional and named arguments of one call.
#[derive(Default)]
struct Args {
    positional: Vec<PropertyValue>,
    named: Vec<Prop>,
}

struct Parser<'s> {
    src: &'s str,
    limits: ParseLimits,
    depth: usize,
}

impl<'s> Parser<'s> {
    fn new(src: &'s str, limits: ParseLimits) -> Result<Self, ParseError> {
        if src.len() > limits.max_input_len {
            return Err(ParseError::new(
                format!("input is {} bytes; the limit is {}", src.len(), limits.max_input_len),
                1,
                1,
            ));
        }
        Ok(Self { src, limits, depth: 0 })
    }

    fn err(&self, offset: usize, msg: impl Into<String>) -> ParseError {
        ParseError::at(self.src, offset, msg)
    }

    // ── Top-level call ────────────────────────────────────────────────────

    /// Read `Name(` at the cursor and return the name and the offsets of the
    /// parentheses.
    fn call_head(&self, s: &mut Scanner<'s>) -> Result<(&'s str, usize, usize), ParseError> {
        s.skip_trivia();
        s.skip_constructor_keyword();
        let name_at = s.pos();
        let name = s.path().ok_or_else(|| {
            self.err(name_at, "expected a constructor call such as `Container(...)`")
        })?;
        s.skip_trivia();
        if s.peek() != Some('(') {
            return Err(self.err(s.pos(), format!("expected '(' after `{}`", name)));
        }
        let open = s.pos();
        let close = find_close(self.src, open, s.end())
            .ok_or_else(|| self.err(open, format!("unclosed '(' in `{}(...)`", name)))?;
        Ok((name, open, close))
    }

    /// After the top-level call only whitespace, comments, `,` and `;` may follow.
    fn expect_trailing_end(&self, s: &mut Scanner<'s>) -> Result<(), ParseError> {
        loop {
            s.skip_trivia();
            if !(s.eat(';') || s.eat(',')) {
                break;
            }
        }
        if s.at_end() {
            Ok(())
        } else {
            Err(self.err(s.pos(), "unexpected input after the closing ')'"))
        }
    }

    fn parse_root(&mut self) -> Result<WidgetNode, ParseError> {
        let mut s = Scanner::new(self.src, 0, self.src.len());
        let (name, open, close) = self.call_head(&mut s)?;
        if name.contains('.') {
            return Err(self.err(0, format!("`{}` is not a widget constructor", name)));
        }
        let root = self.parse_widget(name, open + 1, close)?;
        s.set_pos(close + 1);
        self.expect_trailing_end(&mut s)?;
        Ok(root)
    }

    fn parse_constructor(&mut self) -> Result<Constructor, ParseError> {
        let mut s = Scanner::new(self.src, 0, self.src.len());
        let (name, open, close) = self.call_head(&mut s)?;
        let args = self.parse_args(open + 1, close)?;
        s.set_pos(close + 1);
        self.expect_trailing_end(&mut s)?;
        Ok(Constructor { name: name.to_string(), positional: args.positional, named: args.named })
    }

    // ── Widget ────────────────────────────────────────────────────────────

    /// Parse the argument list `src[start..end]` of a widget named `name`.
    fn parse_widget(&mut self, name: &str, start: usize, end: usize) -> Result<WidgetNode, ParseError> {
        self.depth += 1;
        if self.depth > self.limits.max_depth {
            return Err(self.err(
                start,
                format!("widgets nested deeper than {} levels", self.limits.max_depth),
            ));
        }
        let node = self.parse_widget_body(name, start, end);
        self.depth -= 1;
        node
    }

    fn parse_widget_body(&mut self, name: &str, start: usize, end: usize) -> Result<WidgetNode, ParseError> {
        let mut node = WidgetNode::new(name);

        if is_text_widget(name) {
            let mut s = Scanner::new(self.src, start, end);
            s.skip_trivia();
            if s.at_string() {
                let quote_at = s.pos();
                let text = s.string()
                    .ok_or_else(|| self.err(quote_at, "unterminated string literal"))?;
                node.data = Some(text);
                s.skip_trivia();
                if s.eat(',') {
                    node.props = self.parse_args(s.pos(), end)?.named;
                }
                return Ok(node);
            }
        }

        node.props = self.parse_args(start, end)?.named;
        node.nested = lift_nested(&mut node.props);
        Ok(node)
    }

    // ── Arguments ─────────────────────────────────────────────────────────

    fn parse_args(&mut self, start: usize, end: usize) -> Result<Args, ParseError> {
        let mut args = Args::default();
        let mut s = Scanner::new(self.src, start, end);

        loop {
            s.skip_separators();
            if s.at_end() {
                break;
            }
            let item_start = s.pos();
            match named_key(&mut s) {
                Some(key) => {
                    s.skip_trivia();
                    let value = self.parse_value(&mut s)?;
                    set_prop(&mut args.named, key.to_string(), value);
                }
                None => {
                    let value = self.parse_value(&mut s)?;
                    args.positional.push(value);
                }
            }
            // Whatever is here could not start a value; step over it.
            if s.pos() == item_start {
                s.advance();
            }
        }

        Ok(args)
    }

    // ── Value ─────────────────────────────────────────────────────────────

    fn parse_value(&mut self, s: &mut Scanner<'s>) -> Result<PropertyValue, ParseError> {
        let start = s.pos();

        if s.at_string() {
            let text = s.string().ok_or_else(|| self.err(start, "unterminated string literal"))?;
            return Ok(PropertyValue::String(text));
        }

        if let Some(num) = s.number() {
            return Ok(PropertyValue::Number(num.to_string()));
        }

        if s.eat_keyword("true") {
            return Ok(PropertyValue::Boolean(true));
        }
        if s.eat_keyword("false") {
            return Ok(PropertyValue::Boolean(false));
        }

        s.skip_constructor_keyword();
        let path_start = s.pos();
        if let Some(path) = s.path() {
            let after_path = s.pos();
            s.skip_trivia();
            if s.peek() == Some('(') {
                let open = s.pos();
                let close = find_close(self.src, open, s.end())
                    .ok_or_else(|| self.err(open, format!("unclosed '(' in `{}(...)`", path)))?;
                s.set_pos(close + 1);
                if is_widget_name(path) {
                    let child = self.parse_widget(path, open + 1, close)?;
                    return Ok(PropertyValue::ChildWidget(Box::new(child)));
                }
                let literal = &self.src[path_start..=close];
                return Ok(PropertyValue::ConstructorLiteral(literal.to_string()));
            }
            if path.contains('.') {
                s.set_pos(after_path);
                return Ok(PropertyValue::EnumReference(path.to_string()));
            }
            // A bare identifier: fall through to raw text.
            s.set_pos(path_start);
        }

        if s.peek() == Some('<') {
            let open = s.pos();
            if let Some(close) = find_angle_close(self.src, open, s.end()) {
                s.set_pos(close + 1);
                s.skip_trivia();
                if s.peek() == Some('[') {
                    return self.parse_list(s);
                }
            }
            s.set_pos(start);
        }

        if s.peek() == Some('[') {
            return self.parse_list(s);
        }

        let raw = s.raw_until_separator();
        Ok(PropertyValue::RawText(raw.trim().to_string()))
    }

    /// `[ Widget(...), Widget(...) ]`. Items that are not widget constructor
    /// calls are stepped over.
    fn parse_list(&mut self, s: &mut Scanner<'s>) -> Result<PropertyValue, ParseError> {
        let open = s.pos();
        let close = find_close(self.src, open, s.end())
            .ok_or_else(|| self.err(open, "unclosed '[' list"))?;
        s.set_pos(close + 1);

        let mut items = Vec::new();
        let mut inner = Scanner::new(self.src, open + 1, close);
        loop {
            inner.skip_separators();
            if inner.at_end() {
                break;
            }
            let item_start = inner.pos();
            inner.skip_constructor_keyword();
            if let Some(name) = inner.path() {
                inner.skip_trivia();
                if inner.peek() == Some('(') && is_widget_name(name) {
                    let item_open = inner.pos();
                    let item_close = find_close(self.src, item_open, inner.end())
                        .ok_or_else(|| self.err(item_open, format!("unclosed '(' in `{}(...)`", name)))?;
                    items.push(self.parse_widget(name, item_open + 1, item_close)?);
                    inner.set_pos(item_close + 1);
                    continue;
                }
            }
            inner.set_pos(item_start);
            inner.raw_until_separator();
            if inner.pos() == item_start {
                inner.advance();
            }
        }

        Ok(PropertyValue::WidgetList(items))
    }
}

/// Match `name:` at the cursor. On failure the cursor is left unchanged.
fn named_key<'s>(s: &mut Scanner<'s>) -> Option<&'s str> {
    let start = s.pos();
    if let Some(key) = s.ident() {
        s.skip_trivia();
        if s.peek() == Some(':') && s.peek_second() != Some(':') {
            s.advance();
            return Some(key);
        }
    }
    s.set_pos(start);
    None
}

/// Move a widget-valued `child` (preferred) or a list-valued `children`
/// argument out of `props`.
fn lift_nested(props: &mut Vec<Prop>) -> Nested {
    let child_at = props
        .iter()
        .position(|p| p.key == "child" && matches!(p.value, PropertyValue::ChildWidget(_)));
    if let Some(i) = child_at {
        if let PropertyValue::ChildWidget(child) = props.remove(i).value {
            return Nested::Child(child);
        }
    }

    let children_at = props
        .iter()
        .position(|p| p.key == "children" && matches!(p.value, PropertyValue::WidgetList(_)));
    if let Some(i) = children_at {
        if let PropertyValue::WidgetList(children) = props.remove(i).value {
            return Nested::Children(children);
        }
    }

    Nested::None
}

// ── Public parse entry points ─────────────────────────────────────────────

/// Parse a single top-level widget constructor call into a [`WidgetNode`].
pub fn parse_str(src: &str) -> Result<WidgetNode, ParseError> {
    parse_with_limits(src, ParseLimits::default())
}

/// [`parse_str`] with explicit nesting and size bounds.
pub fn parse_with_limits(src: &str, limits: ParseLimits) -> Result<WidgetNode, ParseError> {
    Parser::new(src, limits)?.parse_root()
}

/// Parse one literal constructor call, e.g. `EdgeInsets.only(top: 10.0)`,
/// into its name and arguments.
pub fn parse_constructor(src: &str) -> Result<Constructor, ParseError> {
    Parser::new(src, ParseLimits::default())?.parse_constructor()
}
