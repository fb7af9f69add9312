// ── PropertyValue ─────────────────────────────────────────────────────────

/// The value of one named (or positional) constructor argument.
///
/// Literals are kept in their source text form; interpreting them is left to
/// whoever consumes the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Quoted string with escapes resolved: `'Hello'`
    String(String),
    /// Numeric literal exactly as written: `16.0`, `-4`, `0xFF2196F3`
    Number(String),
    /// `true` / `false`
    Boolean(bool),
    /// Dotted constant path: `MainAxisAlignment.center`, `Colors.grey.shade300`
    EnumReference(String),
    /// Full text of a non-widget constructor call: `EdgeInsets.all(16.0)`
    ConstructorLiteral(String),
    /// A nested widget: `Text('Hello')`
    ChildWidget(Box<WidgetNode>),
    /// A bracketed list of widgets: `[Text('A'), Text('B')]`
    WidgetList(Vec<WidgetNode>),
    /// Anything else, trimmed: identifiers, expressions, `null`.
    RawText(String),
}

impl PropertyValue {
    /// The literal source text of a scalar value.
    ///
    /// Returns `None` for widgets and widget lists.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s)
            | PropertyValue::Number(s)
            | PropertyValue::EnumReference(s)
            | PropertyValue::ConstructorLiteral(s)
            | PropertyValue::RawText(s) => Some(s.as_str()),
            PropertyValue::Boolean(true) => Some("true"),
            PropertyValue::Boolean(false) => Some("false"),
            PropertyValue::ChildWidget(_) | PropertyValue::WidgetList(_) => None,
        }
    }

    pub fn as_widget(&self) -> Option<&WidgetNode> {
        match self {
            PropertyValue::ChildWidget(w) => Some(w),
            _ => None,
        }
    }
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// A single `name: value` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: PropertyValue,
}

/// Set `key` in `props`, replacing an earlier value with the same key.
pub(crate) fn set_prop(props: &mut Vec<Prop>, key: String, value: PropertyValue) {
    match props.iter_mut().find(|p| p.key == key) {
        Some(existing) => existing.value = value,
        None => props.push(Prop { key, value }),
    }
}

fn find_prop<'a>(props: &'a [Prop], key: &str) -> Option<&'a PropertyValue> {
    props.iter().find(|p| p.key == key).map(|p| &p.value)
}

// ── Nested ────────────────────────────────────────────────────────────────

/// The structural content of a widget: at most one of `child` / `children`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Nested {
    #[default]
    None,
    /// Lifted from a `child:` argument.
    Child(Box<WidgetNode>),
    /// Lifted from a `children:` argument. May be empty.
    Children(Vec<WidgetNode>),
}

// ── WidgetNode ────────────────────────────────────────────────────────────

/// One parsed widget constructor call.
///
/// ```dart
/// Container(
///   width: 200.0,
///   child: Text('Hello'),
/// )
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetNode {
    /// Constructor name: `"Container"`, `"Text"`.
    pub widget: String,
    /// Named arguments, minus whichever of `child` / `children` was lifted.
    pub props: Vec<Prop>,
    /// Leading string argument of a text-bearing widget.
    pub data: Option<String>,
    pub nested: Nested,
}

impl WidgetNode {
    pub fn new(widget: impl Into<String>) -> Self {
        Self { widget: widget.into(), props: Vec::new(), data: None, nested: Nested::None }
    }

    /// Look up a property value by key.
    pub fn prop(&self, key: &str) -> Option<&PropertyValue> {
        find_prop(&self.props, key)
    }

    /// Get a property's literal text if it is a scalar.
    pub fn prop_text(&self, key: &str) -> Option<&str> {
        self.prop(key)?.as_text()
    }

    pub fn child(&self) -> Option<&WidgetNode> {
        match &self.nested {
            Nested::Child(c) => Some(c),
            _ => None,
        }
    }

    pub fn children(&self) -> Option<&[WidgetNode]> {
        match &self.nested {
            Nested::Children(c) => Some(c),
            _ => None,
        }
    }
}

// ── Constructor ───────────────────────────────────────────────────────────

/// A literal constructor call broken into its arguments.
///
/// Produced by [`parse_constructor`](crate::parse_constructor) for values like
/// `EdgeInsets.symmetric(horizontal: 20.0)` or `Color(0xFF2196F3)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    /// Full dotted name: `"EdgeInsets.symmetric"`.
    pub name: String,
    pub positional: Vec<PropertyValue>,
    pub named: Vec<Prop>,
}

impl Constructor {
    pub fn arg(&self, key: &str) -> Option<&PropertyValue> {
        find_prop(&self.named, key)
    }

    pub fn arg_text(&self, key: &str) -> Option<&str> {
        self.arg(key)?.as_text()
    }

    pub fn positional_text(&self, index: usize) -> Option<&str> {
        self.positional.get(index)?.as_text()
    }
}
