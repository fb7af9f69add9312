//! Static registry: every Flutter widget the builder knows and the React
//! Native component it becomes.

use std::fmt;

// ── Components ────────────────────────────────────────────────────────────

/// A React Native core component that generated markup can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    View,
    Text,
    ScrollView,
    TouchableOpacity,
}

impl Component {
    pub fn as_str(self) -> &'static str {
        match self {
            Component::View => "View",
            Component::Text => "Text",
            Component::ScrollView => "ScrollView",
            Component::TouchableOpacity => "TouchableOpacity",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an unknown widget becomes.
pub const DEFAULT_COMPONENT: Component = Component::View;

// ── Widget info ───────────────────────────────────────────────────────────

pub struct WidgetInfo {
    pub name:      &'static str,
    pub component: Component,
    pub doc:       &'static str,
}

pub static WIDGETS: &[WidgetInfo] = &[
    WidgetInfo {
        name: "Container",
        component: Component::View,
        doc: "Size, background color, alignment, decoration (color, radius, border), padding and margin.",
    },
    WidgetInfo {
        name: "Text",
        component: Component::Text,
        doc: "Leading string becomes the text content; `style: TextStyle(...)` and `textAlign` are mapped.",
    },
    WidgetInfo {
        name: "Row",
        component: Component::View,
        doc: "`flexDirection: 'row'` with main/cross axis alignment.",
    },
    WidgetInfo {
        name: "Column",
        component: Component::View,
        doc: "`flexDirection: 'column'` with main/cross axis alignment.",
    },
    WidgetInfo {
        name: "Stack",
        component: Component::View,
        doc: "`position: 'relative'`.",
    },
    WidgetInfo {
        name: "Positioned",
        component: Component::View,
        doc: "`position: 'absolute'` with `top`, `bottom`, `left`, `right`, `width`, `height`.",
    },
    WidgetInfo {
        name: "Expanded",
        component: Component::View,
        doc: "`flex`, default 1.",
    },
    WidgetInfo {
        name: "SizedBox",
        component: Component::View,
        doc: "`width` and `height`.",
    },
    WidgetInfo {
        name: "Padding",
        component: Component::View,
        doc: "`padding` from an `EdgeInsets` value.",
    },
    WidgetInfo {
        name: "SelectableText",
        component: Component::Text,
        doc: "Same rules as `Text`.",
    },
    WidgetInfo {
        name: "Flexible",
        component: Component::View,
        doc: "`flex`, default 1.",
    },
    WidgetInfo {
        name: "Center",
        component: Component::View,
        doc: "Centers its child on both axes.",
    },
    WidgetInfo {
        name: "Opacity",
        component: Component::View,
        doc: "`opacity`.",
    },
    WidgetInfo {
        name: "SingleChildScrollView",
        component: Component::ScrollView,
        doc: "Scrollable container; no style.",
    },
    WidgetInfo {
        name: "ListView",
        component: Component::ScrollView,
        doc: "Scrollable list of children; no style.",
    },
    WidgetInfo {
        name: "GestureDetector",
        component: Component::TouchableOpacity,
        doc: "Touchable wrapper; callbacks are dropped.",
    },
    WidgetInfo {
        name: "InkWell",
        component: Component::TouchableOpacity,
        doc: "Touchable wrapper; callbacks are dropped.",
    },
];

pub fn widget_by_name(name: &str) -> Option<&'static WidgetInfo> {
    WIDGETS.iter().find(|w| w.name == name)
}

/// The component `widget` maps to, [`DEFAULT_COMPONENT`] when unknown.
pub fn component_for(widget: &str) -> Component {
    widget_by_name(widget).map_or(DEFAULT_COMPONENT, |w| w.component)
}

pub fn is_supported(widget: &str) -> bool {
    widget_by_name(widget).is_some()
}

/// Comma-separated names of every known widget, in registry order.
pub fn supported_widgets() -> String {
    WIDGETS.iter().map(|w| w.name).collect::<Vec<_>>().join(", ")
}

/// One line per supported widget: `Name -> Component  notes`.
pub fn widget_reference() -> String {
    let width = WIDGETS.iter().map(|w| w.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for w in WIDGETS {
        out.push_str(&format!("{:<width$} -> {:<16} {}\n", w.name, w.component.as_str(), w.doc));
    }
    out
}
