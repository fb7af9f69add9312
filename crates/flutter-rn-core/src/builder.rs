use flutter_rn_dart::{is_text_widget, parse_constructor, Nested, WidgetNode};

use crate::components::{component_for, is_supported, supported_widgets};
use crate::style::Style;
use crate::target::TargetNode;
use crate::values::{align, border, font, insets, number, radius, to_hex};

// ── Builder ───────────────────────────────────────────────────────────────

/// Turns a parsed [`WidgetNode`] tree into a [`TargetNode`] tree.
///
/// Never fails. Widgets missing from the registry become a plain `View` and
/// leave one warning per distinct name.
#[derive(Debug, Default)]
pub struct Builder {
    warnings: Vec<String>,
    unknown: Vec<String>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(&mut self, node: &WidgetNode) -> TargetNode {
        let mut target = TargetNode::new(component_for(&node.widget)).with_style(self.style_for(node));

        match &node.nested {
            Nested::Child(child) => target.children.push(self.build(child)),
            Nested::Children(children) => {
                target.children = children.iter().map(|c| self.build(c)).collect();
            }
            Nested::None => {}
        }

        if is_text_widget(&node.widget) {
            target.text_content = node.data.clone();
        }
        target
    }

    /// Warnings collected so far, in the order the widgets were met.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn style_for(&mut self, node: &WidgetNode) -> Style {
        match node.widget.as_str() {
            "Container" => container_style(node),
            "Text" | "SelectableText" => text_style(node),
            "Row" => flex_style(node, "row"),
            "Column" => flex_style(node, "column"),
            "Stack" => Style::new().with("position", "relative"),
            "Positioned" => positioned_style(node),
            "Expanded" | "Flexible" => {
                let flex = node.prop("flex").and_then(number::dimension);
                Style::new().with("flex", flex.unwrap_or(1.0.into()))
            }
            "SizedBox" => {
                let mut style = Style::new();
                copy_dimensions(&mut style, node, &["width", "height"]);
                style
            }
            "Padding" => node.prop_text("padding").map(insets::padding).unwrap_or_default(),
            "Center" => Style::new().with("justifyContent", "center").with("alignItems", "center"),
            "Opacity" => {
                let mut style = Style::new();
                copy_dimensions(&mut style, node, &["opacity"]);
                style
            }
            name => {
                if !is_supported(name) {
                    self.note_unknown(name);
                }
                Style::new()
            }
        }
    }

    fn note_unknown(&mut self, name: &str) {
        if self.unknown.iter().any(|n| n == name) {
            return;
        }
        log::warn!("no mapping for widget `{}`; rendering it as a View", name);
        self.unknown.push(name.to_string());
        self.warnings.push(format!(
            "Widget '{}' may not be fully supported. Supported widgets: {}",
            name,
            supported_widgets()
        ));
    }
}

/// Build a [`TargetNode`] tree, discarding warnings.
pub fn build(node: &WidgetNode) -> TargetNode {
    Builder::new().build(node)
}

// ── Per-widget rules ──────────────────────────────────────────────────────

fn container_style(node: &WidgetNode) -> Style {
    let mut style = Style::new();
    copy_dimensions(&mut style, node, &["width", "height"]);

    if let Some(color) = node.prop_text("color") {
        style.set("backgroundColor", to_hex(color));
    }

    if let Some((justify, items)) = node.prop_text("alignment").and_then(align::alignment) {
        style.set("justifyContent", justify);
        style.set("alignItems", items);
    }

    if let Some(decoration) = node.prop_text("decoration").and_then(|d| parse_constructor(d).ok()) {
        if decoration.name == "BoxDecoration" {
            if let Some(color) = decoration.arg_text("color") {
                style.set("backgroundColor", to_hex(color));
            }
            if let Some(r) = decoration.arg_text("borderRadius") {
                style.extend(radius::border_radius(r).into_style());
            }
            if let Some(b) = decoration.arg_text("border") {
                style.extend(border::border(b));
            }
        }
    }

    if let Some(padding) = node.prop_text("padding") {
        style.extend(insets::padding(padding));
    }
    if let Some(margin) = node.prop_text("margin") {
        style.extend(insets::margin(margin));
    }
    style
}

fn text_style(node: &WidgetNode) -> Style {
    let mut style = Style::new();

    let declared = node
        .prop_text("style")
        .and_then(|s| parse_constructor(s).ok())
        .filter(|c| c.name == "TextStyle");
    if let Some(ts) = declared {
        if let Some(color) = ts.arg_text("color") {
            style.set("color", to_hex(color));
        }
        if let Some(size) = ts.arg("fontSize").and_then(number::dimension) {
            style.set("fontSize", size);
        }
        if let Some(weight) = ts.arg_text("fontWeight") {
            style.set("fontWeight", font::weight(weight));
        }
        if let Some(fs) = ts.arg_text("fontStyle") {
            style.set("fontStyle", font::style(fs));
        }
        if let Some(family) = ts.arg_text("fontFamily") {
            style.set("fontFamily", family);
        }
        if let Some(spacing) = ts.arg("letterSpacing").and_then(number::dimension) {
            style.set("letterSpacing", spacing);
        }
    }

    if let Some(a) = node.prop_text("textAlign") {
        style.set("textAlign", align::text_align(a));
    }
    style
}

fn flex_style(node: &WidgetNode, direction: &str) -> Style {
    let mut style = Style::new().with("flexDirection", direction);
    if let Some(main) = node.prop_text("mainAxisAlignment") {
        style.set("justifyContent", align::main_axis(main));
    }
    if let Some(cross) = node.prop_text("crossAxisAlignment") {
        style.set("alignItems", align::cross_axis(cross));
    }
    style
}

fn positioned_style(node: &WidgetNode) -> Style {
    let mut style = Style::new().with("position", "absolute");
    copy_dimensions(&mut style, node, &["top", "bottom", "left", "right", "width", "height"]);
    style
}

/// Copy each of `keys` that `node` sets, under the same name.
fn copy_dimensions(style: &mut Style, node: &WidgetNode, keys: &[&str]) {
    for key in keys {
        if let Some(v) = node.prop(key).and_then(number::dimension) {
            style.set(*key, v);
        }
    }
}
