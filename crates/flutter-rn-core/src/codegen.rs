use std::fmt::Write;

use crate::target::TargetNode;

/// One indentation level.
pub const INDENT: &str = "  ";

/// Render `node` as JSX starting at indentation level 0.
pub fn generate(node: &TargetNode) -> String {
    generate_at(node, 0)
}

/// Render `node` as JSX starting at indentation level `level`.
///
/// Every element ends its last line with `\n`. Text content is emitted as is.
pub fn generate_at(node: &TargetNode, level: usize) -> String {
    let mut out = String::new();
    write_node(&mut out, node, level);
    out
}

fn write_node(out: &mut String, node: &TargetNode, level: usize) {
    let indent = INDENT.repeat(level);
    let name = node.component.as_str();

    out.push_str(&indent);
    out.push('<');
    out.push_str(name);

    if !node.style.is_empty() {
        out.push_str(" style={{");
        for (i, (key, value)) in node.style.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{}: {}", key, value);
        }
        out.push_str("}}");
    }

    match node.text_content.as_deref() {
        _ if !node.children.is_empty() => {
            out.push_str(">\n");
            for child in &node.children {
                write_node(out, child, level + 1);
            }
            let _ = writeln!(out, "{}</{}>", indent, name);
        }
        Some(text) if !text.is_empty() => {
            let _ = writeln!(out, ">{}</{}>", text, name);
        }
        _ => out.push_str(" />\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Component;
    use crate::style::Style;

    #[test]
    fn self_closing_without_style() {
        assert_eq!(generate(&TargetNode::new(Component::View)), "<View />\n");
    }

    #[test]
    fn inline_style_in_insertion_order() {
        let node = TargetNode::new(Component::View)
            .with_style(Style::new().with("width", 200.0).with("backgroundColor", "#2196F3"));
        assert_eq!(generate(&node), "<View style={{width: 200, backgroundColor: '#2196F3'}} />\n");
    }

    #[test]
    fn text_leaf_on_one_line() {
        let node = TargetNode::new(Component::Text).with_text("Hello <World>");
        assert_eq!(generate(&node), "<Text>Hello <World></Text>\n");
    }

    #[test]
    fn empty_text_is_self_closing() {
        let node = TargetNode::new(Component::Text).with_text("");
        assert_eq!(generate(&node), "<Text />\n");
    }

    #[test]
    fn children_are_indented() {
        let node = TargetNode::new(Component::View)
            .with_child(TargetNode::new(Component::Text).with_text("A"))
            .with_child(TargetNode::new(Component::View).with_child(TargetNode::new(Component::View)));
        let expected = "<View>\n  <Text>A</Text>\n  <View>\n    <View />\n  </View>\n</View>\n";
        assert_eq!(generate(&node), expected);
    }

    #[test]
    fn start_level_offsets_everything() {
        let node = TargetNode::new(Component::View).with_child(TargetNode::new(Component::View));
        assert_eq!(generate_at(&node, 2), "    <View>\n      <View />\n    </View>\n");
    }

    #[test]
    fn generate_is_repeatable() {
        let node = TargetNode::new(Component::View)
            .with_style(Style::new().with("flex", 1.0))
            .with_child(TargetNode::new(Component::Text).with_text("x"));
        assert_eq!(generate(&node), generate(&node));
    }
}
