use crate::components::Component;
use crate::style::Style;

/// One React Native element ready for code generation.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetNode {
    pub component: Component,
    pub style: Style,
    pub children: Vec<TargetNode>,
    /// Literal text rendered between the tags of a text element.
    pub text_content: Option<String>,
}

impl TargetNode {
    pub fn new(component: Component) -> Self {
        Self { component, style: Style::new(), children: Vec::new(), text_content: None }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_child(mut self, child: TargetNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }
}
