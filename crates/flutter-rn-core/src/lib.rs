//! Flutter widget expressions to React Native JSX.
//!
//! The pipeline has three stages:
//!
//! 1. [`flutter_rn_dart`] parses source text into a `WidgetNode` tree.
//! 2. [`Builder`] maps each widget to a React Native [`Component`] and a flat
//!    [`Style`], using the converters in [`values`].
//! 3. [`generate`] renders the resulting [`TargetNode`] tree as indented JSX.
//!
//! # Quick start
//!
//! ```rust
//! let jsx = flutter_rn_core::convert("Container(width: 200.0, child: Text('Hello'))");
//! assert_eq!(jsx, "<View style={{width: 200}}>\n  <Text>Hello</Text>\n</View>\n");
//! ```
//!
//! Parse failures never escape [`convert`]; they come back as a JSX comment.
//! Use [`try_convert`] to get the structured error and build metadata instead.

pub mod builder;
pub mod codegen;
pub mod components;
pub mod style;
pub mod target;
pub mod values;

pub use builder::{build, Builder};
pub use codegen::{generate, generate_at, INDENT};
pub use components::{
    component_for, supported_widgets, widget_reference, Component, WidgetInfo, DEFAULT_COMPONENT, WIDGETS,
};
pub use flutter_rn_dart::{ParseError, ParseLimits};
pub use style::{Style, StyleValue};
pub use target::TargetNode;

use flutter_rn_dart::parse_with_limits;

// ── Conversion ────────────────────────────────────────────────────────────

/// A successful conversion and what was learned along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Generated JSX, newline-terminated.
    pub output: String,
    /// Name of the root Flutter widget.
    pub input_widget: String,
    /// Component of the root React Native element.
    pub output_component: Component,
    /// One entry per distinct widget that had no mapping.
    pub warnings: Vec<String>,
}

/// Convert Flutter source text, returning a JSX error comment on failure.
pub fn convert(source: &str) -> String {
    match try_convert(source) {
        Ok(conversion) => conversion.output,
        Err(e) => {
            log::debug!("conversion failed: {}", e);
            format!("// Error during conversion: {}\n", e)
        }
    }
}

/// Convert Flutter source text with the default [`ParseLimits`].
pub fn try_convert(source: &str) -> Result<Conversion, ParseError> {
    try_convert_with_limits(source, ParseLimits::default())
}

pub fn try_convert_with_limits(source: &str, limits: ParseLimits) -> Result<Conversion, ParseError> {
    let root = parse_with_limits(source, limits)?;
    log::debug!("parsed root widget `{}`", root.widget);

    let mut builder = Builder::new();
    let target = builder.build(&root);
    log::debug!("built root component `{}`", target.component);

    let output = generate(&target);
    log::debug!("generated {} bytes of JSX", output.len());

    Ok(Conversion {
        output,
        input_widget: root.widget,
        output_component: target.component,
        warnings: builder.into_warnings(),
    })
}
