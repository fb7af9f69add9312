//! Parser for Flutter widget constructor expressions.
//!
//! Reads one Dart expression such as `Container(width: 200.0, child: Text('Hi'))`
//! into a [`WidgetNode`] tree. Only the literal subset used to describe widget
//! trees is understood: strings (plain, triple-quoted and `r'...'` raw), numbers,
//! booleans, dotted constants, nested constructor calls and lists of widgets.
//! Anything else is kept as raw text.
//!
//! This crate is dependency-free so editor tooling can use it on its own.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `WidgetNode`, `Nested`, `Prop`, `PropertyValue`, `Constructor` |
//! | [`error`] | `ParseError` |
//! | [`parser`] | `parse_str`, `parse_with_limits`, `parse_constructor`, `ParseLimits` |
//!
//! # Quick start
//!
//! ```rust
//! use flutter_rn_dart::parse_str;
//!
//! let root = parse_str("Row(children: [Text('A'), Text('B')])").unwrap();
//! assert_eq!(root.widget, "Row");
//! assert_eq!(root.children().unwrap().len(), 2);
//! ```

pub mod ast;
pub mod error;
pub mod parser;
mod scanner;

pub use ast::{Constructor, Nested, Prop, PropertyValue, WidgetNode};
pub use error::ParseError;
pub use parser::{
    is_text_widget, is_value_constructor, is_widget_name, parse_constructor, parse_str,
    parse_with_limits, ParseLimits, TEXT_WIDGETS, VALUE_CONSTRUCTORS,
};
