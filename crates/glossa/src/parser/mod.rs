//! Content template and document parsing.
//!
//! Content strings are parsed once, when a document is loaded, into the
//! [`ast`] types that phrase entries instantiate.

pub mod ast;
mod document;
pub mod error;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use template::parse_template;
