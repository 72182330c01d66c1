
//! Reading the fully-parenthesized prefix grammar.

pub mod error;
pub mod parser;
pub mod reader;
pub mod source;
pub mod splitter;
pub mod tokenizer;

pub use error::ParseError;
pub use parser::parse_expr;
