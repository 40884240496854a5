//! # Climb
//!
//! Parse integer expressions with user-defined infix operators into
//! trees that respect precedence and associativity.
//!
//! ```
//! use climb::operators::Associativity::*;
//! use climb::Parser;
//!
//! let mut parser: Parser = Parser::new();
//! parser.register(1, LeftToRight, &["+", "-"]).unwrap();
//! parser.register(2, LeftToRight, &["*"]).unwrap();
//! parser.register(3, RightToLeft, &["^"]).unwrap();
//!
//! let expr = parser.parse("1 + 2 * 3 ^ 4 ^ 5").unwrap().unwrap();
//! assert_eq!(expr.to_string(), "(1 + (2 * (3 ^ (4 ^ 5))))");
//! ```
pub use ast::{Expr, ExprKind, IntLiteral, Literal, OperatorToken};
pub use operators::{Associativity, Operator, OperatorErr, OperatorTable};
pub use parser::{
    ParseErr, ParseErrKind, ParseMode, ParseResult, Parsed, Parser, DEFAULT_MAX_DEPTH,
};

pub mod ast;
pub mod cli;
pub mod config;
pub mod driver;
pub mod operators;
pub mod parser;
pub mod repl;
pub mod result;
pub mod util;

#[cfg(test)]
mod tests;
