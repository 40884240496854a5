use std::fmt;

use crate::ast::Expr;
use crate::util::Location;

pub type ParseResult<T> = Result<Option<Expr<T>>, ParseErr>;

/// Errors that abort a parse. Absence of an expression is *not* an
/// error; it's represented as `Ok(None)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseErr {
    pub kind: ParseErrKind,
    pub loc: Location,
}

impl ParseErr {
    pub fn new(kind: ParseErrKind, loc: Location) -> Self {
        Self { kind, loc }
    }

    pub fn overflow(digits: &str, loc: Location) -> Self {
        Self::new(ParseErrKind::Overflow(digits.to_owned()), loc)
    }

    pub fn inconsistency<S: Into<String>>(msg: S, loc: Location) -> Self {
        Self::new(ParseErrKind::InternalInconsistency(msg.into()), loc)
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self.kind, ParseErrKind::Overflow(_))
    }

    pub fn is_internal(&self) -> bool {
        matches!(self.kind, ParseErrKind::InternalInconsistency(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrKind {
    /// An integer literal doesn't fit in the literal type. Holds the
    /// digits consumed up to and including the one that overflowed.
    Overflow(String),
    /// An invariant of the parser was violated. This indicates a bug,
    /// not a problem with the input.
    InternalInconsistency(String),
    /// Operator nesting exceeded the configured maximum depth.
    MaxDepthExceeded(usize),
}

impl fmt::Display for ParseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.kind, self.loc)
    }
}

impl fmt::Display for ParseErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseErrKind::*;
        let msg = match self {
            Overflow(digits) => {
                format!("Integer literal out of range: {digits}...")
            }
            InternalInconsistency(msg) => format!("Internal parser error: {msg}"),
            MaxDepthExceeded(max) => {
                format!("Maximum operator nesting depth exceeded: {max}")
            }
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for ParseErr {}
