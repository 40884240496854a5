use core::fmt;
use std::fmt::Formatter;

use crate::config::ConfigErr;
use crate::parser::ParseErr;
use crate::util::Location;

/// Result type used by the top level driver.
pub type DriverResult = Result<(), DriverErr>;

#[derive(Debug)]
pub struct DriverErr {
    pub kind: DriverErrKind,
}

impl DriverErr {
    pub fn new(kind: DriverErrKind) -> Self {
        Self { kind }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use DriverErrKind::*;
        match &self.kind {
            Parse(err) if err.is_internal() => 70,
            Parse(_) | NoExpression | UnconsumedInput(..) | DroppedOperator(_) => 1,
            CouldNotReadSourceFile(..) | Config(_) => 2,
            ReplErr(_) => 3,
        }
    }
}

#[derive(Debug)]
pub enum DriverErrKind {
    CouldNotReadSourceFile(String, String), // path, reason
    Config(ConfigErr),
    Parse(ParseErr),
    /// Strict mode only: input didn't start with an expression.
    NoExpression,
    /// Strict mode only: input was left after the expression.
    UnconsumedInput(Location, String),
    /// Strict mode only: an operator had no right operand.
    DroppedOperator(Location),
    ReplErr(String),
}

impl From<ParseErr> for DriverErr {
    fn from(err: ParseErr) -> Self {
        Self::new(DriverErrKind::Parse(err))
    }
}

impl From<ConfigErr> for DriverErr {
    fn from(err: ConfigErr) -> Self {
        Self::new(DriverErrKind::Config(err))
    }
}

impl fmt::Display for DriverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for DriverErrKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use DriverErrKind::*;
        let msg = match self {
            CouldNotReadSourceFile(path, reason) => {
                format!("Could not read source file {path}: {reason}")
            }
            Config(err) => format!("Configuration error: {err}"),
            Parse(err) => format!("Parse error: {err}"),
            NoExpression => "Expected an integer literal".to_owned(),
            UnconsumedInput(loc, rest) => {
                format!("Unexpected input @ {loc}: {rest:?}")
            }
            DroppedOperator(loc) => {
                format!("Operator has no right operand @ {loc}")
            }
            ReplErr(msg) => format!("REPL error: {msg}"),
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for DriverErr {}
