//! Driver configuration and operator definition files.
//!
//! An operator definition file has one operator per line:
//!
//! ```text
//! # precedence associativity lexeme [lexeme ...]
//! 0 right =
//! 1 left  + plus
//! 2 left  * /
//! 3 right ^ **
//! ```
//!
//! Associativity may be given as `left`/`ltr`/`l` or `right`/`rtl`/`r`.
//! Lines starting with `#` and blank lines are ignored.
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::operators::{
    Associativity, Operator, OperatorErr, OperatorTable, DEFAULT_OPERATORS,
};
use crate::parser::{ParseMode, DEFAULT_MAX_DEPTH};

static OPERATOR_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<precedence>\d+)\s+(?P<assoc>[A-Za-z]+)\s+(?P<lexemes>\S.*)$")
        .expect("operator line regex should compile")
});

pub const HISTORY_FILE_NAME: &str = ".climb_history";

/// Width of the signed integer type literals are parsed into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
    I128,
}

impl IntWidth {
    pub fn from_bits(bits: u32) -> Result<Self, ConfigErr> {
        let width = match bits {
            8 => Self::I8,
            16 => Self::I16,
            32 => Self::I32,
            64 => Self::I64,
            128 => Self::I128,
            _ => return Err(ConfigErr::new(ConfigErrKind::InvalidIntWidth(bits), 0)),
        };
        Ok(width)
    }

    pub fn bits(&self) -> u32 {
        match self {
            Self::I8 => 8,
            Self::I16 => 16,
            Self::I32 => 32,
            Self::I64 => 64,
            Self::I128 => 128,
        }
    }
}

/// Effective settings for the driver and REPL.
#[derive(Clone, Debug)]
pub struct Config {
    pub debug: bool,
    pub mode: ParseMode,
    /// Treat unconsumed trailing input and empty input as errors.
    pub strict: bool,
    pub int_width: IntWidth,
    /// Maximum operator nesting depth; 0 means unbounded.
    pub max_depth: usize,
    pub history_path: Option<PathBuf>,
    pub operators: OperatorTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            mode: ParseMode::Climbing,
            strict: false,
            int_width: IntWidth::I32,
            max_depth: DEFAULT_MAX_DEPTH,
            history_path: None,
            operators: (*DEFAULT_OPERATORS).clone(),
        }
    }
}

/// Default REPL history location: `~/.climb_history`.
pub fn default_history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME))
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

// Operator definitions ------------------------------------------------

pub fn load_operators(path: &Path) -> Result<OperatorTable, ConfigErr> {
    match fs::read_to_string(path) {
        Ok(text) => parse_operators(text.as_str()),
        Err(err) => Err(ConfigErr::new(
            ConfigErrKind::CouldNotReadFile(
                path.to_string_lossy().into_owned(),
                err.to_string(),
            ),
            0,
        )),
    }
}

pub fn parse_operators(text: &str) -> Result<OperatorTable, ConfigErr> {
    let mut table = OperatorTable::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(op) = parse_operator_line(line, index + 1)? {
            table.add_operator(op);
        }
    }
    Ok(table)
}

fn parse_operator_line(
    line: &str,
    line_no: usize,
) -> Result<Option<Operator>, ConfigErr> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let err = |kind| ConfigErr::new(kind, line_no);

    let captures = match OPERATOR_LINE.captures(line) {
        Some(captures) => captures,
        None => return Err(err(ConfigErrKind::InvalidLine(line.to_owned()))),
    };

    let precedence = &captures["precedence"];
    let precedence = precedence
        .parse::<u32>()
        .map_err(|_| err(ConfigErrKind::InvalidPrecedence(precedence.to_owned())))?;

    let associativity = Associativity::from_name(&captures["assoc"])
        .map_err(|msg| err(ConfigErrKind::InvalidAssociativity(msg)))?;

    let lexemes = captures["lexemes"].split_whitespace();
    let op = Operator::new(precedence, associativity, lexemes)
        .map_err(|op_err| err(ConfigErrKind::InvalidOperator(op_err)))?;

    Ok(Some(op))
}

// Errors --------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigErr {
    pub kind: ConfigErrKind,
    /// 1-based line in an operator definition file; 0 when the error
    /// isn't tied to a line.
    pub line: usize,
}

impl ConfigErr {
    pub fn new(kind: ConfigErrKind, line: usize) -> Self {
        Self { kind, line }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigErrKind {
    CouldNotReadFile(String, String), // path, reason
    InvalidLine(String),
    InvalidPrecedence(String),
    InvalidAssociativity(String),
    InvalidIntWidth(u32),
    InvalidOperator(OperatorErr),
}

impl fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "{} (line {})", self.kind, self.line)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl fmt::Display for ConfigErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ConfigErrKind::*;
        let msg = match self {
            CouldNotReadFile(path, reason) => {
                format!("Could not read operator file {path}: {reason}")
            }
            InvalidLine(line) => format!(
                concat!(
                    "Invalid operator definition: {}\n",
                    "Expected: <precedence> <associativity> <lexeme> [<lexeme> ...]"
                ),
                line
            ),
            InvalidPrecedence(text) => format!("Invalid precedence: {text}"),
            InvalidAssociativity(msg) => msg.clone(),
            InvalidIntWidth(bits) => format!(
                "Unsupported integer width: {bits} (expected 8, 16, 32, 64, 128)"
            ),
            InvalidOperator(err) => err.to_string(),
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for ConfigErr {}
