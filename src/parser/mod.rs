pub use cursor::Cursor;
pub use parser::{ParseMode, Parsed, Parser, DEFAULT_MAX_DEPTH};
pub use result::{ParseErr, ParseErrKind, ParseResult};

mod cursor;
mod parser;
mod result;
