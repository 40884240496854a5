pub use chars::{digit_value, is_insignificant_whitespace};
pub use location::Location;
pub use stack::Stack;

mod chars;
mod location;
mod stack;
