// Common utilities shared between internal and user-facing macros
//
// - parse_utils: list and `Key => Value` parsing helpers

mod parse_utils;

pub use parse_utils::*;
