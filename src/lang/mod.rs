/*!
# Rust Language Module

This Rust module provides lexical analysis of BASIC statements and
conversion of infix expressions to postfix.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use lex::lex;
pub use line::{data_items, is_remark, Line};
pub use parse::to_postfix;

/// `None` is a direct statement.
pub type LineNumber = Option<u16>;

pub trait MaxValue<T> {
    fn max_value() -> T;
}

impl MaxValue<u16> for LineNumber {
    fn max_value() -> u16 {
        65529
    }
}
