/*!
## Rust Machine Module

This Rust module evaluates postfix expressions and runs BASIC programs
one statement at a time.

*/

mod eval;
mod exec;
mod function;
mod listing;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;
mod var;

pub use eval::evaluate;
pub use function::Function;
pub use listing::Listing;
pub use listing::MAX_LINE_LEN;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Address;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
