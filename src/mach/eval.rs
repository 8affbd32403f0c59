use super::{Function, Operation, Stack, Val, Var};
use crate::error;
use crate::lang::token::{Logical, Operator, Token};
use crate::lang::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// Evaluates a postfix sequence from `to_postfix`.
///
/// `column` is the print position reported by `POS` and used by `TAB`.
/// An empty sequence evaluates to zero.
pub fn evaluate(postfix: &[Token], var: &Var, column: usize) -> Result<Val> {
    let mut stack: Stack<Val> =
        Stack::new(ErrorCode::FormulaTooComplex, "OPERAND STACK FULL");
    for token in postfix {
        match token {
            Token::Number(n) => stack.push(Val::Number(*n))?,
            Token::Text(s) => stack.push(Val::String(s.clone()))?,
            Token::Ident(name) => stack.push(var.fetch(name))?,
            Token::Comma => {}
            Token::Operator(Operator::Negate) => {
                let val = stack.pop()?;
                stack.push(Operation::negate(val)?)?;
            }
            Token::Operator(op) => {
                let (lhs, rhs) = stack.pop_2()?;
                stack.push(Operation::binary(*op, lhs, rhs)?)?;
            }
            Token::Logical(Logical::Not) => {
                let val = stack.pop()?;
                stack.push(Operation::not(val)?)?;
            }
            Token::Logical(op) => {
                let (lhs, rhs) = stack.pop_2()?;
                stack.push(Operation::logical(*op, lhs, rhs)?)?;
            }
            Token::Function(func) => {
                let args = stack.pop_n(func.arity())?;
                stack.push(Function::call(*func, args, column)?)?;
            }
            Token::Word(_) | Token::LParen | Token::RParen | Token::Semicolon | Token::Colon => {
                return Err(error!(UnknownOperator; &token.to_string()));
            }
        }
    }
    match stack.pop() {
        Ok(val) => Ok(val),
        Err(_) => Ok(Val::default()),
    }
}
