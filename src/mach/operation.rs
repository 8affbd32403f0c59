use super::Val;
use crate::error;
use crate::lang::token::{Logical, Operator};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Operator semantics for the postfix evaluator
///
/// Arithmetic works on numbers only. `+` also joins two texts and the
/// comparisons accept two texts. Comparisons and logic yield 1 or 0.

pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: Val, rhs: Val) -> Result<Val> {
        use Operator::*;
        match op {
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::arithmetic(lhs, rhs, |l, r| l - r),
            Multiply => Operation::arithmetic(lhs, rhs, |l, r| l * r),
            Divide => Operation::divide(lhs, rhs),
            Caret => Operation::arithmetic(lhs, rhs, f32::powf),
            Equal => Operation::compare(lhs, rhs, |o| o == std::cmp::Ordering::Equal),
            NotEqual => Operation::compare(lhs, rhs, |o| o != std::cmp::Ordering::Equal),
            Less => Operation::compare(lhs, rhs, |o| o == std::cmp::Ordering::Less),
            LessEqual => Operation::compare(lhs, rhs, |o| o != std::cmp::Ordering::Greater),
            Greater => Operation::compare(lhs, rhs, |o| o == std::cmp::Ordering::Greater),
            GreaterEqual => Operation::compare(lhs, rhs, |o| o != std::cmp::Ordering::Less),
            Negate => Err(error!(UnknownOperator; "NEGATE IS UNARY")),
        }
    }

    pub fn negate(val: Val) -> Result<Val> {
        match val {
            Val::Number(n) => Ok(Val::Number(-n)),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn not(val: Val) -> Result<Val> {
        match val {
            Val::Number(n) => Ok(Val::from(n == 0.0)),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn logical(op: Logical, lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = match (lhs, rhs) {
            (Val::Number(l), Val::Number(r)) => (l != 0.0, r != 0.0),
            _ => return Err(error!(TypeMismatch)),
        };
        match op {
            Logical::And => Ok(Val::from(l && r)),
            Logical::Or => Ok(Val::from(l || r)),
            Logical::Not => Err(error!(UnknownOperator; "NOT IS UNARY")),
        }
    }

    fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        match (lhs, rhs) {
            (Val::String(l), Val::String(r)) => Ok(Val::from(l.to_string() + &r)),
            (lhs, rhs) => Operation::arithmetic(lhs, rhs, |l, r| l + r),
        }
    }

    fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        if let Val::Number(r) = rhs {
            if r == 0.0 && !lhs.is_string() {
                return Err(error!(DivisionByZero));
            }
        }
        Operation::arithmetic(lhs, rhs, |l, r| l / r)
    }

    fn arithmetic<F: Fn(f32, f32) -> f32>(lhs: Val, rhs: Val, f: F) -> Result<Val> {
        match (lhs, rhs) {
            (Val::Number(l), Val::Number(r)) => {
                let n = f(l, r);
                if n.is_finite() {
                    Ok(Val::Number(n))
                } else if n.is_nan() {
                    Err(error!(IllegalFunctionCall))
                } else {
                    Err(error!(Overflow))
                }
            }
            _ => Err(error!(TypeMismatch)),
        }
    }

    fn compare<F: Fn(std::cmp::Ordering) -> bool>(lhs: Val, rhs: Val, f: F) -> Result<Val> {
        let ordering = match (lhs, rhs) {
            (Val::Number(l), Val::Number(r)) => match l.partial_cmp(&r) {
                Some(o) => o,
                None => return Err(error!(IllegalFunctionCall)),
            },
            (Val::String(l), Val::String(r)) => l.cmp(&r),
            _ => return Err(error!(TypeMismatch)),
        };
        Ok(Val::from(f(ordering)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let v = Operation::binary(Operator::Minus, Val::Number(5.0), Val::Number(7.0));
        assert_eq!(v.unwrap(), Val::Number(-2.0));
        let v = Operation::binary(Operator::Caret, Val::Number(2.0), Val::Number(10.0));
        assert_eq!(v.unwrap(), Val::Number(1024.0));
    }

    #[test]
    fn test_strings() {
        let v = Operation::binary(Operator::Plus, Val::from("AB"), Val::from("CD"));
        assert_eq!(v.unwrap(), Val::from("ABCD"));
        let v = Operation::binary(Operator::Less, Val::from("AB"), Val::from("B"));
        assert_eq!(v.unwrap(), Val::Number(1.0));
        let v = Operation::binary(Operator::Plus, Val::from("AB"), Val::Number(1.0));
        assert_eq!(v.unwrap_err().to_string(), "TYPE MISMATCH");
    }

    #[test]
    fn test_errors() {
        let v = Operation::binary(Operator::Divide, Val::Number(1.0), Val::Number(0.0));
        assert_eq!(v.unwrap_err().to_string(), "DIVISION BY ZERO");
        let v = Operation::binary(Operator::Multiply, Val::Number(1e30), Val::Number(1e30));
        assert_eq!(v.unwrap_err().to_string(), "OVERFLOW");
    }

    #[test]
    fn test_comparisons_yield_one_or_zero() {
        let v = Operation::binary(Operator::GreaterEqual, Val::Number(2.0), Val::Number(2.0));
        assert_eq!(v.unwrap(), Val::Number(1.0));
        let v = Operation::binary(Operator::NotEqual, Val::Number(2.0), Val::Number(2.0));
        assert_eq!(v.unwrap(), Val::Number(0.0));
        let v = Operation::logical(Logical::Or, Val::Number(0.0), Val::Number(-3.0));
        assert_eq!(v.unwrap(), Val::Number(1.0));
    }
}
