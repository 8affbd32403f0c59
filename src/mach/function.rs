use super::Val;
use crate::error;
use crate::lang::token;
use crate::lang::Error;
use rand::Rng;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Builtin functions
///
/// Arguments arrive in call order. Any failure inside a builtin is
/// reported uniformly as `ILLEGAL FUNCTION CALL` naming the function.

pub struct Function {}

impl Function {
    pub fn call(func: token::Function, args: Vec<Val>, column: usize) -> Result<Val> {
        if args.len() != func.arity() {
            return Err(error!(IllegalFunctionCall; &func.to_string()));
        }
        Function::dispatch(func, args, column).map_err(|_| error!(IllegalFunctionCall; &func.to_string()))
    }

    fn dispatch(func: token::Function, args: Vec<Val>, column: usize) -> Result<Val> {
        use token::Function as F;
        let mut args = args.into_iter();
        let mut arg = || args.next().ok_or_else(|| error!(InternalError));
        match func {
            F::Abs => Function::math(arg()?, f32::abs),
            F::Atn => Function::math(arg()?, f32::atan),
            F::Cos => Function::math(arg()?, f32::cos),
            F::Exp => Function::math(arg()?, f32::exp),
            F::Int => Function::math(arg()?, f32::floor),
            F::Log => Function::math(arg()?, f32::ln),
            F::Sgn => Function::math(arg()?, Function::sgn),
            F::Sin => Function::math(arg()?, f32::sin),
            F::Sqr => Function::math(arg()?, f32::sqrt),
            F::Tan => Function::math(arg()?, f32::tan),
            F::Rnd => {
                arg()?;
                Ok(Val::Number(rand::thread_rng().gen::<f32>()))
            }
            F::Pos => {
                arg()?;
                Ok(Val::Number(column as f32))
            }
            F::Spc => {
                let n = Function::count(arg()?)?;
                Ok(Val::from(" ".repeat(n)))
            }
            F::Tab => {
                let n = Function::count(arg()?)?;
                Ok(Val::from(" ".repeat(n.saturating_sub(column))))
            }
            F::Asc => {
                let s = Rc::<str>::try_from(arg()?)?;
                match s.chars().next() {
                    Some(ch) => Ok(Val::Number(ch as u32 as f32)),
                    None => Err(error!(IllegalFunctionCall)),
                }
            }
            F::Chr => {
                let n = Function::count(arg()?)?;
                match std::char::from_u32(n as u32) {
                    Some(ch) => Ok(Val::from(ch.to_string())),
                    None => Err(error!(IllegalFunctionCall)),
                }
            }
            F::Len => {
                let s = Rc::<str>::try_from(arg()?)?;
                Ok(Val::Number(s.chars().count() as f32))
            }
            F::Val => {
                let s = Rc::<str>::try_from(arg()?)?;
                Function::math(Val::Number(Val::number_prefix(&s).unwrap_or(0.0)), |n| n)
            }
            F::Str => {
                let n = f32::try_from(arg()?)?;
                Ok(Val::from(Val::Number(n).to_string()))
            }
            F::Ucase => {
                let s = Rc::<str>::try_from(arg()?)?;
                Ok(Val::from(s.to_uppercase()))
            }
            F::Lcase => {
                let s = Rc::<str>::try_from(arg()?)?;
                Ok(Val::from(s.to_lowercase()))
            }
            F::Left => {
                let s = Rc::<str>::try_from(arg()?)?;
                let n = Function::count(arg()?)?;
                Ok(Val::from(s.chars().take(n).collect::<String>()))
            }
            F::Right => {
                let s = Rc::<str>::try_from(arg()?)?;
                let n = Function::count(arg()?)?;
                let len = s.chars().count();
                Ok(Val::from(s.chars().skip(len.saturating_sub(n)).collect::<String>()))
            }
            F::Mid => {
                let s = Rc::<str>::try_from(arg()?)?;
                let start = Function::count(arg()?)?;
                let n = Function::count(arg()?)?;
                if start < 1 {
                    return Err(error!(IllegalFunctionCall));
                }
                Ok(Val::from(s.chars().skip(start - 1).take(n).collect::<String>()))
            }
        }
    }

    fn math<F: Fn(f32) -> f32>(val: Val, f: F) -> Result<Val> {
        let n = f(f32::try_from(val)?);
        if n.is_finite() {
            Ok(Val::Number(n))
        } else {
            Err(error!(IllegalFunctionCall))
        }
    }

    fn sgn(n: f32) -> f32 {
        if n > 0.0 {
            1.0
        } else if n < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    /// A non-negative whole number argument, truncated.
    fn count(val: Val) -> Result<usize> {
        let n = f32::try_from(val)?.trunc();
        if n < 0.0 || n > u16::max_value() as f32 {
            return Err(error!(IllegalFunctionCall));
        }
        Ok(n as usize)
    }
}
