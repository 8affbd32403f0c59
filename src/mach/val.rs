use crate::error;
use crate::lang::Error;
use regex::Regex;
use std::convert::TryFrom;
use std::rc::Rc;

thread_local!(
    static NUMBER_PREFIX: Regex =
        Regex::new(r"\A\s*[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?").expect("invalid number prefix");
);

/// A scalar value: single precision number or text.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f32),
    String(Rc<str>),
}

impl Val {
    /// Conversion used by `INPUT` and `READ`: the longest numeric prefix
    /// of the text. Zero when there is none or it is out of range.
    pub fn parse_number(s: &str) -> f32 {
        match Val::number_prefix(s) {
            Some(n) if n.is_finite() => n,
            _ => 0.0,
        }
    }

    /// The longest numeric prefix as parsed. May be infinite.
    pub fn number_prefix(s: &str) -> Option<f32> {
        NUMBER_PREFIX.with(|re| {
            re.find(s)
                .and_then(|m| m.as_str().trim().parse::<f32>().ok())
        })
    }

    /// Numbers are true when nonzero. Text is converted as `VAL` would.
    pub fn is_true(&self) -> bool {
        match self {
            Val::Number(n) => *n != 0.0,
            Val::String(s) => Val::parse_number(s) != 0.0,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Val::String(_))
    }
}

impl Default for Val {
    fn default() -> Val {
        Val::Number(0.0)
    }
}

impl From<f32> for Val {
    fn from(n: f32) -> Val {
        Val::Number(n)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::String(s.into())
    }
}

impl From<String> for Val {
    fn from(s: String) -> Val {
        Val::String(s.into())
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Val {
        Val::Number(if b { 1.0 } else { 0.0 })
    }
}

impl TryFrom<Val> for f32 {
    type Error = Error;
    fn try_from(val: Val) -> Result<Self, Self::Error> {
        match val {
            Val::Number(n) => Ok(n),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }
}

impl TryFrom<Val> for Rc<str> {
    type Error = Error;
    fn try_from(val: Val) -> Result<Self, Self::Error> {
        match val {
            Val::String(s) => Ok(s),
            Val::Number(_) => Err(error!(TypeMismatch)),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::String(s) => write!(f, "{}", s),
            Val::Number(n) => {
                if *n == 0.0 {
                    write!(f, "0")
                } else if n.abs() >= 1e16 || n.abs() < 1e-8 {
                    write!(f, "{:E}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}
