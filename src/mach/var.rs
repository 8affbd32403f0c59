use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Names ending in `$` hold text, all others hold numbers.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn is_string(var_name: &str) -> bool {
        var_name.ends_with('$')
    }

    /// Unbound variables are never an error; they read as empty text
    /// or zero depending on the name.
    pub fn fetch(&self, var_name: &str) -> Val {
        match self.vars.get(var_name) {
            Some(val) => val.clone(),
            None => {
                if Var::is_string(var_name) {
                    Val::String("".into())
                } else {
                    Val::Number(0.0)
                }
            }
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: Val) -> Result<()> {
        if Var::is_string(var_name) != value.is_string() {
            return Err(error!(TypeMismatch; var_name));
        }
        if self.vars.len() > u16::max_value() as usize && !self.vars.contains_key(var_name) {
            return Err(error!(TooManyVariables));
        }
        self.vars.insert(var_name.clone(), value);
        Ok(())
    }
}
