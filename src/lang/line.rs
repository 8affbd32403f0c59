use super::{Error, LineNumber, MaxValue};
use std::rc::Rc;

/// One line of source: an optional line number and its statements.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    body: Rc<str>,
    statements: Vec<Rc<str>>,
}

impl Line {
    pub fn new(s: &str) -> Result<Line, Error> {
        let s = s.trim_end_matches(&['\r', '\n'][..]).trim();
        let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
        let (number, body) = if digits == 0 {
            (None, s)
        } else {
            match s[..digits].parse::<u32>() {
                Ok(n) if n <= LineNumber::max_value() as u32 => {
                    (Some(n as u16), s[digits..].trim_start())
                }
                _ => return Err(error!(Overflow; "INVALID LINE NUMBER")),
            }
        };
        Ok(Line {
            number,
            body: body.into(),
            statements: split_statements(body),
        })
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn statements(&self) -> &[Rc<str>] {
        &self.statements
    }
}

impl Default for Line {
    fn default() -> Line {
        Line {
            number: None,
            body: "".into(),
            statements: vec![],
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.body),
            None => write!(f, "{}", self.body),
        }
    }
}

/// Splits on `:` outside of quotes. A remark swallows the rest of the line.
fn split_statements(body: &str) -> Vec<Rc<str>> {
    let mut statements = vec![];
    let mut start = 0;
    let mut quoted = false;
    for (index, ch) in body.char_indices() {
        if ch == '"' {
            quoted = !quoted;
        } else if ch == ':' && !quoted {
            let statement = body[start..index].trim();
            if is_remark(statement) {
                break;
            }
            if !statement.is_empty() {
                statements.push(statement.into());
            }
            start = index + 1;
        }
    }
    let rest = body[start..].trim();
    if !rest.is_empty() {
        statements.push(rest.into());
    }
    statements
}

fn starts_with_word(statement: &str, word: &str) -> bool {
    match statement.get(..word.len()) {
        Some(prefix) => prefix.eq_ignore_ascii_case(word),
        None => false,
    }
}

/// `REM` needs no separator; `REMARK` is a remark too.
pub fn is_remark(statement: &str) -> bool {
    starts_with_word(statement, "REM")
}

/// Returns the items of a `DATA` statement, or `None` for any other statement.
/// Quotes are removed from quoted items and unquoted items are trimmed.
pub fn data_items(statement: &str) -> Option<Vec<Rc<str>>> {
    if !starts_with_word(statement, "DATA") {
        return None;
    }
    let rest = &statement[4..];
    if let Some(ch) = rest.chars().next() {
        if ch.is_ascii_alphanumeric() || ch == '$' {
            return None;
        }
    }
    let mut items = vec![];
    let mut item = String::new();
    let mut quoted = false;
    for ch in rest.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                item.push(ch);
            }
            ',' if !quoted => {
                items.push(unquote(&item));
                item.clear();
            }
            _ => item.push(ch),
        }
    }
    if !item.trim().is_empty() || !items.is_empty() {
        items.push(unquote(&item));
    }
    Some(items)
}

fn unquote(item: &str) -> Rc<str> {
    let item = item.trim();
    if item.len() >= 2 && item.starts_with('"') && item.ends_with('"') {
        item[1..item.len() - 1].into()
    } else {
        item.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statements(s: &str) -> Vec<String> {
        Line::new(s)
            .unwrap()
            .statements()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_line_number() {
        let l = Line::new("  100 print x\r\n").unwrap();
        assert_eq!(l.number(), Some(100));
        assert_eq!(l.body(), "print x");
        assert_eq!(l.to_string(), "100 print x");
        let l = Line::new("print x").unwrap();
        assert!(l.is_direct());
        let l = Line::new("20").unwrap();
        assert!(l.is_empty());
        assert!(Line::new("65530 END").is_err());
    }

    #[test]
    fn test_split_respects_quotes() {
        assert_eq!(
            statements(r#"10 PRINT "A:B": X=1 :: END"#),
            vec![r#"PRINT "A:B""#, "X=1", "END"]
        );
    }

    #[test]
    fn test_remark_takes_rest_of_line() {
        assert_eq!(statements("X=1:REM a: b"), vec!["X=1", "REM a: b"]);
        assert_eq!(statements("rem: x"), vec!["rem: x"]);
    }

    #[test]
    fn test_data_items() {
        let items = data_items(r#"DATA 1, "A,B" ,HELLO WORLD"#).unwrap();
        let items: Vec<&str> = items.iter().map(|s| &**s).collect();
        assert_eq!(items, vec!["1", "A,B", "HELLO WORLD"]);
        assert_eq!(data_items("DATAX=1"), None);
        assert_eq!(data_items("PRINT 1"), None);
    }
}
