use super::{token::*, Error};
use regex::{Captures, Regex};

type Result<T> = std::result::Result<T, Error>;

/// Token rules in priority order. Alternation is leftmost-first so an
/// earlier rule wins over a later one at the same position.
const RULES: &str = concat!(
    r"\A(?:",
    r"(?P<number>\d+(?:\.\d*)?|\.\d+)",
    r#"|"(?P<text>[^"]*)""#,
    r"|(?P<logical>(?i:AND|OR|NOT)\b)",
    r"|(?P<name>[A-Za-z][A-Za-z0-9]*\$?)",
    r"|(?P<operator><=|>=|<>|[-+*/^=<>])",
    r"|(?P<punct>[(),;:])",
    r"|(?P<skip>[ \t]+)",
    r"|(?P<unknown>.)",
    r")"
);

thread_local!(
    static TOKEN_RULES: Regex = Regex::new(RULES).expect("invalid token rules");
);

/// Converts one statement of source text into tokens.
pub fn lex(s: &str) -> Result<Vec<Token>> {
    TOKEN_RULES.with(|rules| BasicLexer { rules, s, pos: 0 }.collect())
}

struct BasicLexer<'a> {
    rules: &'a Regex,
    s: &'a str,
    pos: usize,
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = &self.s[self.pos..];
            if rest.is_empty() {
                return None;
            }
            let caps = match self.rules.captures(rest) {
                Some(caps) if !caps[0].is_empty() => caps,
                _ => {
                    let column = self.pos + 1;
                    self.pos = self.s.len();
                    return Some(Err(
                        error!(TokenizerStuck; &format!("AT COLUMN {}", column)),
                    ));
                }
            };
            self.pos += caps[0].len();
            if caps.name("skip").is_some() {
                continue;
            }
            return Some(BasicLexer::token(&caps));
        }
    }
}

impl<'a> BasicLexer<'a> {
    fn token(caps: &Captures) -> Result<Token> {
        if let Some(m) = caps.name("number") {
            return match m.as_str().parse::<f32>() {
                Ok(n) if !n.is_finite() => Err(error!(Overflow; m.as_str())),
                Ok(n) => Ok(Token::Number(n)),
                Err(_) => Err(error!(SyntaxError; "INVALID NUMBER")),
            };
        }
        if let Some(m) = caps.name("text") {
            return Ok(Token::Text(m.as_str().into()));
        }
        if let Some(m) = caps.name("logical") {
            return Ok(Token::Logical(match m.as_str().to_ascii_uppercase().as_str() {
                "AND" => Logical::And,
                "OR" => Logical::Or,
                _ => Logical::Not,
            }));
        }
        if let Some(m) = caps.name("name") {
            let upper = m.as_str().to_ascii_uppercase();
            return Ok(match Token::from_string(&upper) {
                Some(token) => token,
                None => Token::Ident(upper.into()),
            });
        }
        if let Some(m) = caps.name("operator") {
            if let Some(op) = Operator::from_symbol(m.as_str()) {
                return Ok(Token::Operator(op));
            }
        }
        if let Some(m) = caps.name("punct") {
            return Ok(match m.as_str() {
                "(" => Token::LParen,
                ")" => Token::RParen,
                "," => Token::Comma,
                ";" => Token::Semicolon,
                _ => Token::Colon,
            });
        }
        let ch = caps.name("unknown").map_or("", |m| m.as_str());
        Err(error!(UnexpectedCharacter; &format!("'{}'", ch)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorKind;

    #[test]
    fn test_numbers_before_names() {
        let tokens = lex("12.5 A1 .5").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(12.5),
                Token::Ident("A1".into()),
                Token::Number(0.5)
            ]
        );
    }

    #[test]
    fn test_multi_char_operators_first() {
        let tokens = lex("<=>=<><").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Operator(Operator::LessEqual),
                Token::Operator(Operator::GreaterEqual),
                Token::Operator(Operator::NotEqual),
                Token::Operator(Operator::Less),
            ]
        );
    }

    #[test]
    fn test_logical_needs_word_boundary() {
        let tokens = lex("a and notes").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("A".into()),
                Token::Logical(Logical::And),
                Token::Ident("NOTES".into()),
            ]
        );
    }

    #[test]
    fn test_unknown_character_is_reported() {
        let e = lex("A @ B").unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Lex);
        assert_eq!(e.to_string(), "UNEXPECTED CHARACTER; '@'");
    }

    #[test]
    fn test_stuck() {
        let e = lex("A\nB").unwrap_err();
        assert_eq!(e.to_string(), "TOKENIZER STUCK; AT COLUMN 2");
    }

    #[test]
    fn test_literal_out_of_range() {
        let digits = "9".repeat(40);
        let e = lex(&format!("A={}", digits)).unwrap_err();
        assert_eq!(e.to_string(), format!("OVERFLOW; {}", digits));
        assert_eq!(e.kind(), ErrorKind::Eval);
    }
}
