use super::{token::*, Error};

type Result<T> = std::result::Result<T, Error>;

/// Converts an infix expression into postfix order.
///
/// The output is structurally valid: every operator and function finds
/// its operands, so evaluation never needs to look at precedence.
/// `Comma` tokens separating function arguments are passed through and
/// ignored by the evaluator.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>> {
    Parser::default().parse(tokens)
}

/// Binding power, higher binds tighter.
fn precedence(token: &Token) -> Option<u8> {
    use Operator::*;
    match token {
        Token::Logical(Logical::And) | Token::Logical(Logical::Or) => Some(1),
        Token::Logical(Logical::Not) => Some(2),
        Token::Operator(op) => Some(match op {
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => 3,
            Plus | Minus => 4,
            Multiply | Divide => 5,
            Negate => 6,
            Caret => 7,
        }),
        _ => None,
    }
}

fn is_right_associative(token: &Token) -> bool {
    matches!(
        token,
        Token::Operator(Operator::Caret)
            | Token::Operator(Operator::Negate)
            | Token::Logical(Logical::Not)
    )
}

struct Group {
    function: Option<Function>,
    commas: usize,
    empty: bool,
}

struct Parser {
    output: Vec<Token>,
    stack: Vec<Token>,
    groups: Vec<Group>,
    expect_operand: bool,
    pending_function: Option<Function>,
}

impl Default for Parser {
    fn default() -> Parser {
        Parser {
            output: vec![],
            stack: vec![],
            groups: vec![],
            expect_operand: true,
            pending_function: None,
        }
    }
}

impl Parser {
    fn parse(mut self, tokens: &[Token]) -> Result<Vec<Token>> {
        for token in tokens {
            if let Some(function) = self.pending_function.take() {
                if *token != Token::LParen {
                    return Err(error!(SyntaxError;
                        &format!("EXPECTED LEFT PARENTHESIS AFTER {}", function)));
                }
                self.open_group(Some(function))?;
                continue;
            }
            match token {
                Token::Number(_) | Token::Text(_) | Token::Ident(_) | Token::Word(_) => {
                    self.operand()?;
                    self.output.push(token.clone());
                }
                Token::Function(function) => {
                    self.operand()?;
                    self.expect_operand = true;
                    self.stack.push(token.clone());
                    self.pending_function = Some(*function);
                }
                Token::LParen => self.open_group(None)?,
                Token::RParen => self.close_group()?,
                Token::Comma => self.comma()?,
                Token::Operator(op) => self.operator(*op)?,
                Token::Logical(Logical::Not) => {
                    if !self.expect_operand {
                        return Err(error!(SyntaxError; "UNEXPECTED NOT"));
                    }
                    self.stack.push(token.clone());
                }
                Token::Logical(_) => {
                    if self.expect_operand {
                        return Err(error!(MissingOperand));
                    }
                    self.pop_operators(token);
                    self.stack.push(token.clone());
                    self.expect_operand = true;
                }
                Token::Semicolon | Token::Colon => {
                    return Err(error!(SyntaxError; &format!("UNEXPECTED {}", token)));
                }
            }
        }
        if let Some(function) = self.pending_function {
            return Err(error!(SyntaxError;
                &format!("EXPECTED LEFT PARENTHESIS AFTER {}", function)));
        }
        if self.expect_operand && !tokens.is_empty() {
            return Err(error!(MissingOperand));
        }
        while let Some(token) = self.stack.pop() {
            if token == Token::LParen {
                return Err(error!(SyntaxError; "MISMATCHED PARENTHESES"));
            }
            self.output.push(token);
        }
        Ok(self.output)
    }

    /// Bookkeeping for anything that starts an operand.
    fn operand(&mut self) -> Result<()> {
        if !self.expect_operand {
            return Err(error!(SyntaxError; "MISSING OPERATOR"));
        }
        self.expect_operand = false;
        if let Some(group) = self.groups.last_mut() {
            group.empty = false;
        }
        Ok(())
    }

    fn operator(&mut self, op: Operator) -> Result<()> {
        if self.expect_operand {
            return match op {
                Operator::Minus => {
                    self.stack.push(Token::Operator(Operator::Negate));
                    Ok(())
                }
                Operator::Plus => Ok(()),
                _ => Err(error!(MissingOperand)),
            };
        }
        let token = Token::Operator(op);
        self.pop_operators(&token);
        self.stack.push(token);
        self.expect_operand = true;
        Ok(())
    }

    /// Moves stacked operators that bind at least as tightly as `incoming`
    /// to the output. Parentheses, commas and functions are barriers.
    fn pop_operators(&mut self, incoming: &Token) {
        let incoming_prec = precedence(incoming).unwrap_or(0);
        while let Some(top) = self.stack.last() {
            let top_prec = match precedence(top) {
                Some(p) => p,
                None => break,
            };
            if top_prec > incoming_prec
                || (top_prec == incoming_prec && !is_right_associative(incoming))
            {
                if let Some(t) = self.stack.pop() {
                    self.output.push(t);
                }
            } else {
                break;
            }
        }
    }

    fn open_group(&mut self, function: Option<Function>) -> Result<()> {
        if function.is_none() {
            self.operand()?;
            self.expect_operand = true;
        }
        self.stack.push(Token::LParen);
        self.groups.push(Group {
            function,
            commas: 0,
            empty: true,
        });
        Ok(())
    }

    fn close_group(&mut self) -> Result<()> {
        let group = match self.groups.pop() {
            Some(group) => group,
            None => return Err(error!(SyntaxError; "MISMATCHED PARENTHESES")),
        };
        if self.expect_operand && !(group.empty && group.function.is_some()) {
            return Err(error!(MissingOperand));
        }
        loop {
            match self.stack.pop() {
                Some(Token::LParen) => break,
                Some(t) => self.output.push(t),
                None => return Err(error!(SyntaxError; "MISMATCHED PARENTHESES")),
            }
        }
        match group.function {
            Some(function) => {
                let args = if group.empty { 0 } else { group.commas + 1 };
                if args != function.arity() {
                    return Err(error!(SyntaxError;
                        &format!("{} TAKES {} ARGUMENTS", function, function.arity())));
                }
                if let Some(t) = self.stack.pop() {
                    self.output.push(t);
                }
            }
            None => {
                if group.commas > 0 {
                    return Err(error!(SyntaxError; "UNEXPECTED COMMA"));
                }
            }
        }
        self.expect_operand = false;
        Ok(())
    }

    fn comma(&mut self) -> Result<()> {
        if self.groups.is_empty() {
            return Err(error!(SyntaxError; "UNEXPECTED COMMA"));
        }
        if self.expect_operand {
            return Err(error!(MissingOperand));
        }
        while let Some(top) = self.stack.last() {
            if *top == Token::LParen {
                break;
            }
            if let Some(t) = self.stack.pop() {
                self.output.push(t);
            }
        }
        self.stack.push(Token::Comma);
        if let Some(group) = self.groups.last_mut() {
            group.commas += 1;
        }
        self.expect_operand = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::lex::*;
    use super::*;
    use crate::lang::ErrorKind;

    fn postfix(s: &str) -> String {
        let tokens = lex(s).unwrap();
        match to_postfix(&tokens) {
            Ok(v) => v
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<String>>()
                .join(" "),
            Err(e) => panic!("{} : {:?}", s, e),
        }
    }

    fn parse_error(s: &str) -> Error {
        let tokens = lex(s).unwrap();
        to_postfix(&tokens).unwrap_err()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(postfix("2 + 3 * 4"), "2 3 4 * +");
        assert_eq!(postfix("2 * 3 + 4"), "2 3 * 4 +");
        assert_eq!(postfix("1 - 2 - 3"), "1 2 - 3 -");
        assert_eq!(postfix("a + 1 < b * 2"), "A 1 + B 2 * <");
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(postfix("2 ^ 3 ^ 2"), "2 3 2 ^ ^");
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(postfix("(2 + 3) * 4"), "2 3 + 4 *");
        assert_eq!(postfix("((1))"), "1");
    }

    #[test]
    fn test_unary_minus_from_position() {
        assert_eq!(postfix("-2 ^ 2"), "2 2 ^ -");
        assert_eq!(postfix("2 * -3"), "2 3 - *");
        assert_eq!(postfix("1 - -1"), "1 1 - -");
        assert_eq!(postfix("+5"), "5");
    }

    #[test]
    fn test_functions() {
        assert_eq!(postfix("LEFT$(\"HELLO\", 3)"), "\"HELLO\" 3 , LEFT$");
        assert_eq!(postfix("MID$(A$, 1 + 1, 2)"), "A$ 1 1 + , 2 , MID$");
        assert_eq!(postfix("SIN(X) * 2"), "X SIN 2 *");
        assert_eq!(postfix("ABS(-(1))"), "1 - ABS");
    }

    #[test]
    fn test_logical_below_comparison() {
        assert_eq!(postfix("A = 1 AND B = 2"), "A 1 = B 2 = AND");
        assert_eq!(postfix("A AND B OR C"), "A B AND C OR");
        assert_eq!(postfix("NOT A = B"), "A B = NOT");
        assert_eq!(postfix("NOT A AND B"), "A NOT B AND");
    }

    #[test]
    fn test_empty() {
        assert_eq!(postfix(""), "");
    }

    #[test]
    fn test_mismatched_parentheses() {
        let e = parse_error("(1 + 2");
        assert_eq!(e.kind(), ErrorKind::Parse);
        assert_eq!(e.to_string(), "SYNTAX ERROR; MISMATCHED PARENTHESES");
        let e = parse_error("1 + 2)");
        assert_eq!(e.to_string(), "SYNTAX ERROR; MISMATCHED PARENTHESES");
    }

    #[test]
    fn test_malformed() {
        assert_eq!(parse_error("1 2").to_string(), "SYNTAX ERROR; MISSING OPERATOR");
        assert_eq!(parse_error("1 +").to_string(), "MISSING OPERAND");
        assert_eq!(parse_error("* 1").to_string(), "MISSING OPERAND");
        assert_eq!(parse_error("()").to_string(), "MISSING OPERAND");
        assert_eq!(
            parse_error("LEFT$(\"A\")").to_string(),
            "SYNTAX ERROR; LEFT$ TAKES 2 ARGUMENTS"
        );
        assert_eq!(
            parse_error("SIN 1").to_string(),
            "SYNTAX ERROR; EXPECTED LEFT PARENTHESIS AFTER SIN"
        );
        assert_eq!(parse_error("1, 2").to_string(), "SYNTAX ERROR; UNEXPECTED COMMA");
    }
}
