use super::runtime::{Address, LoopFrame, State};
use super::{evaluate, Event, Runtime, Val, Var};
use crate::error;
use crate::lang::token::{Operator, Token, Word};
use crate::lang::{to_postfix, Error, LineNumber, MaxValue};
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Statement dispatcher
///
/// One statement at a time, classified by its first token. The counter
/// already points past the statement, so control flow overwrites it.
impl Runtime {
    pub(super) fn dispatch(&mut self, tokens: &[Token]) -> Result<()> {
        let (first, rest) = match tokens.split_first() {
            Some(split) => split,
            None => return Ok(()),
        };
        match first {
            Token::Word(word) => self.word(*word, rest),
            Token::Ident(name) if rest.first() == Some(&Token::Operator(Operator::Equal)) => {
                self.assign(name, &rest[1..])
            }
            Token::Operator(_) | Token::Logical(_) => self.expression(tokens).map(|_| ()),
            token if token.starts_operand() => self.expression(tokens).map(|_| ()),
            token => Err(error!(UnknownStatement; &token.to_string())),
        }
    }

    fn word(&mut self, word: Word, args: &[Token]) -> Result<()> {
        use Word::*;
        match word {
            Data | Rem => Ok(()),
            End => self.r#end(args),
            For => self.r#for(args),
            Gosub => self.r#gosub(args),
            Goto => self.r#goto(args),
            If => self.r#if(args),
            Input => self.r#input(args),
            Let => self.r#let(args),
            List => self.r#list(args),
            New => self.r#new(args),
            Next => self.r#next(args),
            Print => self.r#print(args),
            Read => self.r#read(args),
            Restore => self.r#restore(args),
            Return => self.r#return(args),
            Run => self.r#run(args),
            Stop => self.r#end(args),
            Troff => self.r#troff(args),
            Tron => self.r#tron(args),
            Step | Then | To => Err(error!(UnknownStatement; &word.to_string())),
        }
    }

    pub(super) fn expression(&self, tokens: &[Token]) -> Result<Val> {
        self.expression_at(tokens, self.column)
    }

    fn expression_at(&self, tokens: &[Token], column: usize) -> Result<Val> {
        if tokens.is_empty() {
            return Err(error!(MissingOperand));
        }
        let postfix = to_postfix(tokens)?;
        evaluate(&postfix, &self.var, column)
    }

    fn number(&self, tokens: &[Token]) -> Result<f32> {
        f32::try_from(self.expression(tokens)?)
    }

    fn assign(&mut self, name: &Rc<str>, tokens: &[Token]) -> Result<()> {
        let value = self.expression(tokens)?;
        self.var.store(name, value)
    }

    fn find_line(&mut self, word: Word, number: u16) -> Result<usize> {
        self.refresh();
        match self.program.find(number) {
            Some(index) => Ok(index),
            None => Err(error!(UndefinedLine; &format!("{} {}", word, number))),
        }
    }

    fn skip_line(&mut self) {
        self.pc = match self.pc {
            Address::Line(line, _) => Address::Line(line + 1, 0),
            Address::Direct(_) => Address::Direct(self.direct.statements().len()),
        };
    }

    fn r#end(&mut self, args: &[Token]) -> Result<()> {
        no_args(args)?;
        self.state = State::Stopped;
        Ok(())
    }

    fn r#for(&mut self, args: &[Token]) -> Result<()> {
        let (name, rest) = match args {
            [Token::Ident(name), Token::Operator(Operator::Equal), rest @ ..] => (name, rest),
            _ => return Err(error!(SyntaxError; "EXPECTED VARIABLE =")),
        };
        if Var::is_string(name) {
            return Err(error!(TypeMismatch; name));
        }
        let (start, rest) = match split_at_word(rest, Word::To) {
            Some(split) => split,
            None => return Err(error!(SyntaxError; "EXPECTED TO")),
        };
        let (limit, step) = match split_at_word(rest, Word::Step) {
            Some((limit, step)) => (limit, Some(step)),
            None => (rest, None),
        };
        let start = self.number(start)?;
        let limit = self.number(limit)?;
        let step = match step {
            Some(step) => self.number(step)?,
            None => 1.0,
        };
        self.var.store(name, Val::Number(start))?;
        self.loops.push(LoopFrame {
            var: name.clone(),
            limit,
            step,
            resume: self.pc,
        })
    }

    fn r#gosub(&mut self, args: &[Token]) -> Result<()> {
        let number = line_target(Word::Gosub, args)?;
        let index = self.find_line(Word::Gosub, number)?;
        self.returns.push(self.pc)?;
        self.pc = Address::Line(index, 0);
        Ok(())
    }

    fn r#goto(&mut self, args: &[Token]) -> Result<()> {
        let number = line_target(Word::Goto, args)?;
        self.pc = Address::Line(self.find_line(Word::Goto, number)?, 0);
        Ok(())
    }

    fn r#if(&mut self, args: &[Token]) -> Result<()> {
        let position = args
            .iter()
            .position(|t| t.is_word(Word::Then) || t.is_word(Word::Goto));
        let (condition, word, rest) = match position {
            Some(index) => match &args[index] {
                Token::Word(word) => (&args[..index], *word, &args[index + 1..]),
                _ => return Err(error!(InternalError)),
            },
            None => return Err(error!(SyntaxError; "EXPECTED THEN")),
        };
        if !self.expression(condition)?.is_true() {
            self.skip_line();
            return Ok(());
        }
        match (word, rest) {
            (_, [Token::Number(_)]) | (Word::Goto, _) => {
                let number = line_target(word, rest)?;
                self.pc = Address::Line(self.find_line(word, number)?, 0);
                Ok(())
            }
            (_, []) => Err(error!(SyntaxError; "EXPECTED LINE NUMBER OR STATEMENT")),
            (_, statement) => self.dispatch(statement),
        }
    }

    fn r#input(&mut self, args: &[Token]) -> Result<()> {
        let (prompt, args) = match args {
            [Token::Text(prompt), Token::Semicolon, rest @ ..]
            | [Token::Text(prompt), Token::Comma, rest @ ..] => (format!("{}? ", prompt), rest),
            _ => ("? ".to_string(), args),
        };
        self.input = variables(args)?.into_iter().collect();
        self.column += prompt.chars().count();
        self.events.push_back(Event::Input(prompt));
        self.state = State::Input;
        Ok(())
    }

    fn r#let(&mut self, args: &[Token]) -> Result<()> {
        match args {
            [Token::Ident(name), Token::Operator(Operator::Equal), rest @ ..] => {
                self.assign(name, rest)
            }
            _ => Err(error!(SyntaxError; "EXPECTED VARIABLE =")),
        }
    }

    fn r#list(&mut self, args: &[Token]) -> Result<()> {
        let max = LineNumber::max_value();
        let (from, to) = match args {
            [] => (0, max),
            [Token::Number(from)] => (list_number(*from)?, list_number(*from)?),
            [Token::Number(from), Token::Operator(Operator::Minus)] => (list_number(*from)?, max),
            [Token::Operator(Operator::Minus), Token::Number(to)] => (0, list_number(*to)?),
            [Token::Number(from), Token::Operator(Operator::Minus), Token::Number(to)] => {
                (list_number(*from)?, list_number(*to)?)
            }
            _ => return Err(error!(SyntaxError; "EXPECTED LINE RANGE")),
        };
        if from > to {
            return Ok(());
        }
        let lines: Vec<String> = self.listing.list(from..=to).collect();
        self.events.extend(lines.into_iter().map(Event::List));
        Ok(())
    }

    fn r#new(&mut self, args: &[Token]) -> Result<()> {
        no_args(args)?;
        self.listing.clear();
        self.dirty = true;
        self.refresh();
        self.var.clear();
        self.loops.clear();
        self.returns.clear();
        self.data.clear();
        self.data_index = 0;
        self.tron = false;
        self.state = State::Stopped;
        Ok(())
    }

    fn r#next(&mut self, args: &[Token]) -> Result<()> {
        let names: Vec<Option<Rc<str>>> = if args.is_empty() {
            vec![None]
        } else {
            variables(args)?.into_iter().map(Some).collect()
        };
        for name in names {
            let frame = match self.loops.last() {
                Some(frame) => frame.clone(),
                None => return Err(error!(NextWithoutFor)),
            };
            if let Some(name) = name {
                if name != frame.var {
                    return Err(error!(NextVariableMismatch; &name));
                }
            }
            let value = f32::try_from(self.var.fetch(&frame.var))? + frame.step;
            if !value.is_finite() {
                return Err(error!(Overflow));
            }
            self.var.store(&frame.var, Val::Number(value))?;
            if (frame.step > 0.0 && value <= frame.limit)
                || (frame.step < 0.0 && value >= frame.limit)
            {
                self.pc = frame.resume;
                return Ok(());
            }
            self.loops.pop()?;
        }
        Ok(())
    }

    fn r#print(&mut self, args: &[Token]) -> Result<()> {
        let mut out = String::new();
        let mut items = 0;
        for item in print_items(args) {
            if items > 0 {
                out.push(' ');
            }
            let column = self.column + out.chars().count();
            out.push_str(&self.expression_at(item, column)?.to_string());
            items += 1;
        }
        if !matches!(args.last(), Some(Token::Semicolon) | Some(Token::Comma)) {
            out.push('\n');
        }
        if !out.is_empty() {
            self.write(out);
        }
        Ok(())
    }

    fn r#read(&mut self, args: &[Token]) -> Result<()> {
        for name in variables(args)? {
            let item = match self.data.get(self.data_index) {
                Some(item) => item.clone(),
                None => return Err(error!(OutOfData)),
            };
            self.data_index += 1;
            let value = if Var::is_string(&name) {
                Val::String(item)
            } else {
                Val::Number(Val::parse_number(&item))
            };
            self.var.store(&name, value)?;
        }
        Ok(())
    }

    fn r#restore(&mut self, args: &[Token]) -> Result<()> {
        no_args(args)?;
        self.collect_data();
        Ok(())
    }

    fn r#return(&mut self, args: &[Token]) -> Result<()> {
        no_args(args)?;
        if self.returns.is_empty() {
            return Err(error!(ReturnWithoutGosub));
        }
        self.pc = self.returns.pop()?;
        Ok(())
    }

    fn r#run(&mut self, args: &[Token]) -> Result<()> {
        let from = match args {
            [] => None,
            _ => Some(line_target(Word::Run, args)?),
        };
        self.refresh();
        if self.program.is_empty() {
            self.write("NO PROGRAM.\n".to_string());
            return Ok(());
        }
        let index = match from {
            Some(number) => self.find_line(Word::Run, number)?,
            None => 0,
        };
        self.var.clear();
        self.loops.clear();
        self.returns.clear();
        self.collect_data();
        self.pc = Address::Line(index, 0);
        self.state = State::Running;
        Ok(())
    }

    fn r#troff(&mut self, args: &[Token]) -> Result<()> {
        no_args(args)?;
        self.tron = false;
        Ok(())
    }

    fn r#tron(&mut self, args: &[Token]) -> Result<()> {
        no_args(args)?;
        self.tron = true;
        Ok(())
    }
}

fn no_args(args: &[Token]) -> Result<()> {
    match args.first() {
        None => Ok(()),
        Some(token) => Err(error!(SyntaxError; &format!("UNEXPECTED {}", token))),
    }
}

/// First top level occurrence of a keyword.
fn split_at_word(tokens: &[Token], word: Word) -> Option<(&[Token], &[Token])> {
    let index = tokens.iter().position(|t| t.is_word(word))?;
    Some((&tokens[..index], &tokens[index + 1..]))
}

fn line_target(word: Word, tokens: &[Token]) -> Result<u16> {
    match tokens {
        [Token::Number(n)] => {
            if n.fract() == 0.0 && *n >= 0.0 && *n <= LineNumber::max_value() as f32 {
                Ok(*n as u16)
            } else {
                Err(error!(UndefinedLine; &format!("{} {}", word, n)))
            }
        }
        _ => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
    }
}

fn list_number(n: f32) -> Result<u16> {
    if n.fract() == 0.0 && n >= 0.0 && n <= LineNumber::max_value() as f32 {
        Ok(n as u16)
    } else {
        Err(error!(SyntaxError; "INVALID LINE NUMBER"))
    }
}

/// A comma separated list of variable names.
fn variables(tokens: &[Token]) -> Result<Vec<Rc<str>>> {
    let mut names = vec![];
    let mut expect_name = true;
    for token in tokens {
        match (expect_name, token) {
            (true, Token::Ident(name)) => names.push(name.clone()),
            (false, Token::Comma) => {}
            _ => return Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        }
        expect_name = !expect_name;
    }
    if expect_name {
        return Err(error!(SyntaxError; "EXPECTED VARIABLE"));
    }
    Ok(names)
}

/// Splits a `PRINT` list on top level `;` and `,` and between
/// juxtaposed operands such as `"X=" X`.
fn print_items(tokens: &[Token]) -> Vec<&[Token]> {
    let mut items = vec![];
    let mut depth = 0usize;
    let mut start = 0;
    for (index, token) in tokens.iter().enumerate() {
        if depth == 0 {
            if let Token::Semicolon | Token::Comma = token {
                if index > start {
                    items.push(&tokens[start..index]);
                }
                start = index + 1;
                continue;
            }
            if index > start && tokens[index - 1].ends_operand() && token.starts_operand() {
                items.push(&tokens[start..index]);
                start = index;
            }
        }
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    if start < tokens.len() {
        items.push(&tokens[start..]);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::lex;

    fn items(s: &str) -> Vec<String> {
        let tokens = lex(s).unwrap();
        print_items(&tokens)
            .iter()
            .map(|item| {
                item.iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect()
    }

    #[test]
    fn test_print_items() {
        assert_eq!(items(r#""X=" X; Y"#), vec![r#""X=""#, "X", "Y"]);
        assert_eq!(items("LEFT$(A$, 2), B;"), vec!["LEFT$ ( A$ , 2 )", "B"]);
        assert_eq!(items("A - 1"), vec!["A - 1"]);
        assert_eq!(items(";;"), Vec::<String>::new());
    }

    #[test]
    fn test_variables() {
        let tokens = lex("A, B$").unwrap();
        let names = variables(&tokens).unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(&*names[1], "B$");
        assert!(variables(&lex("A,").unwrap()).is_err());
        assert!(variables(&[]).is_err());
    }

    #[test]
    fn test_line_target() {
        assert_eq!(line_target(Word::Goto, &lex("100").unwrap()).unwrap(), 100);
        let e = line_target(Word::Goto, &lex("1.5").unwrap()).unwrap_err();
        assert_eq!(e.to_string(), "UNDEFINED LINE; GOTO 1.5");
        let e = line_target(Word::Goto, &lex("A").unwrap()).unwrap_err();
        assert_eq!(e.to_string(), "SYNTAX ERROR; EXPECTED LINE NUMBER");
    }
}
