use std::collections::HashMap;
use std::rc::Rc;

thread_local!(
    static STRING_TO_TOKEN: HashMap<String, Token> = Word::ALL
        .iter()
        .map(|w| Token::Word(w.clone()))
        .chain(Function::ALL.iter().map(|f| Token::Function(f.clone())))
        .map(|t| (t.to_string(), t))
        .collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Number(f32),
    Text(Rc<str>),
    Logical(Logical),
    Ident(Rc<str>),
    Operator(Operator),
    Word(Word),
    Function(Function),
    LParen,
    RParen,
    Comma,
    Semicolon,
    Colon,
}

impl Token {
    /// Classifies an upper-cased name as a keyword or builtin function.
    pub fn from_string(s: &str) -> Option<Token> {
        STRING_TO_TOKEN.with(|stt| stt.get(s).cloned())
    }

    pub fn is_word(&self, word: Word) -> bool {
        matches!(self, Token::Word(w) if *w == word)
    }

    /// True for tokens that can begin an operand.
    pub fn starts_operand(&self) -> bool {
        matches!(
            self,
            Token::Number(_)
                | Token::Text(_)
                | Token::Ident(_)
                | Token::Word(_)
                | Token::Function(_)
                | Token::LParen
        )
    }

    /// True for tokens that can end an operand.
    pub fn ends_operand(&self) -> bool {
        matches!(
            self,
            Token::Number(_) | Token::Text(_) | Token::Ident(_) | Token::Word(_) | Token::RParen
        )
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Number(n) => write!(f, "{}", n),
            Text(s) => write!(f, "\"{}\"", s),
            Logical(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Function(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Semicolon => write!(f, ";"),
            Colon => write!(f, ":"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Data,
    End,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    List,
    New,
    Next,
    Print,
    Read,
    Rem,
    Restore,
    Return,
    Run,
    Step,
    Stop,
    Then,
    To,
    Troff,
    Tron,
}

impl Word {
    pub const ALL: [Word; 23] = [
        Word::Data,
        Word::End,
        Word::For,
        Word::Gosub,
        Word::Goto,
        Word::If,
        Word::Input,
        Word::Let,
        Word::List,
        Word::New,
        Word::Next,
        Word::Print,
        Word::Read,
        Word::Rem,
        Word::Restore,
        Word::Return,
        Word::Run,
        Word::Step,
        Word::Stop,
        Word::Then,
        Word::To,
        Word::Troff,
        Word::Tron,
    ];
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Data => write!(f, "DATA"),
            End => write!(f, "END"),
            For => write!(f, "FOR"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            List => write!(f, "LIST"),
            New => write!(f, "NEW"),
            Next => write!(f, "NEXT"),
            Print => write!(f, "PRINT"),
            Read => write!(f, "READ"),
            Rem => write!(f, "REM"),
            Restore => write!(f, "RESTORE"),
            Return => write!(f, "RETURN"),
            Run => write!(f, "RUN"),
            Step => write!(f, "STEP"),
            Stop => write!(f, "STOP"),
            Then => write!(f, "THEN"),
            To => write!(f, "TO"),
            Troff => write!(f, "TROFF"),
            Tron => write!(f, "TRON"),
        }
    }
}

/// `Negate` is never lexed; the parser produces it for a prefix `-`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Negate,
}

impl Operator {
    pub fn from_symbol(s: &str) -> Option<Operator> {
        use Operator::*;
        Some(match s {
            "^" => Caret,
            "*" => Multiply,
            "/" => Divide,
            "+" => Plus,
            "-" => Minus,
            "=" => Equal,
            "<>" => NotEqual,
            "<" => Less,
            "<=" => LessEqual,
            ">" => Greater,
            ">=" => GreaterEqual,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus | Negate => write!(f, "-"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Logical {
    And,
    Or,
    Not,
}

impl std::fmt::Display for Logical {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Logical::And => write!(f, "AND"),
            Logical::Or => write!(f, "OR"),
            Logical::Not => write!(f, "NOT"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Function {
    Abs,
    Asc,
    Atn,
    Chr,
    Cos,
    Exp,
    Int,
    Lcase,
    Left,
    Len,
    Log,
    Mid,
    Pos,
    Right,
    Rnd,
    Sgn,
    Sin,
    Spc,
    Sqr,
    Str,
    Tab,
    Tan,
    Ucase,
    Val,
}

impl Function {
    pub const ALL: [Function; 24] = [
        Function::Abs,
        Function::Asc,
        Function::Atn,
        Function::Chr,
        Function::Cos,
        Function::Exp,
        Function::Int,
        Function::Lcase,
        Function::Left,
        Function::Len,
        Function::Log,
        Function::Mid,
        Function::Pos,
        Function::Right,
        Function::Rnd,
        Function::Sgn,
        Function::Sin,
        Function::Spc,
        Function::Sqr,
        Function::Str,
        Function::Tab,
        Function::Tan,
        Function::Ucase,
        Function::Val,
    ];

    /// Every builtin takes a fixed number of arguments.
    pub fn arity(&self) -> usize {
        use Function::*;
        match self {
            Left | Right => 2,
            Mid => 3,
            _ => 1,
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Function::*;
        let s = match self {
            Abs => "ABS",
            Asc => "ASC",
            Atn => "ATN",
            Chr => "CHR$",
            Cos => "COS",
            Exp => "EXP",
            Int => "INT",
            Lcase => "LCASE$",
            Left => "LEFT$",
            Len => "LEN",
            Log => "LOG",
            Mid => "MID$",
            Pos => "POS",
            Right => "RIGHT$",
            Rnd => "RND",
            Sgn => "SGN",
            Sin => "SIN",
            Spc => "SPC",
            Sqr => "SQR",
            Str => "STR$",
            Tab => "TAB",
            Tan => "TAN",
            Ucase => "UCASE$",
            Val => "VAL",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let t = Token::from_string("REM");
        assert_eq!(t, Some(Token::Word(Word::Rem)));
        let t = Token::from_string("MID$");
        assert_eq!(t, Some(Token::Function(Function::Mid)));
        let t = Token::from_string("PICKLES");
        assert_eq!(t, None);
    }

    #[test]
    fn test_arity() {
        assert_eq!(Function::Mid.arity(), 3);
        assert_eq!(Function::Left.arity(), 2);
        assert_eq!(Function::Rnd.arity(), 1);
    }
}
