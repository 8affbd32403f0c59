use super::LineNumber;

pub struct Error {
    code: u16,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

/// The five families every error code belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    Lex,
    Parse,
    Eval,
    ControlFlow,
    Statement,
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    /// Errors are raised without a line and gain one when they
    /// leave the statement that raised them. The first line wins.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: line,
            ..self
        }
    }

    /// Adds detail to the message. Later detail follows earlier detail.
    pub fn message(self, message: &str) -> Error {
        let message = if self.message.is_empty() {
            message.to_string()
        } else {
            format!("{}; {}", self.message, message)
        };
        Error { message, ..self }
    }

    pub fn kind(&self) -> ErrorKind {
        use ErrorKind::*;
        match self.code {
            70 | 71 => Lex,
            2 | 22 => Parse,
            1 | 3 | 7 | 8 | 72 | 75 => ControlFlow,
            23 | 66 | 73 => Statement,
            _ => Eval,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NextWithoutFor = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    OutOfData = 4,
    IllegalFunctionCall = 5,
    Overflow = 6,
    OutOfMemory = 7,
    UndefinedLine = 8,
    DivisionByZero = 11,
    TypeMismatch = 13,
    FormulaTooComplex = 16,
    MissingOperand = 22,
    LineBufferOverflow = 23,
    InternalError = 51,
    DirectStatementInFile = 66,
    UnexpectedCharacter = 70,
    TokenizerStuck = 71,
    NextVariableMismatch = 72,
    UnknownStatement = 73,
    UnknownOperator = 74,
    Break = 75,
    TooManyVariables = 76,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "NEXT WITHOUT FOR",
            2 => "SYNTAX ERROR",
            3 => "RETURN WITHOUT GOSUB",
            4 => "OUT OF DATA",
            5 => "ILLEGAL FUNCTION CALL",
            6 => "OVERFLOW",
            7 => "OUT OF MEMORY",
            8 => "UNDEFINED LINE",
            11 => "DIVISION BY ZERO",
            13 => "TYPE MISMATCH",
            16 => "FORMULA TOO COMPLEX",
            22 => "MISSING OPERAND",
            23 => "LINE BUFFER OVERFLOW",
            51 => "INTERNAL ERROR",
            66 => "DIRECT STATEMENT IN FILE",
            70 => "UNEXPECTED CHARACTER",
            71 => "TOKENIZER STUCK",
            72 => "NEXT VARIABLE MISMATCH",
            73 => "UNKNOWN STATEMENT",
            74 => "UNKNOWN OPERATOR",
            75 => "BREAK",
            76 => "TOO MANY VARIABLES",
            _ => "",
        };
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}", self.code)?;
        } else {
            write!(f, "{}", code_str)?;
        }
        if let Some(line_number) = self.line_number {
            write!(f, " IN {}", line_number)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
