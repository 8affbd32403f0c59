use super::{Listing, Program, Stack, Val, Var, MAX_LINE_LEN};
use crate::error;
use crate::lang::{data_items, is_remark, lex, Error, ErrorCode, Line, LineNumber};
use std::collections::VecDeque;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// A statement position. `Line` indexes the running `Program`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address {
    Line(usize, usize),
    Direct(usize),
}

impl Address {
    pub fn is_direct(&self) -> bool {
        matches!(self, Address::Direct(_))
    }

    fn next(self) -> Address {
        match self {
            Address::Line(line, statement) => Address::Line(line, statement + 1),
            Address::Direct(statement) => Address::Direct(statement + 1),
        }
    }
}

/// What the front end should do next.
#[derive(Debug)]
pub enum Event {
    Print(String),
    Input(String),
    List(String),
    Error(Error),
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum State {
    Stopped,
    Running,
    Input,
}

#[derive(Debug, Clone)]
pub(super) struct LoopFrame {
    pub var: Rc<str>,
    pub limit: f32,
    pub step: f32,
    pub resume: Address,
}

/// ## Execution driver
///
/// Owns the stored listing, the snapshot being run, the program counter
/// and the loop and return stacks. The front end feeds it lines with
/// `enter` and pulls `Event`s from `execute`.
#[derive(Debug)]
pub struct Runtime {
    pub(super) listing: Listing,
    pub(super) program: Program,
    pub(super) dirty: bool,
    pub(super) direct: Line,
    pub(super) state: State,
    pub(super) pc: Address,
    pub(super) line_number: LineNumber,
    pub(super) var: Var,
    pub(super) loops: Stack<LoopFrame>,
    pub(super) returns: Stack<Address>,
    pub(super) data: Vec<Rc<str>>,
    pub(super) data_index: usize,
    pub(super) input: VecDeque<Rc<str>>,
    pub(super) column: usize,
    pub(super) tron: bool,
    pub(super) events: VecDeque<Event>,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime {
            listing: Listing::default(),
            program: Program::default(),
            dirty: false,
            direct: Line::default(),
            state: State::Stopped,
            pc: Address::Direct(0),
            line_number: None,
            var: Var::new(),
            loops: Stack::new(ErrorCode::OutOfMemory, "FOR NESTED TOO DEEPLY"),
            returns: Stack::new(ErrorCode::OutOfMemory, "GOSUB NESTED TOO DEEPLY"),
            data: vec![],
            data_index: 0,
            input: VecDeque::new(),
            column: 0,
            tron: false,
            events: VecDeque::new(),
        }
    }
}

impl Runtime {
    /// Accepts a line of text from the front end. Numbered lines edit the
    /// listing, other lines run on the next `execute`. While a program
    /// waits on `INPUT` the text answers it instead.
    /// Returns true when the text is worth keeping in a history.
    pub fn enter(&mut self, text: &str) -> bool {
        if self.state == State::Input {
            self.answer(text);
            return !text.trim().is_empty();
        }
        if text.len() > MAX_LINE_LEN {
            self.report(error!(LineBufferOverflow));
            return true;
        }
        let line = match Line::new(text) {
            Ok(line) => line,
            Err(error) => {
                self.report(error);
                return true;
            }
        };
        if line.is_direct() {
            if line.is_empty() {
                return false;
            }
            self.loops.retain(|frame| !frame.resume.is_direct());
            self.returns.retain(|address| !address.is_direct());
            self.direct = line;
            self.pc = Address::Direct(0);
            self.line_number = None;
            self.state = State::Running;
        } else {
            self.listing.insert(line);
            self.edited();
        }
        true
    }

    /// Stops a running program or a pending `INPUT` with `BREAK`.
    pub fn interrupt(&mut self) {
        if self.state != State::Stopped {
            self.input.clear();
            self.report(error!(Break, self.line_number));
        }
    }

    pub fn get_listing(&self) -> Listing {
        self.listing.clone()
    }

    pub fn set_listing(&mut self, listing: Listing) {
        self.listing = listing;
        self.edited();
    }

    pub fn is_tracing(&self) -> bool {
        self.tron
    }

    pub fn set_tracing(&mut self, tron: bool) {
        self.tron = tron;
    }

    /// Runs at most `cycles` statements and reports what happened.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if let Some(event) = self.events.pop_front() {
                return event;
            }
            match self.state {
                State::Stopped => return Event::Stopped,
                State::Input => return Event::Input("? ".to_string()),
                State::Running => {}
            }
            if let Err(error) = self.step() {
                self.report(error);
            }
        }
        match self.events.pop_front() {
            Some(event) => event,
            None => match self.state {
                State::Stopped => Event::Stopped,
                State::Input => Event::Input("? ".to_string()),
                State::Running => Event::Running,
            },
        }
    }

    /// Fetches the statement at the counter, advances the counter and
    /// dispatches. Jumps simply overwrite the advanced counter.
    fn step(&mut self) -> Result<()> {
        let statement = match self.pc {
            Address::Direct(index) => {
                self.line_number = None;
                match self.direct.statements().get(index) {
                    Some(statement) => statement.clone(),
                    None => {
                        self.state = State::Stopped;
                        return Ok(());
                    }
                }
            }
            Address::Line(line, index) => {
                self.refresh();
                let (number, statement) = match self.program.line(line) {
                    Some(l) => (l.number(), l.statements().get(index).cloned()),
                    None => {
                        self.state = State::Stopped;
                        return Ok(());
                    }
                };
                self.line_number = number;
                if index == 0 && self.tron {
                    if let Some(number) = number {
                        self.write(format!("[{}]", number));
                    }
                }
                match statement {
                    Some(statement) => statement,
                    None => {
                        self.pc = Address::Line(line + 1, 0);
                        return Ok(());
                    }
                }
            }
        };
        self.pc = self.pc.next();
        let line_number = self.line_number;
        self.statement(&statement)
            .map_err(|error| error.in_line_number(line_number))
    }

    fn statement(&mut self, statement: &str) -> Result<()> {
        if is_remark(statement) || data_items(statement).is_some() {
            return Ok(());
        }
        let tokens = lex(statement)?;
        self.dispatch(&tokens)
    }

    /// Reports an error and goes idle.
    pub(super) fn report(&mut self, error: Error) {
        if self.column != 0 {
            self.write("\n".to_string());
        }
        self.events.push_back(Event::Error(error));
        self.input.clear();
        self.state = State::Stopped;
    }

    pub(super) fn write(&mut self, text: String) {
        match text.rfind('\n') {
            Some(index) => self.column = text[index + 1..].chars().count(),
            None => self.column += text.chars().count(),
        }
        self.events.push_back(Event::Print(text));
    }

    /// Listing edits invalidate every address into the snapshot.
    fn edited(&mut self) {
        self.dirty = true;
        self.loops.clear();
        self.returns.clear();
    }

    pub(super) fn refresh(&mut self) {
        if self.dirty {
            self.program = Program::new(&self.listing);
            self.dirty = false;
        }
    }

    pub(super) fn collect_data(&mut self) {
        self.refresh();
        self.data = self.program.data();
        self.data_index = 0;
    }

    fn answer(&mut self, text: &str) {
        self.column = 0;
        let name = match self.input.pop_front() {
            Some(name) => name,
            None => {
                self.state = State::Running;
                return;
            }
        };
        let value = if Var::is_string(&name) {
            Val::from(text)
        } else {
            Val::Number(Val::parse_number(text))
        };
        if let Err(error) = self.var.store(&name, value) {
            self.report(error.in_line_number(self.line_number));
            return;
        }
        if self.input.is_empty() {
            self.state = State::Running;
        } else {
            self.events.push_back(Event::Input("? ".to_string()));
        }
    }
}
