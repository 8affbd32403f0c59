extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::Error;
use crate::mach::{Event, Listing, Runtime};
use ansi_term::Style;
use clap::Parser;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "basic")]
#[command(about = "A line-numbered BASIC interpreter")]
#[command(version)]
pub struct Args {
    /// File of numbered lines to load and RUN
    pub file: Option<PathBuf>,

    /// Start with TRON enabled
    #[arg(long)]
    pub trace: bool,

    /// Statements executed between checks for Ctrl-C
    #[arg(long, default_value_t = 5000)]
    pub cycles: usize,
}

pub fn main() {
    let args = Args::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let result = match &args.file {
        Some(path) => run_file(&args, path, interrupted),
        None => main_loop(&args, interrupted).map(|_| true),
    };
    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    runtime.set_tracing(args.trace);
    let command = Interface::new("BASIC")?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);
    let mut print_ready = true;

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(args.cycles) {
            Event::Stopped => {
                if print_ready {
                    print_ready = false;
                    command.write_fmt(format_args!("READY.\n"))?;
                }
                let saved_completer = command.completer();
                command.set_completer(Arc::new(LineCompleter::new(&runtime.get_listing())));
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                command.set_completer(saved_completer);
                if !string.trim_start().starts_with(|c: char| c.is_ascii_digit()) {
                    print_ready = true;
                }
                if runtime.enter(&string) {
                    command.add_history_unique(string);
                }
            }
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        if runtime.enter(&string) {
                            input.add_history_unique(string);
                        }
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Error(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(format!("?{}", error))
                ))?;
                print_ready = true;
            }
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::List(s) => {
                command.write_fmt(format_args!("{}\n", s))?;
            }
        }
    }
    Ok(())
}

/// Loads a program, runs it to completion on stdin and stdout.
/// Returns false when the program ended with an error.
fn run_file(args: &Args, path: &Path, interrupted: Arc<AtomicBool>) -> std::io::Result<bool> {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("basic: cannot read {}: {}", path.display(), error);
            return Ok(false);
        }
    };
    let listing = match load(&source) {
        Ok(listing) => listing,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
            return Ok(false);
        }
    };
    let mut runtime = Runtime::default();
    runtime.set_listing(listing);
    runtime.set_tracing(args.trace);
    runtime.enter("RUN");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(args.cycles) {
            Event::Stopped => return Ok(true),
            Event::Running => {}
            Event::Print(s) => write!(stdout, "{}", s)?,
            Event::List(s) => writeln!(stdout, "{}", s)?,
            Event::Error(error) => {
                stdout.flush()?;
                eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
                return Ok(false);
            }
            Event::Input(prompt) => {
                write!(stdout, "{}", prompt)?;
                stdout.flush()?;
                let mut answer = String::new();
                if stdin.lock().read_line(&mut answer)? == 0 {
                    runtime.interrupt();
                } else {
                    runtime.enter(answer.trim_end_matches(&['\r', '\n'][..]));
                }
            }
        }
    }
}

/// Every line of a program file must carry a line number.
fn load(source: &str) -> Result<Listing, Error> {
    let mut listing = Listing::default();
    for (index, line) in source.lines().enumerate() {
        if let Err(error) = listing.load_str(line) {
            return Err(error.message(&format!(
                "IN LINE {} OF THE FILE",
                index + 1
            )));
        }
    }
    Ok(listing)
}

/// TAB after a bare line number recalls the stored line for editing.
struct LineCompleter {
    lines: BTreeMap<usize, String>,
}

impl LineCompleter {
    fn new(listing: &Listing) -> LineCompleter {
        let lines = listing
            .lines()
            .filter_map(|line| Some((line.number()? as usize, line.to_string())))
            .collect();
        LineCompleter { lines }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let num = prompter.buffer().trim().parse::<usize>().ok()?;
        let mut comp = Completion::simple(self.lines.get(&num)?.clone());
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load() {
        let listing = load("20 PRINT 2\n10 PRINT 1\n\n").unwrap();
        assert_eq!(listing.len(), 2);
        let e = load("10 PRINT 1\nPRINT 2\n").unwrap_err();
        assert_eq!(
            e.to_string(),
            "DIRECT STATEMENT IN FILE; IN LINE 2 OF THE FILE"
        );
    }

    #[test]
    fn test_args() {
        let args = Args::parse_from(["basic", "--trace", "--cycles", "10", "prog.bas"]);
        assert!(args.trace);
        assert_eq!(args.cycles, 10);
        assert_eq!(args.file, Some(PathBuf::from("prog.bas")));
        let args = Args::parse_from(["basic"]);
        assert_eq!(args.cycles, 5000);
        assert!(args.file.is_none());
    }
}
