mod common;
use basic::lang::ErrorKind;
use basic::mach::Runtime;
use common::*;

fn kind_of(lines: &[&str]) -> ErrorKind {
    let mut r = Runtime::default();
    for line in lines {
        r.enter(line);
    }
    exec_error(&mut r).unwrap().kind()
}

#[test]
fn test_unknown_targets_are_control_flow() {
    assert_eq!(kind_of(&["10 GOTO 100", "RUN"]), ErrorKind::ControlFlow);
    assert_eq!(kind_of(&["10 GOSUB 100", "RUN"]), ErrorKind::ControlFlow);
    assert_eq!(kind_of(&["10 IF 1 THEN 100", "RUN"]), ErrorKind::ControlFlow);
    assert_eq!(kind_of(&["10 IF 1 GOTO 100", "RUN"]), ErrorKind::ControlFlow);
}

#[test]
fn test_unbalanced_loops_and_calls_are_control_flow() {
    assert_eq!(kind_of(&["NEXT"]), ErrorKind::ControlFlow);
    assert_eq!(kind_of(&["RETURN"]), ErrorKind::ControlFlow);
    assert_eq!(kind_of(&["FOR I=1 TO 2:NEXT J"]), ErrorKind::ControlFlow);
    assert_eq!(kind_of(&["10 GOSUB 10", "RUN"]), ErrorKind::ControlFlow);
}

#[test]
fn test_statement_errors() {
    assert_eq!(kind_of(&["THEN 10"]), ErrorKind::Statement);
    assert_eq!(kind_of(&[", A"]), ErrorKind::Statement);
    let long = format!("PRINT \"{}\"", "X".repeat(300));
    assert_eq!(kind_of(&[&long]), ErrorKind::Statement);
}

#[test]
fn test_evaluation_errors() {
    assert_eq!(kind_of(&["PRINT 1/0"]), ErrorKind::Eval);
    assert_eq!(kind_of(&["A$=1"]), ErrorKind::Eval);
    assert_eq!(kind_of(&["10 READ A", "RUN"]), ErrorKind::Eval);
    assert_eq!(kind_of(&["PRINT SQR(-1)"]), ErrorKind::Eval);
}

#[test]
fn test_lex_and_parse_errors() {
    assert_eq!(kind_of(&["PRINT @"]), ErrorKind::Lex);
    assert_eq!(kind_of(&["PRINT (1"]), ErrorKind::Parse);
    assert_eq!(kind_of(&["PRINT 1 +"]), ErrorKind::Parse);
}

#[test]
fn test_errors_carry_their_line() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 1");
    r.enter("20 GOTO 5");
    r.enter("RUN");
    let e = exec_error(&mut r).unwrap();
    assert_eq!(e.line_number(), Some(20));
    assert!(!e.is_direct());
    assert_eq!(e.code(), 8);
    r.enter("NEXT");
    let e = exec_error(&mut r).unwrap();
    assert!(e.is_direct());
    assert_eq!(e.code(), 1);
}
