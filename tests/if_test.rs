mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_if_then_line_number() {
    let mut r = Runtime::default();
    r.enter("10 IF 1 THEN 30");
    r.enter("20 PRINT 2");
    r.enter("30 PRINT 3");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "3\n");
}

#[test]
fn test_if_goto() {
    let mut r = Runtime::default();
    r.enter("10 A=5:IF A>3 AND A<10 GOTO 30");
    r.enter("20 PRINT \"OUT\"");
    r.enter("30 PRINT \"IN\"");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "IN\n");
}

#[test]
fn test_if_then_statement() {
    let mut r = Runtime::default();
    r.enter("if 1 then print \"one\":print \"two\"");
    assert_eq!(exec(&mut r), "one\ntwo\n");
}

#[test]
fn test_false_condition_skips_rest_of_line() {
    let mut r = Runtime::default();
    r.enter("10 IF 0 THEN PRINT \"A\":PRINT \"B\"");
    r.enter("20 PRINT \"C\"");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "C\n");
    r.enter("IF 1 THEN IF 0 THEN PRINT \"X\":PRINT \"Y\"");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_text_conditions() {
    let mut r = Runtime::default();
    r.enter("IF \"1\" THEN PRINT \"T\"");
    assert_eq!(exec(&mut r), "T\n");
    r.enter("IF \"ABC\" THEN PRINT \"T\"");
    assert_eq!(exec(&mut r), "");
    r.enter("A$=\"B\":IF A$>\"A\" THEN PRINT \"LATER\"");
    assert_eq!(exec(&mut r), "LATER\n");
}

#[test]
fn test_if_syntax() {
    let mut r = Runtime::default();
    r.enter("IF 1 PRINT 2");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR; EXPECTED THEN\n");
    r.enter("IF 1 THEN");
    assert_eq!(
        exec(&mut r),
        "?SYNTAX ERROR; EXPECTED LINE NUMBER OR STATEMENT\n"
    );
    r.enter("IF THEN PRINT 1");
    assert_eq!(exec(&mut r), "?MISSING OPERAND\n");
}
