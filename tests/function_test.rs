mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_string_slicing() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT LEFT$("HELLO", 3); MID$("HELLO", 2, 3); RIGHT$("HELLO", 2)"#);
    assert_eq!(exec(&mut r), "HEL ELL LO\n");
}

#[test]
fn test_case_and_codes() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT UCASE$("abc"); LCASE$("DeF"); ASC("A"); CHR$(66)"#);
    assert_eq!(exec(&mut r), "ABC def 65 B\n");
}

#[test]
fn test_conversions() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT VAL("12.5 APPLES") + 1; LEN(STR$(-3.25)); VAL("NONE")"#);
    assert_eq!(exec(&mut r), "13.5 5 0\n");
}

#[test]
fn test_math() {
    let mut r = Runtime::default();
    r.enter("PRINT ABS(-2); INT(2.7); INT(-2.5); SGN(-9); SQR(16); EXP(0); LOG(1); SIN(0); COS(0)");
    assert_eq!(exec(&mut r), "2 2 -3 -1 4 1 0 0 1\n");
}

#[test]
fn test_rnd_range() {
    let mut r = Runtime::default();
    r.enter("10 FOR I = 1 TO 100");
    r.enter("20 X = RND(1): IF X < 0 OR X >= 1 THEN PRINT X");
    r.enter("30 NEXT I");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_print_position() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT "AB"; TAB(6); "C"; POS(0)"#);
    assert_eq!(exec(&mut r), "AB     C 9\n");
    r.enter(r#"PRINT "A"; SPC(2); "B""#);
    assert_eq!(exec(&mut r), "A    B\n");
}

#[test]
fn test_illegal_function_call() {
    let mut r = Runtime::default();
    r.enter("10 PRINT SQR(-1)");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "?ILLEGAL FUNCTION CALL IN 10; SQR\n");
    r.enter(r#"PRINT MID$("ABC", 0, 1)"#);
    assert_eq!(exec(&mut r), "?ILLEGAL FUNCTION CALL; MID$\n");
    r.enter(r#"PRINT LEN(5)"#);
    assert_eq!(exec(&mut r), "?ILLEGAL FUNCTION CALL; LEN\n");
}

#[test]
fn test_arity_is_checked() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT MID$("ABC", 1)"#);
    assert_eq!(exec(&mut r), "?SYNTAX ERROR; MID$ TAKES 3 ARGUMENTS\n");
    r.enter("PRINT RND()");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR; RND TAKES 1 ARGUMENTS\n");
}
