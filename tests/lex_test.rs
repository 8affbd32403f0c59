use basic::lang::{lex, token::*, ErrorKind};

fn tokens(s: &str) -> Vec<String> {
    lex(s).unwrap().iter().map(|t| format!("{:?}", t)).collect()
}

#[test]
fn test_eq_gt() {
    let v = lex("1=<>=<>2").unwrap();
    let mut x = v.iter();
    assert_eq!(x.next(), Some(&Token::Number(1.0)));
    assert_eq!(x.next(), Some(&Token::Operator(Operator::Equal)));
    assert_eq!(x.next(), Some(&Token::Operator(Operator::NotEqual)));
    assert_eq!(x.next(), Some(&Token::Operator(Operator::Equal)));
    assert_eq!(x.next(), Some(&Token::Operator(Operator::NotEqual)));
    assert_eq!(x.next(), Some(&Token::Number(2.0)));
    assert_eq!(x.next(), None);
}

#[test]
fn test_keywords_functions_and_names() {
    let v = lex("for i=1 to len(a$) step 2").unwrap();
    assert_eq!(v[0], Token::Word(Word::For));
    assert_eq!(v[1], Token::Ident("I".into()));
    assert_eq!(v[4], Token::Word(Word::To));
    assert_eq!(v[5], Token::Function(Function::Len));
    assert_eq!(v[7], Token::Ident("A$".into()));
    assert_eq!(v[9], Token::Word(Word::Step));
}

#[test]
fn test_keywords_need_separation() {
    assert_eq!(lex("PRINTX").unwrap(), vec![Token::Ident("PRINTX".into())]);
    assert_eq!(
        lex("ANDY OR X").unwrap(),
        vec![
            Token::Ident("ANDY".into()),
            Token::Logical(Logical::Or),
            Token::Ident("X".into())
        ]
    );
}

#[test]
fn test_text_keeps_case_and_spaces() {
    assert_eq!(
        lex(r#"print "Hi There", 1"#).unwrap(),
        vec![
            Token::Word(Word::Print),
            Token::Text("Hi There".into()),
            Token::Comma,
            Token::Number(1.0)
        ]
    );
}

#[test]
fn test_numbers() {
    assert_eq!(tokens("1.5 .25 7."), vec!["Number(1.5)", "Number(0.25)", "Number(7.0)"]);
    assert_eq!(tokens("A1"), vec![r#"Ident("A1")"#]);
}

#[test]
fn test_unexpected_character() {
    let e = lex("A = 1 # 2").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Lex);
    assert_eq!(e.to_string(), "UNEXPECTED CHARACTER; '#'");
}
