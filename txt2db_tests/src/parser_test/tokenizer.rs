use super::*;

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).unwrap().iter().map(|t| t.kind).collect()
}

fn texts(input: &str) -> Vec<String> {
    tokenize(input).unwrap().into_iter().map(|t| t.text).collect()
}

#[test]
fn tokenize_splits_operators_without_spaces() {
    assert_eq!(texts("age>=25"), vec!["age", ">=", "25"]);
    assert_eq!(texts("age<=25"), vec!["age", "<=", "25"]);
    assert_eq!(texts("a!=b"), vec!["a", "!=", "b"]);
    assert_eq!(texts("a=b<c>d"), vec!["a", "=", "b", "<", "c", ">", "d"]);
    assert_eq!(
        kinds("a >= 1"),
        vec![TokenKind::Word, TokenKind::Op, TokenKind::Word]
    );
}

#[test]
fn tokenize_lone_bang_is_part_of_word() {
    assert_eq!(texts("!x wow!"), vec!["!x", "wow!"]);
}

#[test]
fn tokenize_commas_and_star() {
    assert_eq!(
        kinds("select * from t, u"),
        vec![
            TokenKind::Word,
            TokenKind::Star,
            TokenKind::Word,
            TokenKind::Word,
            TokenKind::Comma,
            TokenKind::Word
        ]
    );
}

#[test]
fn tokenize_quoted_span_includes_quotes() {
    let tokens = tokenize(r#"x = "a,b""#).unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].kind, TokenKind::Quoted);
    assert_eq!(tokens[2].text, "a,b");
    assert_eq!((tokens[2].start, tokens[2].end), (4, 9));
}

#[test]
fn tokenize_single_quotes() {
    let tokens = tokenize("'New York' x").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Quoted);
    assert_eq!(tokens[0].text, "New York");
    assert_eq!(tokens[1].text, "x");
}

#[test]
fn tokenize_apostrophe_in_word() {
    assert_eq!(texts("it's fine"), vec!["it's", "fine"]);
}

#[test]
fn tokenize_rejects_unclosed_quote() {
    let err = tokenize(r#"values "abc"#).unwrap_err();
    assert!(err.to_lowercase().contains("unclosed quote"));
}

#[test]
fn tokenize_keyword_check_is_case_insensitive() {
    let tokens = tokenize("WHERE").unwrap();
    assert!(tokens[0].is_keyword("where"));
    let tokens = tokenize("'where'").unwrap();
    assert!(!tokens[0].is_keyword("where"));
}

#[test]
fn tokenize_multibyte_spans() {
    let input = "name = Zoë";
    let tokens = tokenize(input).unwrap();
    assert_eq!(&input[tokens[2].start..tokens[2].end], "Zoë");
}
