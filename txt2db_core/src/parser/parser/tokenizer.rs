use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Word,
    Quoted,
    Comma,
    Star,
    Op,
}

/// A lexical token. `start..end` is the byte span in the source text,
/// including the quotes of a quoted token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            start,
            end,
        }
    }

    /// Case-insensitive keyword match on a bare word.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Word && self.text.eq_ignore_ascii_case(keyword)
    }
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, String> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut it = input.char_indices().peekable();

    while let Some(&(pos, ch)) = it.peek() {
        match ch {
            c if c.is_whitespace() => {
                it.next();
            }

            ',' => {
                it.next();
                tokens.push(Token::new(TokenKind::Comma, ",", pos, pos + 1));
            }

            '*' => {
                it.next();
                tokens.push(Token::new(TokenKind::Star, "*", pos, pos + 1));
            }

            '"' | '\'' => {
                it.next();
                let mut text = String::new();
                let mut end = None;
                for (i, c) in it.by_ref() {
                    if c == ch {
                        end = Some(i + 1);
                        break;
                    }
                    text.push(c);
                }
                let end = end.ok_or_else(|| format!("Unclosed quote ({ch}) in input"))?;
                tokens.push(Token::new(TokenKind::Quoted, text, pos, end));
            }

            '=' | '<' | '>' => {
                it.next();
                let mut op = ch.to_string();
                if ch != '=' && matches!(it.peek(), Some(&(_, '='))) {
                    it.next();
                    op.push('=');
                }
                let end = pos + op.len();
                tokens.push(Token::new(TokenKind::Op, op, pos, end));
            }

            '!' if next_is_eq(&it) => {
                it.next();
                it.next();
                tokens.push(Token::new(TokenKind::Op, "!=", pos, pos + 2));
            }

            _ => {
                let mut text = String::new();
                let mut end = pos;
                while let Some(&(i, c)) = it.peek() {
                    if breaks_word(c, &it) {
                        break;
                    }
                    text.push(c);
                    end = i + c.len_utf8();
                    it.next();
                }
                tokens.push(Token::new(TokenKind::Word, text, pos, end));
            }
        }
    }

    Ok(tokens)
}

fn next_is_eq(it: &Peekable<CharIndices<'_>>) -> bool {
    let mut look = it.clone();
    look.next();
    matches!(look.peek(), Some(&(_, '=')))
}

// Quotes only open a string at the start of a token, so `it's` stays one word.
fn breaks_word(c: char, it: &Peekable<CharIndices<'_>>) -> bool {
    match c {
        ',' | '*' | '=' | '<' | '>' => true,
        '!' => next_is_eq(it),
        c => c.is_whitespace(),
    }
}
