use super::tokenizer::{Token, TokenKind};

/// Source text covered by a run of tokens, quotes included.
pub(super) fn raw_slice<'a>(input: &'a str, tokens: &[Token]) -> &'a str {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => &input[first.start..last.end],
        _ => "",
    }
}

/// Bare identifier made of letters, digits and underscores.
pub(super) fn identifier(token: &Token) -> Option<String> {
    let ok = token.kind == TokenKind::Word
        && !token.text.is_empty()
        && token.text.chars().all(|c| c.is_alphanumeric() || c == '_');
    ok.then(|| token.text.clone())
}

/// Splits a token run on top-level commas and returns each item's trimmed
/// source text. Commas inside quotes belong to the quoted token, and empty
/// items come back as empty strings.
pub(super) fn split_list(input: &str, tokens: &[Token]) -> Vec<String> {
    tokens
        .split(|t| t.kind == TokenKind::Comma)
        .map(|item| raw_slice(input, item).trim().to_string())
        .collect()
}

/// Lower-cased leading words of the input, used to classify a command
/// before it is tokenized.
pub(super) fn leading_words(input: &str, n: usize) -> Vec<String> {
    let mut words = Vec::new();
    let mut rest = input;
    while words.len() < n {
        rest = rest.trim_start();
        let len = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        if len == 0 {
            break;
        }
        words.push(rest[..len].to_lowercase());
        rest = &rest[len..];
    }
    words
}
