use logos::Logos;

use crate::error::EvalError;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum Token {
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TokenInfo {
    pub token: Token,
    pub lexeme: String,
    pub position: usize,
}

pub(crate) fn tokenize(input: &str) -> Result<Vec<TokenInfo>, EvalError> {
    let mut lexer = Token::lexer(input);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push(TokenInfo {
                token,
                lexeme: lexer.slice().to_owned(),
                position: span.start,
            }),
            Err(()) => {
                return Err(EvalError::syntax(
                    format!("invalid token '{}'", lexer.slice()),
                    span.start,
                ));
            }
        }
    }
    Ok(tokens)
}
