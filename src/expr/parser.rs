//! Recursive-descent parser with the usual precedence levels:
//! - `parse_sum`: `+`, `-`
//! - `parse_product`: `*`, `/`, `%`, implicit multiplication (`2x`, `3(x+1)`)
//! - `parse_unary`: prefix `-` and `+`
//! - `parse_power`: right-associative `^`
//! - `parse_primary`: numbers, variables, calls, grouping

use crate::error::EvalError;

use super::functions::Function;
use super::lexer::{Token, TokenInfo, tokenize};

/// Deepest tree the parser will build. Each grouping, sign, exponent, call
/// and chained operator counts one level.
pub(crate) const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Number(f64),
    Variable(String),
    Negate(Box<Node>),
    Binary {
        op: BinaryOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    Call {
        function: Function,
        args: Vec<Node>,
    },
}

pub(crate) fn parse(input: &str) -> Result<Node, EvalError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::syntax("empty expression", 0));
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        end: input.len(),
        depth: 0,
    };
    let node = parser.parse_sum()?;
    if let Some(info) = parser.tokens.get(parser.pos) {
        return Err(EvalError::syntax(
            format!("unexpected '{}' after expression", info.lexeme),
            info.position,
        ));
    }
    Ok(node)
}

struct Parser {
    tokens: Vec<TokenInfo>,
    pos: usize,
    end: usize,
    depth: usize,
}

impl Parser {
    fn parse_sum(&mut self) -> Result<Node, EvalError> {
        let mut node = self.parse_product()?;
        let mut links = 0;
        loop {
            let op = match self.peek_token() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.descend()?;
            links += 1;
            self.pos += 1;
            let rhs = self.parse_product()?;
            node = binary(op, node, rhs);
        }
        self.depth -= links;
        Ok(node)
    }

    fn parse_product(&mut self) -> Result<Node, EvalError> {
        let mut node = self.parse_unary()?;
        let mut links = 0;
        loop {
            let op = match self.peek_token() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                Some(Token::Percent) => BinaryOp::Rem,
                // Juxtaposition: `2x`, `3(x+1)` style operands.
                Some(Token::Ident | Token::LParen) => {
                    self.descend()?;
                    links += 1;
                    let rhs = self.parse_unary()?;
                    node = binary(BinaryOp::Mul, node, rhs);
                    continue;
                }
                _ => break,
            };
            self.descend()?;
            links += 1;
            self.pos += 1;
            let rhs = self.parse_unary()?;
            node = binary(op, node, rhs);
        }
        self.depth -= links;
        Ok(node)
    }

    fn parse_unary(&mut self) -> Result<Node, EvalError> {
        let negate = match self.peek_token() {
            Some(Token::Minus) => true,
            Some(Token::Plus) => false,
            _ => return self.parse_power(),
        };
        self.descend()?;
        self.pos += 1;
        let operand = self.parse_unary()?;
        self.depth -= 1;
        Ok(if negate {
            Node::Negate(Box::new(operand))
        } else {
            operand
        })
    }

    fn parse_power(&mut self) -> Result<Node, EvalError> {
        let base = self.parse_primary()?;
        if self.peek_token() == Some(&Token::Caret) {
            self.descend()?;
            self.pos += 1;
            // right associative; the exponent may carry its own sign
            let exponent = self.parse_unary()?;
            self.depth -= 1;
            return Ok(binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Node, EvalError> {
        let Some(info) = self.next() else {
            return Err(EvalError::syntax(
                "unexpected end of input, expected operand",
                self.end,
            ));
        };

        match info.token {
            Token::Number(value) => Ok(Node::Number(value)),
            Token::Ident => {
                if self.peek_token() == Some(&Token::LParen) {
                    self.parse_call(info)
                } else {
                    Ok(Node::Variable(info.lexeme))
                }
            }
            Token::LParen => {
                self.descend_at(info.position)?;
                let node = self.parse_sum()?;
                self.expect(Token::RParen, "expected ')' to close parentheses")?;
                self.depth -= 1;
                Ok(node)
            }
            _ => Err(EvalError::syntax(
                format!("unexpected '{}', expected operand", info.lexeme),
                info.position,
            )),
        }
    }

    fn parse_call(&mut self, name: TokenInfo) -> Result<Node, EvalError> {
        let function = Function::from_name(&name.lexeme)
            .ok_or_else(|| EvalError::UnknownFunction(name.lexeme.clone()))?;
        self.descend()?;
        self.pos += 1; // '('

        let mut args = Vec::with_capacity(function.arity());
        if !self.consume(Token::RParen) {
            args.push(self.parse_sum()?);
            while self.consume(Token::Comma) {
                args.push(self.parse_sum()?);
            }
            self.expect(Token::RParen, "expected ')' after function arguments")?;
        }
        self.depth -= 1;

        if args.len() != function.arity() {
            return Err(EvalError::Arity {
                name: name.lexeme,
                expected: function.arity(),
                found: args.len(),
            });
        }
        Ok(Node::Call { function, args })
    }

    /// Enters one tree level at the token under the cursor.
    fn descend(&mut self) -> Result<(), EvalError> {
        self.descend_at(self.position())
    }

    fn descend_at(&mut self, position: usize) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::syntax("expression nested too deeply", position));
        }
        Ok(())
    }

    fn expect(&mut self, token: Token, message: &str) -> Result<(), EvalError> {
        if self.consume(token) {
            return Ok(());
        }
        Err(EvalError::syntax(message, self.position()))
    }

    fn position(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map_or(self.end, |info| info.position)
    }

    fn peek_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    fn next(&mut self) -> Option<TokenInfo> {
        let info = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(info)
    }

    fn consume(&mut self, token: Token) -> bool {
        if self.peek_token() == Some(&token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}

fn binary(op: BinaryOp, lhs: Node, rhs: Node) -> Node {
    Node::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}
