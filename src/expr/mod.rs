//! Numeric expression evaluator.
//!
//! Expressions are parsed once into a tree and evaluated against a
//! [`VariableTable`] snapshot. Evaluation is pure: no state survives a call.
//! Out-of-domain arithmetic (`sqrt(-1)`, `1/0`) produces NaN or an infinity
//! rather than an error.

mod functions;
mod lexer;
mod parser;

use std::fmt;

pub use functions::Function;

use crate::core::VariableTable;
use crate::error::EvalError;

use parser::{BinaryOp, Node};

/// Parses and evaluates `expression` against `variables` in one step.
pub fn evaluate(expression: &str, variables: &VariableTable) -> Result<f64, EvalError> {
    Expression::parse(expression)?.eval(variables)
}

/// A parsed expression together with its source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Node,
}

impl Expression {
    pub fn parse(source: &str) -> Result<Self, EvalError> {
        let source = source.trim();
        let root = parser::parse(source)?;
        Ok(Self {
            source: source.to_owned(),
            root,
        })
    }

    /// Numeric literal with a known source spelling.
    pub(crate) fn literal(source: &str, value: f64) -> Self {
        Self {
            source: source.to_owned(),
            root: Node::Number(value),
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn eval(&self, variables: &VariableTable) -> Result<f64, EvalError> {
        eval_node(&self.root, variables)
    }

    /// Distinct variable names referenced by the expression, in source order.
    #[must_use]
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        collect_variables(&self.root, &mut names);
        names
    }

    /// Fails with the first referenced name missing from `variables`.
    pub fn check_variables(&self, variables: &VariableTable) -> Result<(), EvalError> {
        match self
            .variables()
            .into_iter()
            .find(|name| !variables.contains(name))
        {
            Some(missing) => Err(EvalError::UndefinedVariable(missing.to_owned())),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn eval_node(node: &Node, variables: &VariableTable) -> Result<f64, EvalError> {
    match node {
        Node::Number(value) => Ok(*value),
        Node::Variable(name) => variables
            .get(name)
            .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),
        Node::Negate(inner) => Ok(-eval_node(inner, variables)?),
        Node::Binary { op, lhs, rhs } => {
            let lhs = eval_node(lhs, variables)?;
            let rhs = eval_node(rhs, variables)?;
            Ok(match op {
                BinaryOp::Add => lhs + rhs,
                BinaryOp::Sub => lhs - rhs,
                BinaryOp::Mul => lhs * rhs,
                BinaryOp::Div => lhs / rhs,
                BinaryOp::Rem => lhs % rhs,
                BinaryOp::Pow => lhs.powf(rhs),
            })
        }
        Node::Call { function, args } => {
            let values = args
                .iter()
                .map(|arg| eval_node(arg, variables))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(function.apply(&values))
        }
    }
}

fn collect_variables<'a>(node: &'a Node, names: &mut Vec<&'a str>) {
    match node {
        Node::Number(_) => {}
        Node::Variable(name) => {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        Node::Negate(inner) => collect_variables(inner, names),
        Node::Binary { lhs, rhs, .. } => {
            collect_variables(lhs, names);
            collect_variables(rhs, names);
        }
        Node::Call { args, .. } => {
            for arg in args {
                collect_variables(arg, names);
            }
        }
    }
}
