use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

/// Failure while parsing or evaluating one expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("syntax error at offset {position}: {message}")]
    Syntax { message: String, position: usize },

    #[error("undefined variable `{0}`")]
    UndefinedVariable(String),

    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    #[error("function `{name}` expects {expected} argument(s), found {found}")]
    Arity {
        name: String,
        expected: usize,
        found: usize,
    },
}

impl EvalError {
    pub(crate) fn syntax(message: impl Into<String>, position: usize) -> Self {
        Self::Syntax {
            message: message.into(),
            position,
        }
    }
}

/// Rejection of a sweep range before any value is produced.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    #[error("range step must not be zero")]
    ZeroStep,

    #[error("range end {end} is unreachable from start {start} with step {step}")]
    Unreachable { start: f64, end: f64, step: f64 },

    #[error("range bounds must be finite: start={start}, end={end}, step={step}")]
    NonFinite { start: f64, end: f64, step: f64 },

    #[error("range needs {steps} steps, more than the limit of {limit}")]
    TooManySteps { steps: f64, limit: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("invalid variable name `{0}`")]
    InvalidName(String),

    #[error("invalid bounding rectangle: width={width}, height={height}")]
    InvalidRect { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("`{command}` is not a valid command\n{usage}")]
    UnknownCommand { command: String, usage: String },
}
