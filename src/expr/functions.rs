/// Built-in functions callable from expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Sec,
    Csc,
    Cot,
    Exp,
    Log,
    Log10,
    Log2,
    Log1p,
    Sqrt,
    Cbrt,
    Abs,
    Ceil,
    Floor,
    Signum,
    ToDegrees,
    ToRadians,
    Atan2,
    Pow,
    Min,
    Max,
}

const ALL: [Function; 29] = [
    Function::Sin,
    Function::Cos,
    Function::Tan,
    Function::Asin,
    Function::Acos,
    Function::Atan,
    Function::Sinh,
    Function::Cosh,
    Function::Tanh,
    Function::Sec,
    Function::Csc,
    Function::Cot,
    Function::Exp,
    Function::Log,
    Function::Log10,
    Function::Log2,
    Function::Log1p,
    Function::Sqrt,
    Function::Cbrt,
    Function::Abs,
    Function::Ceil,
    Function::Floor,
    Function::Signum,
    Function::ToDegrees,
    Function::ToRadians,
    Function::Atan2,
    Function::Pow,
    Function::Min,
    Function::Max,
];

impl Function {
    /// Resolves a function by name; `ln` is accepted as an alias of `log`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "ln" {
            return Some(Self::Log);
        }
        ALL.iter().copied().find(|function| function.name() == name)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Sec => "sec",
            Self::Csc => "csc",
            Self::Cot => "cot",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Log1p => "log1p",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Abs => "abs",
            Self::Ceil => "ceil",
            Self::Floor => "floor",
            Self::Signum => "signum",
            Self::ToDegrees => "toDegrees",
            Self::ToRadians => "toRadians",
            Self::Atan2 => "atan2",
            Self::Pow => "pow",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Atan2 | Self::Pow | Self::Min | Self::Max => 2,
            _ => 1,
        }
    }

    /// Applies the function. `args.len()` equals `arity()`; the parser enforces it.
    ///
    /// Out-of-domain inputs yield NaN or an infinity, never an error.
    #[must_use]
    pub fn apply(self, args: &[f64]) -> f64 {
        let a = args.first().copied().unwrap_or(f64::NAN);
        let b = args.get(1).copied().unwrap_or(f64::NAN);
        match self {
            Self::Sin => a.sin(),
            Self::Cos => a.cos(),
            Self::Tan => a.tan(),
            Self::Asin => a.asin(),
            Self::Acos => a.acos(),
            Self::Atan => a.atan(),
            Self::Sinh => a.sinh(),
            Self::Cosh => a.cosh(),
            Self::Tanh => a.tanh(),
            Self::Sec => 1.0 / a.cos(),
            Self::Csc => 1.0 / a.sin(),
            Self::Cot => 1.0 / a.tan(),
            Self::Exp => a.exp(),
            Self::Log => a.ln(),
            Self::Log10 => a.log10(),
            Self::Log2 => a.log2(),
            Self::Log1p => a.ln_1p(),
            Self::Sqrt => a.sqrt(),
            Self::Cbrt => a.cbrt(),
            Self::Abs => a.abs(),
            Self::Ceil => a.ceil(),
            Self::Floor => a.floor(),
            Self::Signum => {
                if a == 0.0 {
                    0.0
                } else {
                    a.signum()
                }
            }
            Self::ToDegrees => a.to_degrees(),
            Self::ToRadians => a.to_radians(),
            Self::Atan2 => a.atan2(b),
            Self::Pow => a.powf(b),
            Self::Min => a.min(b),
            Self::Max => a.max(b),
        }
    }
}
