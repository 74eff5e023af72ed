//! Operators and built-in functions of turtle expressions.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// `^`, exponentiation.
    Pow,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Parse an operator symbol.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }
}

/// Unary operators.
///
/// Only negation changes its operand.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Pos,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> char {
        match self {
            Self::Neg => '-',
            Self::Pos => '+',
        }
    }

    /// Any symbol other than `-` leaves the operand unchanged.
    pub const fn from_symbol(symbol: char) -> Self {
        match symbol {
            '-' => Self::Neg,
            _ => Self::Pos,
        }
    }
}

/// Single-argument math functions.
///
/// Trigonometric functions take degrees. `random` takes two arguments and
/// has its own node kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MathFunc {
    Cos,
    Sin,
    Tan,
    Sqrt,
}

impl MathFunc {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cos => "cos",
            Self::Sin => "sin",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
        }
    }
}
