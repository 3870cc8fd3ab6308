use crate::operator::{lookup, OperatorInfo};
use std::fmt::{self, Display, Formatter};

/// Possible tokens to find in the input string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// An operator, including the `!` and `log` unary-like operators
    Operator(Op),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `!`
    Factorial,
    /// `log`, always base 10
    Log,
}

impl Op {
    /// The textual spelling of the operator
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Factorial => "!",
            Self::Log => "log",
        }
    }

    fn info(self) -> OperatorInfo {
        // every variant has an entry in the operator table
        lookup(self.symbol()).unwrap_or_else(|| unreachable!("no table entry for {:?}", self))
    }

    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    #[must_use]
    pub fn precedence(self) -> u8 {
        self.info().precedence
    }

    /// Check if the operator is right associative
    #[must_use]
    pub fn is_right_associative(self) -> bool {
        self.info().right_associative
    }

    /// Check if the operator is left associative
    #[must_use]
    pub fn is_left_associative(self) -> bool {
        !self.is_right_associative()
    }

    /// Check if the operator consumes two operands
    #[must_use]
    pub fn is_binary(self) -> bool {
        !matches!(self, Self::Factorial | Self::Log)
    }
}

impl Display for Op {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(self.symbol())
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Number(value) => write!(fmt, "{}", value),
            Self::Operator(op) => write!(fmt, "{}", op),
            Self::LParen => fmt.write_str("("),
            Self::RParen => fmt.write_str(")"),
        }
    }
}
