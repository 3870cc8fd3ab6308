use crate::arithmetic::{self, FactorialMemo};
use crate::config::Config;
use crate::lexer::{tokenize, tokenize_strict};
use crate::postfix::to_postfix;
use crate::rpn;
use crate::token::Token;
use crate::Error;

/// Evaluate a single expression from `input` with a default
/// [`Calculator`](struct.Calculator.html).
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// parsing or evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use calcengine::eval;
///
/// assert_eq!(eval("45 - 2^3"), Ok(37.0));
/// assert_eq!(eval("3 + 5 * (2 - 8)"), Ok(-27.0));
/// assert!(eval("3 + 5 * (2 - 8").is_err());
/// ```
pub fn eval(input: &str) -> Result<f64, Error> {
    Calculator::new().evaluate(input)
}

/// Compute the population standard deviation of `values`.
///
/// # Example
///
/// ```
/// # use calcengine::standard_deviation;
///
/// assert_eq!(standard_deviation(&[1.0, 3.0]), Ok(1.0));
/// assert!(standard_deviation(&[]).is_err());
/// ```
pub fn standard_deviation(values: &[f64]) -> Result<f64, Error> {
    Calculator::new().standard_deviation(values)
}

/// Entry point of the engine: owns the evaluation policies and the factorial
/// cache shared by every evaluation made through it.
///
/// # Examples
/// ```
/// # use calcengine::Calculator;
/// let calc = Calculator::new();
/// assert_eq!(calc.evaluate("5! / 2"), Ok(60.0));
/// assert_eq!(calc.evaluate("-5 + 2"), Ok(-3.0));
/// assert!(calc.evaluate("(-8)^0.5").is_err());
/// ```
#[derive(Debug, Default)]
pub struct Calculator {
    config: Config,
    memo: FactorialMemo,
}

impl Calculator {
    /// Create a calculator with the default [`Config`](struct.Config.html)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with the given `config`
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            memo: FactorialMemo::new(),
        }
    }

    /// The evaluation policies of this calculator
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The factorial cache of this calculator
    pub fn memo(&self) -> &FactorialMemo {
        &self.memo
    }

    /// Tokenize, convert and evaluate `expression`.
    ///
    /// # Errors
    ///
    /// The first error met by any stage, unchanged.
    pub fn evaluate(&self, expression: &str) -> Result<f64, Error> {
        Expr::parse_with(expression, &self.config)?.eval(self)
    }

    /// Compute the population standard deviation of `values`.
    ///
    /// # Errors
    ///
    /// `Error::DomainError` if `values` is empty, or an overflow met while
    /// summing.
    pub fn standard_deviation(&self, values: &[f64]) -> Result<f64, Error> {
        let result = arithmetic::standard_deviation(values);
        tracing::debug!(count = values.len(), ?result, "standard deviation");
        result
    }
}

/// A parsed expression, stored in reverse polish notation.
///
/// # Examples
/// ```
/// # use calcengine::{Calculator, Expr};
/// let calc = Calculator::new();
/// let expr = Expr::parse("log(100) * 3!").unwrap();
/// assert_eq!(expr.eval(&calc), Ok(12.0));
/// assert_eq!(expr.to_string(), "100 log 3 ! *");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    postfix: Vec<Token>,
}

impl Expr {
    /// Parse the given mathematical `expression` into an `Expr`, skipping
    /// unknown characters.
    ///
    /// # Examples
    /// ```
    /// # use calcengine::Expr;
    /// // A valid expression
    /// assert!(Expr::parse("3 + 5 * 2").is_ok());
    /// // an invalid expression
    /// assert!(Expr::parse("(3 + 5 * 2").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        Self::parse_with(expression, &Config::default())
    }

    /// Parse `expression` following the lexing policy of `config`.
    pub fn parse_with(expression: &str, config: &Config) -> Result<Self, Error> {
        let tokens = if config.strict_lexing {
            tokenize_strict(expression)?
        } else {
            tokenize(expression)
        };
        tracing::trace!(expression, ?tokens, "tokenized");
        let postfix = to_postfix(&tokens)?;
        tracing::trace!(?postfix, "converted to postfix");
        Ok(Self { postfix })
    }

    /// Evaluate the expression with the policies and cache of `calculator`.
    pub fn eval(&self, calculator: &Calculator) -> Result<f64, Error> {
        let result = rpn::evaluate(&self.postfix, &calculator.memo, &calculator.config);
        tracing::debug!(expr = %self, ?result, "evaluated");
        result
    }

    /// The tokens of the expression in reverse polish notation
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut tokens = self.postfix.iter();
        if let Some(first) = tokens.next() {
            write!(fmt, "{}", first)?;
            for token in tokens {
                write!(fmt, " {}", token)?;
            }
        }
        Ok(())
    }
}
