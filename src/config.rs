/// Evaluation policies of a [`Calculator`](struct.Calculator.html).
///
/// The defaults reproduce the historical behaviour of the calculator:
/// unknown characters are skipped and a binary operator without a left
/// operand uses `0.0` in its place, which is how `-5` evaluates to `-5`.
///
/// # Examples
///
/// ```
/// # use calcengine::{Calculator, Config};
/// let calc = Calculator::with_config(Config::default().with_strict_lexing(true));
/// assert!(calc.evaluate("2 $+ 3").is_err());
/// assert_eq!(Calculator::new().evaluate("2 $+ 3"), Ok(5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Substitute `0.0` for a missing left operand of a binary operator
    /// instead of failing with a parse error.
    pub lenient_operands: bool,
    /// Fail on characters the tokenizer does not recognize instead of
    /// skipping them.
    pub strict_lexing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lenient_operands: true,
            strict_lexing: false,
        }
    }
}

impl Config {
    /// Set the `lenient_operands` policy
    #[must_use]
    pub fn with_lenient_operands(mut self, lenient: bool) -> Self {
        self.lenient_operands = lenient;
        self
    }

    /// Set the `strict_lexing` policy
    #[must_use]
    pub fn with_strict_lexing(mut self, strict: bool) -> Self {
        self.strict_lexing = strict;
        self
    }
}
