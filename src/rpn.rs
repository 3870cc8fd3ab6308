use crate::arithmetic::{self, FactorialMemo};
use crate::config::Config;
use crate::error::Error;
use crate::lexer::OUT_OF_RANGE;
use crate::token::{Op, Token};

/// Evaluate a sequence of tokens in reverse polish notation.
///
/// Factorials are computed through `memo`. With `config.lenient_operands`, a
/// binary operator that finds a single operand on the stack uses `0.0` as its
/// left operand.
///
/// # Errors
///
/// `Error::ParseError` if the sequence contains a parenthesis, an operator
/// without operand, or does not reduce to exactly one value.
/// `Error::Overflow` for a number that is not finite. Any error of the
/// arithmetic primitives is propagated unchanged.
pub fn evaluate(postfix: &[Token], memo: &FactorialMemo, config: &Config) -> Result<f64, Error> {
    let mut stack: Vec<f64> = Vec::new();

    for &token in postfix {
        match token {
            Token::Number(value) if !value.is_finite() => {
                return Err(Error::overflow(OUT_OF_RANGE));
            }
            Token::Number(value) => stack.push(value),
            Token::Operator(op) => {
                let b = stack
                    .pop()
                    .ok_or_else(|| Error::parse(format!("missing operand for {}", op)))?;
                let a = if op.is_binary() {
                    match stack.pop() {
                        Some(a) => a,
                        None if config.lenient_operands => 0.0,
                        None => {
                            return Err(Error::parse(format!("missing operand for {}", op)));
                        }
                    }
                } else {
                    0.0
                };
                stack.push(apply(op, a, b, memo)?);
            }
            other => return Err(Error::parse(format!("unknown token {}", other))),
        }
    }

    match stack.len() {
        0 => Err(Error::parse("empty expression")),
        1 => Ok(stack[0]),
        _ => Err(Error::parse("malformed expression")),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn apply(op: Op, a: f64, b: f64, memo: &FactorialMemo) -> Result<f64, Error> {
    match op {
        Op::Add => arithmetic::add(a, b),
        Op::Subtract => arithmetic::subtract(a, b),
        Op::Multiply => arithmetic::multiply(a, b),
        Op::Divide => arithmetic::divide(a, b),
        Op::Power => arithmetic::power(a, b),
        // the operand is truncated toward zero
        Op::Factorial => memo.factorial(b as i64),
        Op::Log => arithmetic::log(b, 10.0),
    }
}
