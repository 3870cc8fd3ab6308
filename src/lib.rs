#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal,
    clippy::float_cmp
)]

//! Calcengine, a crate for checked evaluation of arithmetic expressions.
//!
//! This crate evaluates infix arithmetic expressions embedded in strings
//! without ever silently producing `NaN` or an infinity: every operation
//! checks its mathematical domain and the range of its result. The easiest
//! way to use this crate is with the [`eval`](fn.eval.html) function:
//!
//! ```
//! assert_eq!(calcengine::eval("3 + 5 * 2"), Ok(13.0));
//! assert!(calcengine::eval("1 / 0").is_err());
//! ```
//!
//! A [`Calculator`](struct.Calculator.html) keeps the evaluation policies
//! and a cache of computed factorials, so reusing one across evaluations is
//! cheaper than calling `eval` repeatedly:
//!
//! ```
//! use calcengine::Calculator;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.evaluate("10! / 8!"), Ok(90.0));
//! assert_eq!(calc.evaluate("2 ^ 10"), Ok(1024.0));
//! ```
//!
//! It is also possible to separate the parsing from the evaluation of an
//! expression with the [`Expr`](struct.Expr.html) type.
//!
//! ```
//! use calcengine::{Calculator, Expr};
//!
//! let expr = Expr::parse("(1 + 2) * 3").unwrap();
//! assert_eq!(expr.to_string(), "1 2 + 3 *");
//! assert_eq!(expr.eval(&Calculator::new()), Ok(9.0));
//! ```
//!
//! # Language definition
//!
//! The language implemented by calcengine contains the following elements:
//!
//! - unsigned decimal literals: `12`, `0.5`, `.25`;
//! - left and right parenthesis;
//! - binary operators: `+` for addition, `-` for subtraction, `*` for
//!   multiplication, `/` for division and `^` for exponentiation;
//! - the postfix factorial `n!`, applied to `n` truncated to an integer;
//! - the base 10 logarithm `log(x)`.
//!
//! Precedence from loosest to tightest is `+ -`, `* /`, `^`, `!`, `log`.
//! `^` groups from the right, the other binary operators from the left.
//! A binary operator with no left operand uses `0`, which is how `-5` is
//! written. Any other character is skipped unless
//! [`Config::strict_lexing`](struct.Config.html) is set.
//!
//! # Technical details
//!
//! calcengine tokenizes the input, reorders the tokens with the
//! Shunting-Yard algorithm and evaluates the resulting reverse polish
//! notation with a single stack. It works only with `f64` data.

#[macro_use]
extern crate lazy_static;

pub mod arithmetic;
mod batch;
mod config;
mod error;
mod expr;
mod lexer;
mod operator;
mod postfix;
mod rpn;
mod token;

pub use arithmetic::FactorialMemo;
pub use batch::parse_values;
pub use config::Config;
pub use error::Error;
pub use expr::{eval, standard_deviation, Calculator, Expr};
pub use lexer::{tokenize, tokenize_strict};
pub use operator::{lookup, OperatorInfo};
pub use postfix::to_postfix;
pub use rpn::evaluate;
pub use token::{Op, Token};
