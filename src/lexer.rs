use crate::error::Error;
use crate::token::{Op, Token};

pub(crate) const OUT_OF_RANGE: &str = "numeric literal does not fit in a double precision number";

/// Split `expression` into tokens, silently skipping whitespace and any
/// character that does not start a token.
///
/// # Examples
///
/// ```
/// # use calcengine::{tokenize, Op, Token};
///
/// assert_eq!(
///     tokenize("2 # ^ .5"),
///     vec![Token::Number(2.0), Token::Operator(Op::Power), Token::Number(0.5)]
/// );
/// ```
#[must_use]
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(expression, false);
    let mut tokens = Vec::new();
    // a permissive lexer never reports an error
    while let Ok(Some(token)) = lexer.next_token() {
        tokens.push(token);
    }
    tokens
}

/// Split `expression` into tokens, failing on any character that is neither
/// whitespace nor part of a token, and on literals too large for an `f64`.
///
/// # Examples
///
/// ```
/// # use calcengine::tokenize_strict;
///
/// assert!(tokenize_strict("log(100) + 2!").is_ok());
/// assert!(tokenize_strict("2 # 3").is_err());
/// ```
pub fn tokenize_strict(expression: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(expression, true);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

/// An helper struct for lexing the input
struct Lexer<'a> {
    input: &'a str,
    position: usize,
    strict: bool,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str, strict: bool) -> Self {
        Lexer {
            input,
            position: 0,
            strict,
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        loop {
            let rest = &self.input[self.position..];
            let c = match rest.chars().next() {
                Some(c) => c,
                None => return Ok(None),
            };

            if rest.starts_with(Op::Log.symbol()) {
                self.position += Op::Log.symbol().len();
                return Ok(Some(Token::Operator(Op::Log)));
            }

            if let Some(len) = number_length(rest) {
                let literal = &rest[..len];
                self.position += len;
                // only digits and a single inner dot at this point
                let value: f64 = match literal.parse() {
                    Ok(value) => value,
                    Err(_) => continue,
                };
                if self.strict && !value.is_finite() {
                    return Err(Error::overflow(OUT_OF_RANGE));
                }
                return Ok(Some(Token::Number(value)));
            }

            self.position += c.len_utf8();
            let token = match c {
                '+' => Token::Operator(Op::Add),
                '-' => Token::Operator(Op::Subtract),
                '*' => Token::Operator(Op::Multiply),
                '/' => Token::Operator(Op::Divide),
                '^' => Token::Operator(Op::Power),
                '!' => Token::Operator(Op::Factorial),
                '(' => Token::LParen,
                ')' => Token::RParen,
                c if c.is_whitespace() || !self.strict => continue,
                other => {
                    return Err(Error::parse(format!(
                        "unexpected character in input: {}",
                        other
                    )));
                }
            };
            return Ok(Some(token));
        }
    }
}

/// Length in bytes of the numeric literal at the start of `input`, if any.
///
/// A literal is an optional run of digits, then optionally a single dot
/// followed by at least one digit. A dot without a digit after it is not
/// part of the literal.
fn number_length(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let integer = count_digits(bytes);
    let mut length = integer;
    if bytes.get(integer) == Some(&b'.') {
        let fraction = count_digits(&bytes[integer + 1..]);
        if fraction > 0 {
            length = integer + 1 + fraction;
        }
    }
    if length == 0 {
        None
    } else {
        Some(length)
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
