use crate::error::Error;
use crate::token::{Op, Token};

/// Reorder infix `tokens` into reverse polish notation with the
/// Shunting-Yard algorithm.
///
/// `log` is handled as a function call: it is emitted as soon as the
/// parenthesized group that follows it is closed.
///
/// # Examples
///
/// ```
/// # use calcengine::{to_postfix, tokenize, Op, Token};
///
/// let postfix = to_postfix(&tokenize("1 + 2 * 3")).unwrap();
/// assert_eq!(postfix, vec![
///     Token::Number(1.0),
///     Token::Number(2.0),
///     Token::Number(3.0),
///     Token::Operator(Op::Multiply),
///     Token::Operator(Op::Add),
/// ]);
/// ```
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, Error> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    'tokens: for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Operator(o1) => {
                'operators: while let Some(&top) = operators.last() {
                    match top {
                        Token::Operator(o2) => {
                            let pop_me =
                                o1.is_left_associative() && o1.precedence() <= o2.precedence();
                            let pop_me = pop_me
                                || o1.is_right_associative() && o1.precedence() < o2.precedence();
                            if pop_me {
                                operators.pop();
                                output.push(top);
                            } else {
                                break 'operators;
                            }
                        }
                        _ => break 'operators,
                    }
                }
                operators.push(token);
            }
            Token::LParen => operators.push(token),
            Token::RParen => {
                while let Some(top) = operators.pop() {
                    match top {
                        Token::LParen => {
                            if operators.last() == Some(&Token::Operator(Op::Log)) {
                                operators.pop();
                                output.push(Token::Operator(Op::Log));
                            }
                            continue 'tokens;
                        }
                        Token::Operator(_) => output.push(top),
                        other => {
                            return Err(Error::parse(format!("unknown token {}", other)));
                        }
                    }
                }
                return Err(Error::parse("mismatched parentheses"));
            }
        }
    }

    while let Some(token) = operators.pop() {
        match token {
            Token::LParen | Token::RParen => {
                return Err(Error::parse("mismatched parentheses"));
            }
            Token::Operator(_) => output.push(token),
            other => return Err(Error::parse(format!("unknown token {}", other))),
        }
    }
    Ok(output)
}
