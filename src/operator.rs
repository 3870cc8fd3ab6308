use hashbrown::HashMap;

/// Precedence and associativity of an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    /// Operators with higher precedence are applied first
    pub precedence: u8,
    /// Whether repeated application groups right-to-left
    pub right_associative: bool,
}

impl OperatorInfo {
    const fn new(precedence: u8, right_associative: bool) -> Self {
        Self {
            precedence,
            right_associative,
        }
    }
}

lazy_static! {
    pub static ref OPERATORS: HashMap<&'static str, OperatorInfo> = {
        let mut map = HashMap::<&'static str, OperatorInfo>::new();
        map.insert("+", OperatorInfo::new(2, false));
        map.insert("-", OperatorInfo::new(2, false));
        map.insert("*", OperatorInfo::new(3, false));
        map.insert("/", OperatorInfo::new(3, false));
        map.insert("^", OperatorInfo::new(4, true));
        // factorial and log share the binary operator machinery
        map.insert("!", OperatorInfo::new(5, true));
        map.insert("log", OperatorInfo::new(6, true));
        map.shrink_to_fit();
        map
    };
}

#[must_use]
/// Get the precedence and associativity of the operator spelled `symbol`,
/// or `None` if `symbol` is not an operator.
///
/// # Examples
///
/// ```
/// # use calcengine::lookup;
///
/// assert_eq!(lookup("*").map(|info| info.precedence), Some(3));
/// assert!(lookup("^").unwrap().right_associative);
/// assert_eq!(lookup("%"), None);
/// ```
pub fn lookup(symbol: &str) -> Option<OperatorInfo> {
    OPERATORS.get(symbol).copied()
}

#[cfg(test)]
mod tests {
    use super::lookup;
    use test_case::test_case;

    #[test_case("+" => Some((2, false)) ; "plus")]
    #[test_case("-" => Some((2, false)) ; "minus")]
    #[test_case("*" => Some((3, false)) ; "times")]
    #[test_case("/" => Some((3, false)) ; "divided by")]
    #[test_case("^" => Some((4, true)) ; "caret")]
    #[test_case("!" => Some((5, true)) ; "bang")]
    #[test_case("log" => Some((6, true)) ; "log")]
    #[test_case("(" => None ; "parenthesis is not an operator")]
    #[test_case("ln" => None ; "unknown function")]
    fn table(symbol: &str) -> Option<(u8, bool)> {
        lookup(symbol).map(|info| (info.precedence, info.right_associative))
    }
}
